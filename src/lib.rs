#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod attempt;
pub mod input_error;
pub mod loadout;
pub mod plate;
pub mod target;
pub mod unit;
pub mod weight;
