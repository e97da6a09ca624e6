use crate::{
    target::parse_weight,
    unit::Unit,
    weight::{LB_PER_KG, Weight, max_weight},
};

/// Percent schedules for the three attempts, in the order they are shown.
pub const FIRST_ATTEMPT: [u32; 3] = [90, 91, 92];
pub const SECOND_ATTEMPT: [u32; 3] = [95, 96, 97];
pub const THIRD_ATTEMPT: [u32; 3] = [99, 100, 102];

/// Standard competition increment attempts are rounded to, in kilograms.
const PLATE_INCREMENT_KG: f64 = 2.5;

/// One suggested attempt. The pound figure is derived from the rounded
/// kilogram figure, never from the unrounded target, so the two always name
/// the same loadable weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttemptOption {
    pub percent: u32,
    pub kg: f64,
    pub lb: u32,
}

impl AttemptOption {
    fn plan(target_kg: f64, percent: u32) -> Self {
        let exact_kg = target_kg * f64::from(percent) / 100.0;
        let kg = round_to_increment(exact_kg);
        let lb = (kg * LB_PER_KG).round() as u32;

        AttemptOption { percent, kg, lb }
    }
}

/// Attempt suggestions for a target max, three options per attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct AttemptSet {
    pub first: [AttemptOption; 3],
    pub second: [AttemptOption; 3],
    pub third: [AttemptOption; 3],
}

impl AttemptSet {
    #[must_use]
    pub fn plan(target: Weight) -> Self {
        let target_kg = target.to_kg();
        let options = |percents: [u32; 3]| percents.map(|p| AttemptOption::plan(target_kg, p));

        AttemptSet {
            first: options(FIRST_ATTEMPT),
            second: options(SECOND_ATTEMPT),
            third: options(THIRD_ATTEMPT),
        }
    }
}

/// Attempt suggestions for raw target text, as the host screen consumes
/// them. Empty or unparseable text plans from zero; values over the unit
/// maximum plan from the maximum, matching the input boundary.
#[must_use]
pub fn compute_attempts(target_text: &str, unit: Unit) -> AttemptSet {
    let target = parse_weight(target_text).min(max_weight(unit));
    AttemptSet::plan(Weight::new(target, unit))
}

fn round_to_increment(weight_kg: f64) -> f64 {
    (weight_kg / PLATE_INCREMENT_KG).round() * PLATE_INCREMENT_KG
}
