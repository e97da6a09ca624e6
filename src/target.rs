use std::str::FromStr;

use crate::{
    input_error::InputError,
    unit::Unit,
    weight::{Weight, max_weight},
};

/// Outcome of applying an edit to the target field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputChange {
    Accepted,
    /// The value exceeded the unit maximum and was set to it.
    Clamped,
    /// The text failed validation and the previous value was retained.
    Rejected,
}

/// The validated target-weight field shared by both calculators.
///
/// Holds raw text rather than a number so partially typed values like "225."
/// survive editing. Empty text is a valid "no target" state.
#[derive(Clone, Debug)]
pub struct TargetInput {
    text: String,
    unit: Unit,
}

impl TargetInput {
    #[must_use]
    pub fn new(unit: Unit) -> Self {
        TargetInput {
            text: String::new(),
            unit,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Numeric value of the field; empty or unparseable text is 0.
    #[must_use]
    pub fn value(&self) -> f64 {
        parse_weight(&self.text)
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        Weight::new(self.value(), self.unit)
    }

    /// Attempt sections are only shown for a strictly positive target.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.value() > 0.0
    }

    /// Apply a text edit. Malformed text is rejected and the field keeps its
    /// previous value; values over the unit maximum clamp to it. Neither is
    /// an error, but the caller is told so it can surface a warning.
    pub fn set_text(&mut self, text: &str) -> InputChange {
        if !is_valid_weight_text(text) {
            return InputChange::Rejected;
        }

        let max = max_weight(self.unit);
        if parse_weight(text) > max {
            self.text = format_weight(max);
            return InputChange::Clamped;
        }

        self.text = text.to_string();
        InputChange::Accepted
    }

    /// Switch between pounds and kilograms, converting the stored value and
    /// rounding it to one decimal place. A conversion landing over the new
    /// unit's maximum clamps to it. The text is only rewritten when the
    /// current value is positive.
    pub fn toggle_unit(&mut self) -> InputChange {
        let current = self.weight();
        self.unit = self.unit.other();

        let mut converted = round_to_tenth(current.convert().value());
        let mut change = InputChange::Accepted;

        let max = max_weight(self.unit);
        if converted > max {
            converted = max;
            change = InputChange::Clamped;
        }

        if current.value() > 0.0 {
            self.text = format_weight(converted);
        }

        change
    }
}

/// A validated target weight taken from the command line, kept as raw text.
#[derive(Clone, Debug)]
pub struct TargetText(String);

impl TargetText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        parse_weight(&self.0)
    }
}

impl FromStr for TargetText {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !is_valid_weight_text(s) {
            return Err(InputError::InvalidWeight(s.to_string()));
        }

        Ok(TargetText(s.to_string()))
    }
}

/// Digits with at most one decimal place, matching the input mask of the
/// target field. Empty text passes; it clears the field.
#[must_use]
pub fn is_valid_weight_text(text: &str) -> bool {
    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (text, None),
    };

    whole.chars().all(|c| c.is_ascii_digit())
        && frac.is_none_or(|f| f.len() <= 1 && f.chars().all(|c| c.is_ascii_digit()))
}

/// Numeric value of target text. Anything that fails validation, and valid
/// fragments with no digits such as "" or ".", parse as 0.
#[must_use]
pub fn parse_weight(text: &str) -> f64 {
    if !is_valid_weight_text(text) {
        return 0.0;
    }

    text.parse().unwrap_or(0.0)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn format_weight(value: f64) -> String {
    format!("{value}")
}
