use std::fmt::Display;

use crate::unit::Unit;

/// Pounds per kilogram. Both calculators use this one fixed factor.
pub const LB_PER_KG: f64 = 2.20462;

/// Hard input ceiling in pounds.
pub const MAX_WEIGHT_LB: f64 = 2000.0;

/// Input ceiling for a unit. The kilogram ceiling is derived from the pound
/// one so the two calculators cannot drift apart.
#[must_use]
pub fn max_weight(unit: Unit) -> f64 {
    match unit {
        Unit::Lb => MAX_WEIGHT_LB,
        Unit::Kg => (MAX_WEIGHT_LB / LB_PER_KG).round(),
    }
}

/// A non-negative weight tagged with the unit it was entered in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weight {
    value: f64,
    unit: Unit,
}

impl Weight {
    #[must_use]
    pub fn new(value: f64, unit: Unit) -> Self {
        Weight {
            value: value.max(0.0),
            unit,
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Unrounded kilogram value. Rounding is owned by callers.
    #[must_use]
    pub fn to_kg(&self) -> f64 {
        match self.unit {
            Unit::Kg => self.value,
            Unit::Lb => self.value / LB_PER_KG,
        }
    }

    /// Unrounded pound value. Rounding is owned by callers.
    #[must_use]
    pub fn to_lb(&self) -> f64 {
        match self.unit {
            Unit::Kg => self.value * LB_PER_KG,
            Unit::Lb => self.value,
        }
    }

    /// The same weight expressed in the other unit.
    #[must_use]
    pub fn convert(&self) -> Self {
        let unit = self.unit.other();
        let value = match unit {
            Unit::Kg => self.to_kg(),
            Unit::Lb => self.to_lb(),
        };

        Weight { value, unit }
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceilings_agree() {
        assert_eq!(max_weight(Unit::Lb), 2000.0);
        // round(2000 / 2.20462)
        assert_eq!(max_weight(Unit::Kg), 907.0);
    }

    #[test]
    fn identity_when_already_in_unit() {
        assert_eq!(Weight::new(100.0, Unit::Kg).to_kg(), 100.0);
        assert_eq!(Weight::new(315.0, Unit::Lb).to_lb(), 315.0);
    }

    #[test]
    fn converts_with_fixed_factor() {
        let kg = Weight::new(100.0, Unit::Kg);
        assert!((kg.to_lb() - 220.462).abs() < 1e-9);

        let lb = Weight::new(500.0, Unit::Lb);
        assert!((lb.to_kg() - 226.796).abs() < 1e-3);
    }

    #[test]
    fn negative_input_clamps_to_zero() {
        assert_eq!(Weight::new(-5.0, Unit::Kg).value(), 0.0);
    }

    #[test]
    fn round_trips_within_tolerance() {
        // 0 to 907 kg in 0.1 kg steps
        for i in 0..=9070 {
            let value = f64::from(i) / 10.0;
            let back = Weight::new(value, Unit::Kg).convert().convert();
            assert!((back.value() - value).abs() < 0.1);
        }

        // 0 to 2000 lb in 0.1 lb steps
        for i in 0..=20000 {
            let value = f64::from(i) / 10.0;
            let back = Weight::new(value, Unit::Lb).convert().convert();
            assert!((back.value() - value).abs() < 0.1);
        }
    }
}
