use std::{fmt::Display, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub enum Unit {
    Kg,
    Lb,
}

impl Unit {
    #[must_use]
    pub fn other(&self) -> Self {
        match self {
            Unit::Kg => Unit::Lb,
            Unit::Lb => Unit::Kg,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Kg => write!(f, "KG"),
            Unit::Lb => write!(f, "LB"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" => Ok(Unit::Kg),
            "lb" => Ok(Unit::Lb),
            _ => Err("Invalid unit.".to_string()),
        }
    }
}
