use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Car,
    Motorbike,
    Bicycle,
    Comfort,
    Xl,
}

impl Default for VehicleClass {
    fn default() -> Self {
        Self::Car
    }
}

impl VehicleClass {
    pub fn name(&self) -> String {
        match self {
            Self::Car => "car".into(),
            Self::Motorbike => "motorbike".into(),
            Self::Bicycle => "bicycle".into(),
            Self::Comfort => "comfort".into(),
            Self::Xl => "xl".into(),
        }
    }

    /// Factor applied to a route's base price.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Car => 1.0,
            Self::Motorbike => 0.8,
            Self::Bicycle => 0.6,
            Self::Comfort => 1.3,
            Self::Xl => 1.6,
        }
    }
}

impl FromStr for VehicleClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "car" => Ok(Self::Car),
            "motorbike" => Ok(Self::Motorbike),
            "bicycle" => Ok(Self::Bicycle),
            "comfort" => Ok(Self::Comfort),
            "xl" => Ok(Self::Xl),
            _ => Err(invalid_input_error()),
        }
    }
}
