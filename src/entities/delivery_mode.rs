use serde::{Deserialize, Serialize};

use crate::entities::VehicleClass;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryMode {
    pub id: VehicleClass,
    pub label: String,
    pub eta_minutes: u32,
    pub description: String,
    pub delivery_fee: f64,
}

impl DeliveryMode {
    fn new(id: VehicleClass, label: &str, eta_minutes: u32, description: &str, fee: f64) -> Self {
        Self {
            id,
            label: label.into(),
            eta_minutes,
            description: description.into(),
            delivery_fee: fee,
        }
    }

    /// Vehicles offered for food delivery, in display order.
    pub fn catalog() -> Vec<DeliveryMode> {
        vec![
            Self::new(VehicleClass::Motorbike, "Motorbike", 2, "Fast delivery", 40.0),
            Self::new(VehicleClass::Car, "Car", 20, "Standard delivery", 60.0),
            Self::new(VehicleClass::Bicycle, "Bicycle", 20, "Eco-friendly delivery", 25.0),
        ]
    }

    pub fn find(id: VehicleClass) -> Option<DeliveryMode> {
        Self::catalog().into_iter().find(|mode| mode.id == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterTab {
    Standard,
    Faster,
    Cheaper,
}

impl Default for FilterTab {
    fn default() -> Self {
        Self::Standard
    }
}

impl FilterTab {
    /// Mode preselected whenever this tab is chosen.
    pub fn default_mode(&self) -> VehicleClass {
        match self {
            Self::Standard => VehicleClass::Car,
            Self::Faster => VehicleClass::Motorbike,
            Self::Cheaper => VehicleClass::Bicycle,
        }
    }
}
