use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub total_distance: f64,
    pub total_price: f64,
}
