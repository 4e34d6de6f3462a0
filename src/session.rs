use serde::{Deserialize, Serialize};

use crate::entities::{FoodItem, FoodRequest, VehicleClass};
use crate::error::{invalid_input_error, Error};
use crate::pricing::clamp_amount;

/// The food order being put together across the shop, route and delivery
/// screens.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderSession {
    items: Vec<FoodItem>,
    pickup_location: String,
    delivery_location: String,
    stops: Vec<String>,
    delivery_type: VehicleClass,
    delivery_fee: f64,
}

impl OrderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, mut item: FoodItem) {
        item.price = clamp_amount(item.price);
        self.items.push(item);
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn set_pickup_location(&mut self, location: impl Into<String>) {
        self.pickup_location = location.into().trim().to_string();
        self.drop_stops_matching_endpoints();
    }

    pub fn set_delivery_location(&mut self, location: impl Into<String>) {
        self.delivery_location = location.into().trim().to_string();
        self.drop_stops_matching_endpoints();
    }

    pub fn delivery_location(&self) -> &str {
        &self.delivery_location
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Appends a stop. Blank names, the pickup, the delivery address and
    /// stops already on the route are refused.
    #[tracing::instrument(skip(self))]
    pub fn add_stop(&mut self, stop: &str) -> Result<(), Error> {
        let stop = stop.trim();

        if stop.is_empty()
            || stop == self.pickup_location
            || stop == self.delivery_location
            || self.stops.iter().any(|existing| existing == stop)
        {
            tracing::warn!("refusing stop {:?}", stop);
            return Err(invalid_input_error());
        }

        self.stops.push(stop.into());
        Ok(())
    }

    pub fn remove_stop(&mut self, stop: &str) -> Result<(), Error> {
        let index = self
            .stops
            .iter()
            .position(|existing| existing == stop.trim())
            .ok_or_else(invalid_input_error)?;

        self.stops.remove(index);
        Ok(())
    }

    pub fn set_delivery_mode(&mut self, id: VehicleClass, fee: f64) {
        self.delivery_type = id;
        self.delivery_fee = clamp_amount(fee);
    }

    pub fn delivery_type(&self) -> VehicleClass {
        self.delivery_type
    }

    pub fn delivery_fee(&self) -> f64 {
        self.delivery_fee
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + self.delivery_fee
    }

    /// Header text for the delivery screen, e.g. `"12 Main Rd +2 stops"`.
    pub fn address_display(&self) -> String {
        let main = match self.delivery_location.as_str() {
            "" => "Current Location",
            location => location,
        };

        match self.stops.len() {
            0 => main.to_string(),
            1 => format!("{} +1 stop", main),
            n => format!("{} +{} stops", main, n),
        }
    }

    pub fn food_request(&self) -> FoodRequest {
        FoodRequest {
            items: self.items.clone(),
            delivery_fee: self.delivery_fee,
            delivery_type: self.delivery_type,
            pickup_location: self.pickup_location.clone(),
            dropoff_location: self.delivery_location.clone(),
        }
    }

    fn drop_stops_matching_endpoints(&mut self) {
        let pickup = &self.pickup_location;
        let delivery = &self.delivery_location;

        self.stops.retain(|stop| stop != pickup && stop != delivery);
    }
}
