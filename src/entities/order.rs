use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{FoodItem, Profile, RouteRequest, VehicleClass};

pub const DEFAULT_PICKUP_LOCATION: &str = "Current Location";
pub const DEFAULT_DROPOFF_LOCATION: &str = "Delivery Location";

/// What the hosting layer asks the workflow to confirm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "request_type", rename_all = "snake_case")]
pub enum OrderRequest {
    Ride(RideRequest),
    Food(FoodRequest),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RideRequest {
    #[serde(default)]
    pub pickup: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub stops: Vec<String>,
    #[serde(default)]
    pub car_type: VehicleClass,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodRequest {
    #[serde(default)]
    pub items: Vec<FoodItem>,
    #[serde(default)]
    pub delivery_fee: f64,
    #[serde(default)]
    pub delivery_type: VehicleClass,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: String,
}

impl OrderRequest {
    pub fn is_ride(&self) -> bool {
        matches!(self, Self::Ride(_))
    }
}

impl RideRequest {
    pub fn route(&self) -> RouteRequest {
        RouteRequest::new(
            self.pickup.clone(),
            self.destination.clone(),
            self.stops.clone(),
        )
        .with_default_endpoints()
    }
}

impl RouteRequest {
    /// Fills blank endpoints the same way a confirmed ride does, so a quote
    /// and the charged price agree.
    pub fn with_default_endpoints(self) -> Self {
        RouteRequest::new(
            or_default(&self.pickup, DEFAULT_PICKUP_LOCATION),
            or_default(&self.destination, DEFAULT_DROPOFF_LOCATION),
            self.stops,
        )
    }
}

impl FoodRequest {
    pub fn pickup_location(&self) -> String {
        or_default(&self.pickup_location, DEFAULT_PICKUP_LOCATION)
    }

    pub fn dropoff_location(&self) -> String {
        or_default(&self.dropoff_location, DEFAULT_DROPOFF_LOCATION)
    }
}

fn or_default(value: &str, default: &str) -> String {
    match value.trim() {
        "" => default.into(),
        value => value.into(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Pending => "pending".into(),
        }
    }
}

/// The record handed to the ride store on confirmation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PendingOrder {
    Ride(RideOrder),
    Food(FoodOrder),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RideOrder {
    pub pickup: String,
    pub destination: String,
    pub stops: Vec<String>,
    pub car_type: VehicleClass,
    pub distance: f64,
    pub price: f64,
    pub status: Status,
    pub user_id: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodOrder {
    pub delivery_type: VehicleClass,
    pub items: Vec<FoodItem>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub status: Status,
    pub user_id: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

impl RideOrder {
    pub fn new(
        route: RouteRequest,
        car_type: VehicleClass,
        distance: f64,
        price: f64,
        profile: Profile,
    ) -> Self {
        Self {
            pickup: route.pickup,
            destination: route.destination,
            stops: route.stops,
            car_type,
            distance,
            price,
            status: Status::Pending,
            user_id: profile.id,
            user_name: profile.name,
            created_at: Utc::now(),
        }
    }
}

impl PendingOrder {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ride(_) => "ride",
            Self::Food(_) => "food",
        }
    }

    pub fn is_ride(&self) -> bool {
        matches!(self, Self::Ride(_))
    }

    pub fn status(&self) -> Status {
        match self {
            Self::Ride(ride) => ride.status,
            Self::Food(food) => food.status,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Ride(ride) => ride.created_at,
            Self::Food(food) => food.created_at,
        }
    }

    /// Amount the user is charged.
    pub fn total(&self) -> f64 {
        match self {
            Self::Ride(ride) => ride.price,
            Self::Food(food) => food.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_request_is_tagged_by_request_type() {
        let request: OrderRequest = serde_json::from_value(serde_json::json!({
            "request_type": "ride",
            "pickup": "A",
            "destination": "B",
            "car_type": "comfort",
        }))
        .unwrap();

        match request {
            OrderRequest::Ride(ride) => {
                assert_eq!(ride.car_type, VehicleClass::Comfort);
                assert!(ride.stops.is_empty());
            }
            OrderRequest::Food(_) => panic!("expected a ride request"),
        }
    }

    #[test]
    fn unknown_vehicle_class_is_rejected_at_the_boundary() {
        let result = serde_json::from_value::<OrderRequest>(serde_json::json!({
            "request_type": "food",
            "delivery_type": "rocket",
        }));

        assert!(result.is_err());
    }

    #[test]
    fn blank_locations_fall_back_to_defaults() {
        let ride = RideRequest {
            pickup: " ".into(),
            destination: "".into(),
            stops: vec![],
            car_type: VehicleClass::Car,
        };

        let route = ride.route();
        assert_eq!(route.pickup, DEFAULT_PICKUP_LOCATION);
        assert_eq!(route.destination, DEFAULT_DROPOFF_LOCATION);
    }

    #[test]
    fn pending_order_serializes_with_type_and_pending_status() {
        let route = RouteRequest::new("A", "B", vec![]);
        let order = PendingOrder::Ride(RideOrder::new(
            route,
            VehicleClass::Car,
            4.2,
            54.0,
            Profile::placeholder(),
        ));

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["type"], "ride");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["user_id"], "user123");
        assert_eq!(value["car_type"], "car");
    }
}
