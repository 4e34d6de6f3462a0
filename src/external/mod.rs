mod memory;
mod postgres;

pub use memory::{
    ActiveRideFlag, MemoryLocalStore, MemoryRideStore, RecordingNavigator, StaticProfile,
    StoreBehaviour,
};
pub use postgres::PgStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::entities::{PendingOrder, Profile};
use crate::error::Error;

/// Key under which the last confirmed food order id is kept.
pub const CURRENT_FOOD_ORDER_ID: &str = "currentFoodOrderId";

/// Remote document store holding submitted rides and food orders.
#[async_trait]
pub trait RideStore {
    async fn create_ride(&self, order: &PendingOrder) -> Result<String, Error>;
}

/// Durable key/value state kept on the user's device.
#[async_trait]
pub trait LocalStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}

pub trait ProfileProvider {
    fn profile(&self) -> Option<Profile>;
}

/// Whether the user already has a ride in progress.
pub trait RideContext {
    fn is_ride_active(&self) -> bool;

    /// Called by the workflow while it still holds its state lock, so no
    /// other confirmation can start between the ride being stored and the
    /// context reporting it.
    fn ride_confirmed(&self);
}

pub trait Navigator {
    fn navigate(&self, destination: Destination);
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Destination {
    RideTracking,
    FoodTracking { order_id: String },
    Back,
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Self::RideTracking => "/waiting-for-driver".into(),
            Self::FoodTracking { order_id: _ } => "/food-waiting-driver".into(),
            Self::Back => "..".into(),
        }
    }
}

pub type DynRideStore = Arc<dyn RideStore + Send + Sync>;
pub type DynLocalStore = Arc<dyn LocalStore + Send + Sync>;
pub type DynProfileProvider = Arc<dyn ProfileProvider + Send + Sync>;
pub type DynRideContext = Arc<dyn RideContext + Send + Sync>;
pub type DynNavigator = Arc<dyn Navigator + Send + Sync>;

/// Everything the confirmation workflow talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub rides: DynRideStore,
    pub local: DynLocalStore,
    pub profile: DynProfileProvider,
    pub context: DynRideContext,
    pub navigator: DynNavigator,
}
