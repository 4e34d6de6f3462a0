use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::engine::{Outcome, State};
use crate::entities::{
    DeliveryMode, FilterTab, FoodItem, OrderRequest, RouteRequest, VehicleClass,
};
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteView {
    pub total_distance: f64,
    pub total_price: f64,
    pub car_type: Option<VehicleClass>,
    pub final_price: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryModesView {
    pub filter: FilterTab,
    pub selected: VehicleClass,
    pub modes: Vec<DeliveryMode>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub items: Vec<FoodItem>,
    pub item_count: usize,
    pub subtotal: f64,
    pub delivery_type: VehicleClass,
    pub delivery_fee: f64,
    pub total: f64,
    pub delivery_location: String,
    pub stops: Vec<String>,
    pub address_display: String,
}

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(
        &self,
        route: RouteRequest,
        car_type: Option<VehicleClass>,
    ) -> Result<QuoteView, Error>;
}

#[async_trait]
pub trait DeliveryAPI {
    async fn find_delivery_modes(&self) -> Result<DeliveryModesView, Error>;
    async fn select_filter(&self, tab: FilterTab) -> Result<DeliveryModesView, Error>;
    async fn select_mode(&self, id: VehicleClass) -> Result<DeliveryModesView, Error>;
    async fn confirm_mode(&self) -> Result<SessionView, Error>;
}

#[async_trait]
pub trait SessionAPI {
    async fn find_session(&self) -> Result<SessionView, Error>;
    async fn add_item(&self, item: FoodItem) -> Result<SessionView, Error>;
    async fn update_addresses(
        &self,
        pickup: Option<String>,
        delivery: Option<String>,
    ) -> Result<SessionView, Error>;
    async fn add_stop(&self, stop: String) -> Result<SessionView, Error>;
    async fn remove_stop(&self, stop: String) -> Result<SessionView, Error>;
}

#[async_trait]
pub trait OrderAPI {
    async fn confirm_order(&self, request: OrderRequest) -> Result<Outcome, Error>;
    async fn confirm_session(&self) -> Result<Outcome, Error>;
    async fn retry_order(&self) -> Result<Outcome, Error>;
    async fn find_order_state(&self) -> Result<State, Error>;
    async fn clear_active_ride(&self) -> Result<(), Error>;
}

pub trait API: QuoteAPI + DeliveryAPI + SessionAPI + OrderAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
