mod delivery_mode;
mod food;
mod order;
mod profile;
mod quote;
mod route;
mod vehicle;

pub use delivery_mode::{DeliveryMode, FilterTab};
pub use food::FoodItem;
pub use order::{
    FoodOrder, FoodRequest, OrderRequest, PendingOrder, RideOrder, RideRequest, Status,
    DEFAULT_DROPOFF_LOCATION, DEFAULT_PICKUP_LOCATION,
};
pub use profile::{Profile, PLACEHOLDER_USER_ID, PLACEHOLDER_USER_NAME};
pub use quote::PriceQuote;
pub use route::RouteRequest;
pub use vehicle::VehicleClass;
