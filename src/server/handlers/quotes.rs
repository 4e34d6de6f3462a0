use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::QuoteView;
use crate::entities::{RouteRequest, VehicleClass};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    #[serde(default)]
    pickup: String,
    #[serde(default)]
    destination: String,
    #[serde(default)]
    stops: Vec<String>,
    car_type: Option<VehicleClass>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<QuoteView>, Error> {
    let route = RouteRequest::new(params.pickup, params.destination, params.stops);
    let quote = api.create_quote(route, params.car_type).await?;

    Ok(quote.into())
}
