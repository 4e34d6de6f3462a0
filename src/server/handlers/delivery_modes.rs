use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::{DeliveryModesView, SessionView};
use crate::entities::{FilterTab, VehicleClass};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct FilterParams {
    filter: FilterTab,
}

#[derive(Serialize, Deserialize)]
pub struct SelectionParams {
    mode: VehicleClass,
}

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<DeliveryModesView>, Error> {
    let modes = api.find_delivery_modes().await?;

    Ok(modes.into())
}

pub async fn select_filter(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<FilterParams>,
) -> Result<Json<DeliveryModesView>, Error> {
    let modes = api.select_filter(params.filter).await?;

    Ok(modes.into())
}

pub async fn select_mode(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<SelectionParams>,
) -> Result<Json<DeliveryModesView>, Error> {
    let modes = api.select_mode(params.mode).await?;

    Ok(modes.into())
}

pub async fn confirm(Extension(api): Extension<DynAPI>) -> Result<Json<SessionView>, Error> {
    let session = api.confirm_mode().await?;

    Ok(session.into())
}
