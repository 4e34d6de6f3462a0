use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};

use crate::api::SessionView;
use crate::entities::FoodItem;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct AddressParams {
    pickup: Option<String>,
    delivery: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct StopParams {
    name: String,
}

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<SessionView>, Error> {
    let session = api.find_session().await?;

    Ok(session.into())
}

pub async fn add_item(
    Extension(api): Extension<DynAPI>,
    Json(item): Json<FoodItem>,
) -> Result<Json<SessionView>, Error> {
    let session = api.add_item(item).await?;

    Ok(session.into())
}

pub async fn update_addresses(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<AddressParams>,
) -> Result<Json<SessionView>, Error> {
    let session = api.update_addresses(params.pickup, params.delivery).await?;

    Ok(session.into())
}

pub async fn add_stop(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<StopParams>,
) -> Result<Json<SessionView>, Error> {
    let session = api.add_stop(params.name).await?;

    Ok(session.into())
}

pub async fn remove_stop(
    Extension(api): Extension<DynAPI>,
    Path(name): Path<String>,
) -> Result<Json<SessionView>, Error> {
    let session = api.remove_stop(name).await?;

    Ok(session.into())
}
