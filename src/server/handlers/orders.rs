use axum::extract::{Extension, Json};

use crate::engine::{Outcome, State};
use crate::entities::OrderRequest;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn confirm(
    Extension(api): Extension<DynAPI>,
    Json(request): Json<OrderRequest>,
) -> Result<Json<Outcome>, Error> {
    let outcome = api.confirm_order(request).await?;

    Ok(outcome.into())
}

pub async fn confirm_session(Extension(api): Extension<DynAPI>) -> Result<Json<Outcome>, Error> {
    let outcome = api.confirm_session().await?;

    Ok(outcome.into())
}

pub async fn retry(Extension(api): Extension<DynAPI>) -> Result<Json<Outcome>, Error> {
    let outcome = api.retry_order().await?;

    Ok(outcome.into())
}

pub async fn find_state(Extension(api): Extension<DynAPI>) -> Result<Json<State>, Error> {
    let state = api.find_order_state().await?;

    Ok(state.into())
}

pub async fn clear_active_ride(Extension(api): Extension<DynAPI>) -> Result<Json<()>, Error> {
    api.clear_active_ride().await?;

    Ok(().into())
}
