mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get, patch, post},
    Router,
};

use crate::api::API;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{delivery_modes, orders, quotes, session};

pub use crate::api::DynAPI;

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/quotes", post(quotes::create))
        .route("/delivery_modes", get(delivery_modes::find))
        .route("/delivery_modes/filter", patch(delivery_modes::select_filter))
        .route("/delivery_modes/selection", patch(delivery_modes::select_mode))
        .route("/delivery_modes/confirm", post(delivery_modes::confirm))
        .route("/session", get(session::find))
        .route("/session/items", post(session::add_item))
        .route("/session/addresses", patch(session::update_addresses))
        .route("/session/stops", post(session::add_stop))
        .route("/session/stops/:name", delete(session::remove_stop))
        .route("/session/confirm", post(orders::confirm_session))
        .route("/orders/confirm", post(orders::confirm))
        .route("/orders/retry", post(orders::retry))
        .route("/orders/state", get(orders::find_state))
        .route("/rides/active/clear", patch(orders::clear_active_ride))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            unexpected_error()
        })
}
