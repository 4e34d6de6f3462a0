use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{SessionAPI, SessionView},
    entities::FoodItem,
    error::Error,
    session::OrderSession,
};

#[async_trait]
impl SessionAPI for Engine {
    async fn find_session(&self) -> Result<SessionView, Error> {
        let session = self.session.lock().await;

        Ok(session_view(&session))
    }

    #[tracing::instrument(skip(self))]
    async fn add_item(&self, item: FoodItem) -> Result<SessionView, Error> {
        let mut session = self.session.lock().await;
        session.add_item(item);

        Ok(session_view(&session))
    }

    #[tracing::instrument(skip(self))]
    async fn update_addresses(
        &self,
        pickup: Option<String>,
        delivery: Option<String>,
    ) -> Result<SessionView, Error> {
        let mut session = self.session.lock().await;

        if let Some(pickup) = pickup {
            session.set_pickup_location(pickup);
        }

        if let Some(delivery) = delivery {
            session.set_delivery_location(delivery);
        }

        Ok(session_view(&session))
    }

    #[tracing::instrument(skip(self))]
    async fn add_stop(&self, stop: String) -> Result<SessionView, Error> {
        let mut session = self.session.lock().await;
        session.add_stop(&stop)?;

        Ok(session_view(&session))
    }

    #[tracing::instrument(skip(self))]
    async fn remove_stop(&self, stop: String) -> Result<SessionView, Error> {
        let mut session = self.session.lock().await;
        session.remove_stop(&stop)?;

        Ok(session_view(&session))
    }
}

pub(super) fn session_view(session: &OrderSession) -> SessionView {
    SessionView {
        items: session.items().to_vec(),
        item_count: session.items().len(),
        subtotal: session.subtotal(),
        delivery_type: session.delivery_type(),
        delivery_fee: session.delivery_fee(),
        total: session.total(),
        delivery_location: session.delivery_location().into(),
        stops: session.stops().to_vec(),
        address_display: session.address_display(),
    }
}
