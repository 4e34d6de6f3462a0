use super::session_api::session_view;
use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{DeliveryAPI, DeliveryModesView, SessionView},
    delivery::DeliveryModeSelector,
    entities::{FilterTab, VehicleClass},
    error::Error,
};

#[async_trait]
impl DeliveryAPI for Engine {
    async fn find_delivery_modes(&self) -> Result<DeliveryModesView, Error> {
        let selector = self.selector.lock().await;

        Ok(modes_view(&selector))
    }

    #[tracing::instrument(skip(self))]
    async fn select_filter(&self, tab: FilterTab) -> Result<DeliveryModesView, Error> {
        let mut selector = self.selector.lock().await;
        selector.select_filter(tab);

        Ok(modes_view(&selector))
    }

    #[tracing::instrument(skip(self))]
    async fn select_mode(&self, id: VehicleClass) -> Result<DeliveryModesView, Error> {
        let mut selector = self.selector.lock().await;
        selector.select_mode(id)?;

        Ok(modes_view(&selector))
    }

    #[tracing::instrument(skip(self))]
    async fn confirm_mode(&self) -> Result<SessionView, Error> {
        let selector = self.selector.lock().await;
        let mut session = self.session.lock().await;

        selector.confirm_mode(&mut session);

        Ok(session_view(&session))
    }
}

fn modes_view(selector: &DeliveryModeSelector) -> DeliveryModesView {
    DeliveryModesView {
        filter: selector.filter(),
        selected: selector.selected(),
        modes: selector.modes(),
    }
}
