use super::{Engine, Outcome, State};

use async_trait::async_trait;

use crate::{
    api::OrderAPI,
    entities::{DeliveryMode, OrderRequest},
    error::{invalid_input_error, Error},
};

#[async_trait]
impl OrderAPI for Engine {
    #[tracing::instrument(skip(self, request))]
    async fn confirm_order(&self, request: OrderRequest) -> Result<Outcome, Error> {
        if let OrderRequest::Food(food) = &request {
            if DeliveryMode::find(food.delivery_type).is_none() {
                tracing::warn!("{} is not a delivery mode", food.delivery_type.name());
                return Err(invalid_input_error());
            }
        }

        Ok(self.workflow.confirm(request).await)
    }

    #[tracing::instrument(skip(self))]
    async fn confirm_session(&self) -> Result<Outcome, Error> {
        let request = {
            let session = self.session.lock().await;

            if session.is_empty() {
                tracing::warn!("cart is empty, nothing to confirm");
                return Err(invalid_input_error());
            }

            OrderRequest::Food(session.food_request())
        };

        Ok(self.workflow.confirm(request).await)
    }

    #[tracing::instrument(skip(self))]
    async fn retry_order(&self) -> Result<Outcome, Error> {
        Ok(self.workflow.retry().await)
    }

    async fn find_order_state(&self) -> Result<State, Error> {
        Ok(self.workflow.state().await)
    }

    #[tracing::instrument(skip(self))]
    async fn clear_active_ride(&self) -> Result<(), Error> {
        self.active_ride.clear();

        Ok(())
    }
}
