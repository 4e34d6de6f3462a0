use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{QuoteAPI, QuoteView},
    entities::{RouteRequest, VehicleClass},
    error::Error,
    pricing::{price_for_class, quote_route},
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_quote(
        &self,
        route: RouteRequest,
        car_type: Option<VehicleClass>,
    ) -> Result<QuoteView, Error> {
        // re-normalize, the route may come straight off the wire
        let route =
            RouteRequest::new(route.pickup, route.destination, route.stops).with_default_endpoints();
        let quote = quote_route(&route);

        Ok(QuoteView {
            total_distance: quote.total_distance,
            total_price: quote.total_price,
            car_type,
            final_price: car_type.map(|class| price_for_class(quote.total_price, class)),
        })
    }
}
