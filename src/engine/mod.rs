mod delivery_api;
mod order_api;
mod quote_api;
mod session_api;
mod state;
mod workflow;

pub use state::{Outcome, State, ACTIVE_RIDE_NOTICE, SUBMISSION_FAILED_NOTICE};
pub use workflow::{Callbacks, ConfirmationWorkflow, WorkflowConfig, DEFAULT_SUBMISSION_TIMEOUT};

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    api::API,
    delivery::DeliveryModeSelector,
    external::{
        ActiveRideFlag, Collaborators, DynLocalStore, DynNavigator, DynProfileProvider,
        DynRideStore,
    },
    session::OrderSession,
};

/// One user's ordering session: delivery selection, cart and confirmation.
pub struct Engine {
    workflow: ConfirmationWorkflow,
    selector: Mutex<DeliveryModeSelector>,
    session: Mutex<OrderSession>,
    active_ride: Arc<ActiveRideFlag>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(
        rides: DynRideStore,
        local: DynLocalStore,
        profile: DynProfileProvider,
        active_ride: Arc<ActiveRideFlag>,
        navigator: DynNavigator,
        config: WorkflowConfig,
    ) -> Self {
        let collaborators = Collaborators {
            rides,
            local,
            profile,
            context: active_ride.clone(),
            navigator,
        };

        Self {
            workflow: ConfirmationWorkflow::new(collaborators, config),
            selector: Mutex::new(DeliveryModeSelector::new()),
            session: Mutex::new(OrderSession::new()),
            active_ride,
        }
    }
}

impl API for Engine {}
