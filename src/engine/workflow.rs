use std::time::Duration;
use tokio::sync::Mutex;

use super::state::{Outcome, State, ACTIVE_RIDE_NOTICE, SUBMISSION_FAILED_NOTICE};
use crate::entities::{
    FoodOrder, FoodRequest, OrderRequest, PendingOrder, Profile, RideOrder, RideRequest, Status,
};
use crate::error::{timeout_error, Error};
use crate::external::{Collaborators, Destination, CURRENT_FOOD_ORDER_ID};
use crate::pricing::{clamp_amount, price_for_class, quote_route};

pub const DEFAULT_SUBMISSION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct WorkflowConfig {
    /// Upper bound on one `create_ride` call.
    pub submission_timeout: Duration,
    /// Apply the active-ride guard to food orders as well.
    pub guard_food_orders: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            submission_timeout: DEFAULT_SUBMISSION_TIMEOUT,
            guard_food_orders: false,
        }
    }
}

/// Continuations supplied by a parent flow. When `on_ride_confirmed` is set
/// the workflow does not navigate after a ride is confirmed.
#[derive(Default)]
pub struct Callbacks {
    pub on_ride_created: Option<Box<dyn Fn(&str) + Send + Sync>>,
    pub on_ride_confirmed: Option<Box<dyn Fn() + Send + Sync>>,
    pub on_back: Option<Box<dyn Fn() + Send + Sync>>,
}

pub struct ConfirmationWorkflow {
    collaborators: Collaborators,
    callbacks: Callbacks,
    config: WorkflowConfig,
    state: Mutex<State>,
}

impl ConfirmationWorkflow {
    pub fn new(collaborators: Collaborators, config: WorkflowConfig) -> Self {
        Self {
            collaborators,
            callbacks: Callbacks::default(),
            config,
            state: Mutex::new(State::Idle),
        }
    }

    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub async fn state(&self) -> State {
        self.state.lock().await.clone()
    }

    #[tracing::instrument(skip(self, request), fields(ride = request.is_ride()))]
    pub async fn confirm(&self, request: OrderRequest) -> Outcome {
        if let Err(outcome) = self.begin(request.is_ride()).await {
            return outcome;
        }

        let order = self.build_order(request);

        self.submit(order).await
    }

    /// Resubmits the order kept from the last failed submission.
    #[tracing::instrument(skip(self))]
    pub async fn retry(&self) -> Outcome {
        let order = {
            let mut state = self.state.lock().await;

            let order = match &*state {
                State::Failed { message: _, order } => order.as_ref().clone(),
                _ => {
                    tracing::info!("nothing to retry");
                    return Outcome::Ignored;
                }
            };

            if let Err(outcome) = self.admit(&mut state, order.is_ride()) {
                return outcome;
            }

            order
        };

        self.submit(order).await
    }

    /// Returns a failed workflow to `Idle`, discarding the kept order.
    pub async fn acknowledge_failure(&self) {
        let mut state = self.state.lock().await;

        if let State::Failed {
            message: _,
            order: _,
        } = &*state
        {
            *state = State::Idle;
        }
    }

    pub fn back(&self) {
        match &self.callbacks.on_back {
            Some(on_back) => on_back(),
            None => self.collaborators.navigator.navigate(Destination::Back),
        }
    }

    async fn begin(&self, is_ride: bool) -> Result<(), Outcome> {
        let mut state = self.state.lock().await;

        self.admit(&mut state, is_ride)
    }

    // Check-and-set; callers hold the state lock and release it before the
    // submission is awaited.
    fn admit(&self, state: &mut State, is_ride: bool) -> Result<(), Outcome> {
        if state.is_submitting() {
            tracing::info!("submission already in flight, ignoring");
            return Err(Outcome::Ignored);
        }

        let guarded = is_ride || self.config.guard_food_orders;

        if guarded && self.collaborators.context.is_ride_active() {
            tracing::warn!("refusing confirmation while a ride is active");
            return Err(Outcome::Rejected {
                message: ACTIVE_RIDE_NOTICE.into(),
            });
        }

        *state = State::Submitting;

        Ok(())
    }

    async fn submit(&self, order: PendingOrder) -> Outcome {
        tracing::info!("submitting {} order, total {}", order.kind(), order.total());

        let create = self.collaborators.rides.create_ride(&order);
        let result: Result<String, Error> =
            match tokio::time::timeout(self.config.submission_timeout, create).await {
                Ok(result) => result,
                Err(_) => Err(timeout_error()),
            };

        match result {
            Ok(order_id) => self.complete(order, order_id).await,
            Err(err) => {
                tracing::warn!("submission failed: {}", err);

                *self.state.lock().await = State::Failed {
                    message: SUBMISSION_FAILED_NOTICE.into(),
                    order: Box::new(order),
                };

                Outcome::Failed {
                    message: SUBMISSION_FAILED_NOTICE.into(),
                }
            }
        }
    }

    async fn complete(&self, order: PendingOrder, order_id: String) -> Outcome {
        tracing::info!("{} order confirmed as {}", order.kind(), order_id);

        {
            let mut state = self.state.lock().await;
            *state = State::Confirmed {
                order_id: order_id.clone(),
            };

            if order.is_ride() {
                self.collaborators.context.ride_confirmed();
            }
        }

        let destination = match &order {
            PendingOrder::Food(_) => {
                // the order is already stored; a failed write only loses resumption
                if let Err(err) = self
                    .collaborators
                    .local
                    .set(CURRENT_FOOD_ORDER_ID, &order_id)
                    .await
                {
                    tracing::warn!("could not persist {}: {}", CURRENT_FOOD_ORDER_ID, err);
                }

                let destination = Destination::FoodTracking {
                    order_id: order_id.clone(),
                };
                self.collaborators.navigator.navigate(destination.clone());

                Some(destination)
            }
            PendingOrder::Ride(_) => {
                if let Some(on_ride_created) = &self.callbacks.on_ride_created {
                    on_ride_created(&order_id);
                }

                match &self.callbacks.on_ride_confirmed {
                    Some(on_ride_confirmed) => {
                        on_ride_confirmed();
                        None
                    }
                    None => {
                        self.collaborators
                            .navigator
                            .navigate(Destination::RideTracking);
                        Some(Destination::RideTracking)
                    }
                }
            }
        };

        Outcome::Confirmed {
            order_id,
            total: order.total(),
            destination,
        }
    }

    fn build_order(&self, request: OrderRequest) -> PendingOrder {
        let profile = self.resolve_profile();

        match request {
            OrderRequest::Ride(ride) => PendingOrder::Ride(ride_order(ride, profile)),
            OrderRequest::Food(food) => PendingOrder::Food(food_order(food, profile)),
        }
    }

    fn resolve_profile(&self) -> Profile {
        let placeholder = Profile::placeholder();

        match self.collaborators.profile.profile() {
            Some(profile) => Profile {
                id: non_empty(profile.id).unwrap_or(placeholder.id),
                name: non_empty(profile.name).unwrap_or(placeholder.name),
            },
            None => placeholder,
        }
    }
}

fn ride_order(ride: RideRequest, profile: Profile) -> RideOrder {
    let route = ride.route();
    let quote = quote_route(&route);
    let price = price_for_class(quote.total_price, ride.car_type);

    RideOrder::new(route, ride.car_type, quote.total_distance, price, profile)
}

fn food_order(food: FoodRequest, profile: Profile) -> FoodOrder {
    let pickup_location = food.pickup_location();
    let dropoff_location = food.dropoff_location();

    let items: Vec<_> = food
        .items
        .into_iter()
        .map(|mut item| {
            item.price = clamp_amount(item.price);
            item
        })
        .collect();

    let subtotal: f64 = items.iter().map(|item| item.price).sum();
    let delivery_fee = clamp_amount(food.delivery_fee);

    FoodOrder {
        delivery_type: food.delivery_type,
        items,
        subtotal,
        delivery_fee,
        total: subtotal + delivery_fee,
        pickup_location,
        dropoff_location,
        status: Status::Pending,
        user_id: profile.id,
        user_name: profile.name,
        created_at: chrono::Utc::now(),
    }
}

fn non_empty(value: String) -> Option<String> {
    match value.trim() {
        "" => None,
        _ => Some(value),
    }
}
