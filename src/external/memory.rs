use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;
#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use tokio::sync::Notify;
use uuid::Uuid;

use super::{Destination, LocalStore, Navigator, ProfileProvider, RideContext, RideStore};
use crate::entities::{PendingOrder, Profile};
use crate::error::{submission_error, Error};

/// How a `MemoryRideStore` answers `create_ride`.
#[derive(Clone, Debug)]
pub enum StoreBehaviour {
    Accept,
    Reject,
    /// Never answers.
    #[cfg(test)]
    Hang,
    /// Waits for the notify, then accepts.
    #[cfg(test)]
    Gate(Arc<Notify>),
}

/// In-process ride store, used when no database is configured.
pub struct MemoryRideStore {
    behaviour: Mutex<StoreBehaviour>,
    orders: Mutex<Vec<(String, PendingOrder)>>,
    calls: AtomicUsize,
}

impl Default for MemoryRideStore {
    fn default() -> Self {
        Self::with_behaviour(StoreBehaviour::Accept)
    }
}

impl MemoryRideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behaviour(behaviour: StoreBehaviour) -> Self {
        Self {
            behaviour: Mutex::new(behaviour),
            orders: Mutex::new(vec![]),
            calls: AtomicUsize::new(0),
        }
    }

    pub async fn set_behaviour(&self, behaviour: StoreBehaviour) {
        *self.behaviour.lock().await = behaviour;
    }

    /// Number of `create_ride` invocations, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn orders(&self) -> Vec<(String, PendingOrder)> {
        self.orders.lock().await.clone()
    }
}

#[async_trait]
impl RideStore for MemoryRideStore {
    #[tracing::instrument(skip(self, order), fields(kind = order.kind()))]
    async fn create_ride(&self, order: &PendingOrder) -> Result<String, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let behaviour = self.behaviour.lock().await.clone();

        match behaviour {
            StoreBehaviour::Accept => {}
            StoreBehaviour::Reject => return Err(submission_error()),
            #[cfg(test)]
            StoreBehaviour::Hang => futures::future::pending::<()>().await,
            #[cfg(test)]
            StoreBehaviour::Gate(gate) => gate.notified().await,
        }

        let id = Uuid::new_v4().to_string();
        self.orders.lock().await.push((id.clone(), order.clone()));

        Ok(id)
    }
}

#[derive(Default)]
pub struct MemoryLocalStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.values.lock().await.get(key).cloned()
    }
}

#[async_trait]
impl LocalStore for MemoryLocalStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.values.lock().await.insert(key.into(), value.into());
        Ok(())
    }
}

/// Whether the current user has a ride in progress. Raised by the workflow
/// when a ride is confirmed and cleared when it completes or is cancelled.
#[derive(Default)]
pub struct ActiveRideFlag(AtomicBool);

impl ActiveRideFlag {
    pub fn new(active: bool) -> Self {
        Self(AtomicBool::new(active))
    }

    pub fn activate(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl RideContext for ActiveRideFlag {
    fn is_ride_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn ride_confirmed(&self) {
        self.activate();
    }
}

#[derive(Clone, Debug, Default)]
pub struct StaticProfile(pub Option<Profile>);

impl ProfileProvider for StaticProfile {
    fn profile(&self) -> Option<Profile> {
        self.0.clone()
    }
}

/// Remembers the latest destination and how many times it was asked to
/// navigate.
#[derive(Default)]
pub struct RecordingNavigator {
    last: std::sync::Mutex<Option<Destination>>,
    visits: AtomicUsize,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Destination> {
        self.last
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn visits(&self) -> usize {
        self.visits.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: Destination) {
        tracing::info!("navigating to {}", destination.path());

        self.visits.fetch_add(1, Ordering::SeqCst);
        *self
            .last
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(destination);
    }
}
