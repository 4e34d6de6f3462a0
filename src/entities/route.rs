use serde::{Deserialize, Serialize};

/// A ride between two named places, visiting `stops` in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub pickup: String,
    pub destination: String,
    pub stops: Vec<String>,
}

impl RouteRequest {
    /// Builds a route, dropping blank stops and any stop naming the pickup or
    /// the destination.
    pub fn new(
        pickup: impl Into<String>,
        destination: impl Into<String>,
        stops: Vec<String>,
    ) -> Self {
        let pickup = pickup.into().trim().to_string();
        let destination = destination.into().trim().to_string();

        let stops = stops
            .into_iter()
            .map(|stop| stop.trim().to_string())
            .filter(|stop| !stop.is_empty() && *stop != pickup && *stop != destination)
            .collect();

        Self {
            pickup,
            destination,
            stops,
        }
    }
}
