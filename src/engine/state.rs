use serde::Serialize;

use crate::entities::PendingOrder;
use crate::external::Destination;

pub const ACTIVE_RIDE_NOTICE: &str = "You already have an active ride.";
pub const SUBMISSION_FAILED_NOTICE: &str = "Failed to confirm order. Please try again.";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum State {
    Idle,
    Submitting,
    Confirmed {
        order_id: String,
    },
    Failed {
        message: String,
        /// Kept so a retry resubmits exactly what the user confirmed.
        #[serde(skip_serializing)]
        order: Box<PendingOrder>,
    },
}

impl State {
    pub fn name(&self) -> String {
        match self {
            Self::Idle => "idle".into(),
            Self::Submitting => "submitting".into(),
            Self::Confirmed { order_id: _ } => "confirmed".into(),
            Self::Failed {
                message: _,
                order: _,
            } => "failed".into(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Result of one `confirm` or `retry` call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A submission was already in flight.
    Ignored,
    Rejected {
        message: String,
    },
    Confirmed {
        order_id: String,
        total: f64,
        destination: Option<Destination>,
    },
    Failed {
        message: String,
    },
}
