use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_USER_ID: &str = "user123";
pub const PLACEHOLDER_USER_NAME: &str = "Unknown User";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
}

impl Profile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Identity used when no profile is available.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_USER_ID, PLACEHOLDER_USER_NAME)
    }
}
