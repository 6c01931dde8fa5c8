use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a user acts in within the shuttle network.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Passenger,
    Driver,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Passenger => write!(f, "passenger"),
            UserRole::Driver => write!(f, "driver"),
        }
    }
}

/// An account known to the service. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub phone: String,
    pub avatar: Option<String>,
}
