use serde::{Deserialize, Serialize};

/// Operational state of a fleet vehicle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum VanStatus {
    Available,
    InUse,
    Maintenance,
}

/// A point position with a human-readable address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// A fleet vehicle. Vans are seeded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Van {
    pub id: String,
    pub model: String,
    pub plate: String,
    pub capacity: u32,
    pub driver_id: String,
    pub driver_name: String,
    pub status: VanStatus,
    pub current_location: Option<GeoLocation>,
    pub features: Vec<String>,
}
