use serde::{Deserialize, Serialize};

/// A named stop along a route, usable as a pickup or dropoff point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

/// A named path between an origin and a destination, with an ordered list
/// of waypoints. Routes are seeded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub destination: String,
    /// Length in kilometres.
    pub distance: f64,
    /// Scheduled travel time in minutes.
    pub duration: u32,
    pub waypoints: Vec<Waypoint>,
    pub price: f64,
    pub active: bool,
}

impl Route {
    /// Whether `name` matches one of this route's waypoints.
    pub fn has_waypoint(&self, name: &str) -> bool {
        self.waypoints.iter().any(|w| w.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_route() -> Route {
        Route {
            id: "r9".to_string(),
            name: "Test Loop".to_string(),
            origin: "A".to_string(),
            destination: "C".to_string(),
            distance: 5.0,
            duration: 15,
            waypoints: vec![
                Waypoint { lat: 0.0, lng: 0.0, name: "A".to_string() },
                Waypoint { lat: 0.5, lng: 0.5, name: "B".to_string() },
                Waypoint { lat: 1.0, lng: 1.0, name: "C".to_string() },
            ],
            price: 10.0,
            active: true,
        }
    }

    #[test]
    fn test_has_waypoint() {
        let route = sample_route();
        assert!(route.has_waypoint("B"));
        assert!(!route.has_waypoint("D"));
    }
}
