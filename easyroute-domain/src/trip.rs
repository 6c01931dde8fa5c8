use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a scheduled trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TripStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripStatus::Scheduled => write!(f, "scheduled"),
            TripStatus::InProgress => write!(f, "in-progress"),
            TripStatus::Completed => write!(f, "completed"),
            TripStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A seat claimed by a passenger, with the stops they chose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PassengerBooking {
    /// Id of the user holding the seat.
    pub id: String,
    pub name: String,
    pub pickup_point: String,
    pub dropoff_point: String,
}

/// A scheduled run of a route by a specific van, with its own passenger
/// roster and seat count. Only `passengers` and `available_seats` mutate,
/// and only through [`Trip::add_passenger`] and [`Trip::remove_passenger`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub route_id: String,
    pub van_id: String,
    pub driver_id: String,
    pub status: TripStatus,
    pub scheduled_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_time: Option<NaiveTime>,
    /// Seats offered on this departure, fixed at creation.
    pub seat_capacity: u32,
    pub available_seats: u32,
    pub passengers: Vec<PassengerBooking>,
    pub price: f64,
}

impl Trip {
    /// Whether the trip currently accepts new bookings.
    pub fn is_bookable(&self) -> bool {
        self.status == TripStatus::Scheduled && self.available_seats > 0
    }

    pub fn has_passenger(&self, user_id: &str) -> bool {
        self.passengers.iter().any(|p| p.id == user_id)
    }

    /// Append a passenger and take one seat. Callers must have checked
    /// status, availability and roster membership first.
    pub fn add_passenger(&mut self, booking: PassengerBooking) {
        self.passengers.push(booking);
        self.available_seats -= 1;
    }

    /// Drop every booking held by `user_id`, releasing one seat per entry
    /// removed. Returns the number of seats released.
    pub fn remove_passenger(&mut self, user_id: &str) -> u32 {
        let before = self.passengers.len();
        self.passengers.retain(|p| p.id != user_id);
        let released = (before - self.passengers.len()) as u32;
        self.available_seats += released;
        released
    }

    /// `available_seats + passengers == seat_capacity` must hold after any
    /// sequence of bookings and cancellations.
    pub fn seat_invariant_holds(&self) -> bool {
        self.available_seats + self.passengers.len() as u32 == self.seat_capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trip() -> Trip {
        Trip {
            id: "t9".to_string(),
            route_id: "r9".to_string(),
            van_id: "v9".to_string(),
            driver_id: "2".to_string(),
            status: TripStatus::Scheduled,
            scheduled_date: NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
            departure_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            arrival_time: None,
            seat_capacity: 2,
            available_seats: 2,
            passengers: Vec::new(),
            price: 12.0,
        }
    }

    fn booking_for(user_id: &str) -> PassengerBooking {
        PassengerBooking {
            id: user_id.to_string(),
            name: format!("User {}", user_id),
            pickup_point: "A".to_string(),
            dropoff_point: "B".to_string(),
        }
    }

    #[test]
    fn test_seat_accounting() {
        let mut trip = sample_trip();
        assert!(trip.is_bookable());

        trip.add_passenger(booking_for("10"));
        assert_eq!(trip.available_seats, 1);
        assert!(trip.has_passenger("10"));
        assert!(trip.seat_invariant_holds());

        trip.add_passenger(booking_for("11"));
        assert_eq!(trip.available_seats, 0);
        assert!(!trip.is_bookable());
        assert!(trip.seat_invariant_holds());

        let released = trip.remove_passenger("10");
        assert_eq!(released, 1);
        assert_eq!(trip.available_seats, 1);
        assert!(!trip.has_passenger("10"));
        assert!(trip.seat_invariant_holds());
    }

    #[test]
    fn test_remove_absent_passenger_is_noop() {
        let mut trip = sample_trip();
        trip.add_passenger(booking_for("10"));

        assert_eq!(trip.remove_passenger("99"), 0);
        assert_eq!(trip.available_seats, 1);
        assert_eq!(trip.passengers.len(), 1);
        assert!(trip.seat_invariant_holds());
    }

    #[test]
    fn test_only_scheduled_trips_are_bookable() {
        let mut trip = sample_trip();
        trip.status = TripStatus::InProgress;
        assert!(!trip.is_bookable());
        trip.status = TripStatus::Completed;
        assert!(!trip.is_bookable());
        trip.status = TripStatus::Cancelled;
        assert!(!trip.is_bookable());
    }
}
