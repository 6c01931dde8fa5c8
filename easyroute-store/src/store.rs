use chrono::Utc;
use easyroute_domain::{
    PassengerBooking, Route, Trip, TripStatus, User, UserRole, Van, VanStatus,
};
use serde::Serialize;

use crate::fixtures;

/// Single source of truth for the user, van, route and trip collections.
///
/// Collections are small seeded lists, so lookups are linear scans. All
/// mutations take `&mut self`; callers that share the store wrap it in a
/// lock and hold it for the whole check-then-mutate sequence.
pub struct DomainStore {
    users: Vec<User>,
    vans: Vec<Van>,
    routes: Vec<Route>,
    trips: Vec<Trip>,
}

/// Result of a successful booking.
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub trip_id: String,
    pub passenger: PassengerBooking,
    pub seats_remaining: u32,
}

/// Result of a cancellation. `seats_released` is zero when the user held
/// no booking on the trip.
#[derive(Debug, Clone, Serialize)]
pub struct CancellationConfirmation {
    pub trip_id: String,
    pub seats_released: u32,
    pub seats_remaining: u32,
}

impl DomainStore {
    pub fn new(users: Vec<User>, vans: Vec<Van>, routes: Vec<Route>, trips: Vec<Trip>) -> Self {
        Self {
            users,
            vans,
            routes,
            trips,
        }
    }

    /// Store loaded with the demo dataset.
    pub fn with_fixtures() -> Self {
        Self::new(
            fixtures::seed_users(),
            fixtures::seed_vans(),
            fixtures::seed_routes(),
            fixtures::seed_trips(),
        )
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn get_user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn get_van_by_id(&self, id: &str) -> Option<&Van> {
        self.vans.iter().find(|v| v.id == id)
    }

    pub fn get_route_by_id(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn get_trip_by_id(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn vans(&self) -> &[Van] {
        &self.vans
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn vans_filtered(&self, status: Option<VanStatus>) -> Vec<Van> {
        self.vans
            .iter()
            .filter(|v| status.map_or(true, |s| v.status == s))
            .cloned()
            .collect()
    }

    pub fn trips_filtered(&self, status: Option<TripStatus>) -> Vec<Trip> {
        self.trips
            .iter()
            .filter(|t| status.map_or(true, |s| t.status == s))
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Look up a user by exact email match. The demo dataset carries no
    /// credentials, so any password is accepted for a known email.
    pub fn authenticate(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        self.users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Create an account and add it to the user collection, so a later
    /// login with the same email succeeds. The id is derived from the
    /// creation timestamp.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        _password: &str,
        role: UserRole,
    ) -> Result<User, AuthError> {
        if self.users.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailAlreadyRegistered(email.to_string()));
        }

        let user = User {
            id: Utc::now().timestamp_millis().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            // Registration does not capture a phone number.
            phone: "+55 11 00000-0000".to_string(),
            avatar: None,
        };
        self.users.push(user.clone());

        tracing::info!("Registered user {} ({})", user.id, user.email);
        Ok(user)
    }

    // ------------------------------------------------------------------
    // Bookings
    // ------------------------------------------------------------------

    /// Book one seat on a trip for `user`, riding from `pickup_point` to
    /// `dropoff_point`. Both must name waypoints of the trip's route.
    pub fn book_trip(
        &mut self,
        user: &User,
        trip_id: &str,
        pickup_point: &str,
        dropoff_point: &str,
    ) -> Result<BookingConfirmation, BookingError> {
        let idx = self
            .trips
            .iter()
            .position(|t| t.id == trip_id)
            .ok_or_else(|| BookingError::TripNotFound(trip_id.to_string()))?;

        let route_id = {
            let trip = &self.trips[idx];
            if trip.status != TripStatus::Scheduled {
                return Err(BookingError::TripNotOpen {
                    trip_id: trip.id.clone(),
                    status: trip.status,
                });
            }
            if trip.available_seats == 0 {
                return Err(BookingError::NoSeatsAvailable(trip.id.clone()));
            }
            if trip.has_passenger(&user.id) {
                return Err(BookingError::DuplicateBooking {
                    user_id: user.id.clone(),
                    trip_id: trip.id.clone(),
                });
            }
            trip.route_id.clone()
        };
        self.validate_waypoints(&route_id, pickup_point, dropoff_point)?;

        let booking = PassengerBooking {
            id: user.id.clone(),
            name: user.name.clone(),
            pickup_point: pickup_point.to_string(),
            dropoff_point: dropoff_point.to_string(),
        };
        let trip = &mut self.trips[idx];
        trip.add_passenger(booking.clone());

        tracing::info!(
            "Seat booked on trip {} for user {} ({} seats left)",
            trip.id,
            user.id,
            trip.available_seats
        );

        Ok(BookingConfirmation {
            trip_id: trip.id.clone(),
            passenger: booking,
            seats_remaining: trip.available_seats,
        })
    }

    /// Remove every booking `user_id` holds on the trip, releasing one
    /// seat per entry removed. Holding no booking is not an error.
    pub fn cancel_booking(
        &mut self,
        user_id: &str,
        trip_id: &str,
    ) -> Result<CancellationConfirmation, BookingError> {
        let trip = self
            .trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or_else(|| BookingError::TripNotFound(trip_id.to_string()))?;

        let released = trip.remove_passenger(user_id);
        if released > 0 {
            tracing::info!(
                "Booking cancelled on trip {} for user {} ({} seats released)",
                trip.id,
                user_id,
                released
            );
        }

        Ok(CancellationConfirmation {
            trip_id: trip.id.clone(),
            seats_released: released,
            seats_remaining: trip.available_seats,
        })
    }

    fn validate_waypoints(
        &self,
        route_id: &str,
        pickup_point: &str,
        dropoff_point: &str,
    ) -> Result<(), BookingError> {
        if pickup_point == dropoff_point {
            return Err(BookingError::InvalidWaypointSelection(
                "pickup and dropoff points must differ".to_string(),
            ));
        }

        let route = self.get_route_by_id(route_id).ok_or_else(|| {
            BookingError::InvalidWaypointSelection(format!(
                "route {} is not in the catalog",
                route_id
            ))
        })?;

        for point in [pickup_point, dropoff_point] {
            if !route.has_waypoint(point) {
                return Err(BookingError::InvalidWaypointSelection(format!(
                    "{} is not a stop on route {}",
                    point, route.name
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email already registered: {0}")]
    EmailAlreadyRegistered(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("trip not found: {0}")]
    TripNotFound(String),

    #[error("trip {trip_id} is {status}, bookings are closed")]
    TripNotOpen { trip_id: String, status: TripStatus },

    #[error("no seats available on trip {0}")]
    NoSeatsAvailable(String),

    #[error("user {user_id} already holds a seat on trip {trip_id}")]
    DuplicateBooking { user_id: String, trip_id: String },

    #[error("invalid waypoint selection: {0}")]
    InvalidWaypointSelection(String),
}
