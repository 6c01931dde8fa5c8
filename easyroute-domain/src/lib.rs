pub mod events;
pub mod route;
pub mod trip;
pub mod user;
pub mod van;

pub use events::{BookingEvent, BookingEventKind};
pub use route::{Route, Waypoint};
pub use trip::{PassengerBooking, Trip, TripStatus};
pub use user::{User, UserRole};
pub use van::{GeoLocation, Van, VanStatus};
