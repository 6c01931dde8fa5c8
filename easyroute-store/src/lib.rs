pub mod app_config;
pub mod fixtures;
pub mod session;
pub mod store;

pub use session::{Session, SessionError};
pub use store::{
    AuthError, BookingConfirmation, BookingError, CancellationConfirmation, DomainStore,
};
