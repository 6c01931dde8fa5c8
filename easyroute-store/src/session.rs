use std::sync::Arc;
use std::time::Duration;

use easyroute_domain::{Route, Trip, User, UserRole, Van};
use tokio::sync::RwLock;

use crate::store::{
    AuthError, BookingConfirmation, BookingError, CancellationConfirmation, DomainStore,
};

/// Delay applied to mutating operations, so the demo behaves like a remote
/// service even when everything lives in one process.
const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no user is logged in")]
    Unauthenticated,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

/// A single user's view of the shared store: the current identity plus the
/// operations the identity is allowed to perform. Each session owns its
/// `current_user`; the collections behind the lock are shared.
pub struct Session {
    store: Arc<RwLock<DomainStore>>,
    current_user: Option<User>,
    latency: Duration,
}

impl Session {
    pub fn new(store: Arc<RwLock<DomainStore>>) -> Self {
        Self {
            store,
            current_user: None,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated latency. Tests pass `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), SessionError> {
        tokio::time::sleep(self.latency).await;
        let user = self.store.read().await.authenticate(email, password)?;
        self.current_user = Some(user);
        Ok(())
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<(), SessionError> {
        tokio::time::sleep(self.latency).await;
        let user = self
            .store
            .write()
            .await
            .register(name, email, password, role)?;
        self.current_user = Some(user);
        Ok(())
    }

    /// Clear the current identity. Idempotent.
    pub fn logout(&mut self) {
        self.current_user = None;
    }

    pub async fn book_trip(
        &self,
        trip_id: &str,
        pickup_point: &str,
        dropoff_point: &str,
    ) -> Result<BookingConfirmation, SessionError> {
        let user = self
            .current_user
            .clone()
            .ok_or(SessionError::Unauthenticated)?;
        tokio::time::sleep(self.latency).await;

        let confirmation =
            self.store
                .write()
                .await
                .book_trip(&user, trip_id, pickup_point, dropoff_point)?;
        Ok(confirmation)
    }

    pub async fn cancel_booking(
        &self,
        trip_id: &str,
    ) -> Result<CancellationConfirmation, SessionError> {
        let user = self
            .current_user
            .as_ref()
            .ok_or(SessionError::Unauthenticated)?;
        tokio::time::sleep(self.latency).await;

        let confirmation = self.store.write().await.cancel_booking(&user.id, trip_id)?;
        Ok(confirmation)
    }

    // ------------------------------------------------------------------
    // Read snapshots
    // ------------------------------------------------------------------

    pub async fn vans(&self) -> Vec<Van> {
        self.store.read().await.vans().to_vec()
    }

    pub async fn routes(&self) -> Vec<Route> {
        self.store.read().await.routes().to_vec()
    }

    pub async fn trips(&self) -> Vec<Trip> {
        self.store.read().await.trips().to_vec()
    }

    pub async fn get_van_by_id(&self, id: &str) -> Option<Van> {
        self.store.read().await.get_van_by_id(id).cloned()
    }

    pub async fn get_route_by_id(&self, id: &str) -> Option<Route> {
        self.store.read().await.get_route_by_id(id).cloned()
    }

    pub async fn get_trip_by_id(&self, id: &str) -> Option<Trip> {
        self.store.read().await.get_trip_by_id(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let store = Arc::new(RwLock::new(DomainStore::with_fixtures()));
        Session::new(store).with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_login_sets_current_user() {
        let mut session = session();
        assert!(!session.is_authenticated());

        session.login("joao@example.com", "anything").await.unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.current_user().unwrap().name, "João Silva");
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_untouched() {
        let mut session = session();

        let err = session.login("nobody@x.com", "anything").await.unwrap_err();
        assert!(matches!(err, SessionError::Auth(AuthError::InvalidCredentials)));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let mut session = session();
        session.login("joao@example.com", "pw").await.unwrap();

        session.logout();
        assert!(!session.is_authenticated());
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_booking_requires_login() {
        let session = session();

        let err = session
            .book_trip("t1", "Praça da Sé", "Av. Paulista")
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::Unauthenticated));

        let err = session.cancel_booking("t1").await.unwrap_err();
        assert!(matches!(err, SessionError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_register_book_cancel_flow() {
        let mut session = session();
        session
            .register("Carla Dias", "carla@example.com", "pw", UserRole::Passenger)
            .await
            .unwrap();

        let confirmation = session
            .book_trip("t1", "Av. Paulista", "Shopping Morumbi")
            .await
            .unwrap();
        assert_eq!(confirmation.seats_remaining, 14);

        let trip = session.get_trip_by_id("t1").await.unwrap();
        let user_id = session.current_user().unwrap().id.clone();
        assert!(trip.has_passenger(&user_id));

        let cancellation = session.cancel_booking("t1").await.unwrap();
        assert_eq!(cancellation.seats_released, 1);
        assert_eq!(cancellation.seats_remaining, 15);
    }

    #[tokio::test]
    async fn test_sessions_share_the_store() {
        let store = Arc::new(RwLock::new(DomainStore::with_fixtures()));
        let mut first = Session::new(store.clone()).with_latency(Duration::ZERO);
        let second = Session::new(store).with_latency(Duration::ZERO);

        first
            .register("Carla Dias", "carla@example.com", "pw", UserRole::Passenger)
            .await
            .unwrap();
        first
            .book_trip("t1", "Praça da Sé", "Av. Paulista")
            .await
            .unwrap();

        let trip = second.get_trip_by_id("t1").await.unwrap();
        assert_eq!(trip.available_seats, 14);
    }
}
