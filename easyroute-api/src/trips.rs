use std::convert::Infallible;

use axum::{
    extract::{Path, Query, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use easyroute_domain::{BookingEvent, BookingEventKind, Trip, TripStatus};
use easyroute_store::{BookingConfirmation, CancellationConfirmation};
use futures_util::{Stream, StreamExt};
use serde::Deserialize;
use tokio_stream::wrappers::BroadcastStream;

use crate::error::AppError;
use crate::middleware::auth::{session_auth_middleware, SessionClaims};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct TripListQuery {
    status: Option<TripStatus>,
}

#[derive(Debug, Deserialize)]
struct BookTripRequest {
    pickup_point: String,
    dropoff_point: String,
}

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/v1/trips/{id}/book", post(book_trip))
        .route("/v1/trips/{id}/cancel", post(cancel_booking))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            session_auth_middleware,
        ));

    Router::new()
        .route("/v1/trips", get(list_trips))
        .route("/v1/trips/{id}", get(get_trip))
        .route("/v1/trips/{id}/stream", get(stream_trip_events))
        .merge(protected)
}

async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<TripListQuery>,
) -> Json<Vec<Trip>> {
    Json(state.store.read().await.trips_filtered(query.status))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Trip>, AppError> {
    state
        .store
        .read()
        .await
        .get_trip_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Trip not found: {}", id)))
}

async fn book_trip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(claims): Extension<SessionClaims>,
    Json(req): Json<BookTripRequest>,
) -> Result<Json<BookingConfirmation>, AppError> {
    state.simulate_latency().await;

    // The write lock covers the whole check-then-mutate sequence, so two
    // requests cannot both observe the last free seat.
    let mut store = state.store.write().await;
    let user = store
        .get_user_by_id(&claims.sub)
        .cloned()
        .ok_or_else(|| AppError::AuthenticationError("Unknown session subject".to_string()))?;
    let confirmation = store.book_trip(&user, &id, &req.pickup_point, &req.dropoff_point)?;
    drop(store);

    let _ = state.events_tx.send(BookingEvent {
        trip_id: confirmation.trip_id.clone(),
        user_id: user.id,
        kind: BookingEventKind::Booked,
        seats_remaining: confirmation.seats_remaining,
        occurred_at: Utc::now().timestamp(),
    });

    Ok(Json(confirmation))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(claims): Extension<SessionClaims>,
) -> Result<Json<CancellationConfirmation>, AppError> {
    state.simulate_latency().await;

    let confirmation = state
        .store
        .write()
        .await
        .cancel_booking(&claims.sub, &id)?;

    if confirmation.seats_released > 0 {
        let _ = state.events_tx.send(BookingEvent {
            trip_id: confirmation.trip_id.clone(),
            user_id: claims.sub,
            kind: BookingEventKind::Cancelled,
            seats_remaining: confirmation.seats_remaining,
            occurred_at: Utc::now().timestamp(),
        });
    }

    Ok(Json(confirmation))
}

/// SSE feed of roster changes for one trip.
async fn stream_trip_events(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    if state.store.read().await.get_trip_by_id(&id).is_none() {
        return Err(AppError::NotFoundError(format!("Trip not found: {}", id)));
    }

    let rx = state.events_tx.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(move |result| {
        let trip_id = id.clone();
        async move {
            match result {
                Ok(event) if event.trip_id == trip_id => Event::default()
                    .event("booking")
                    .json_data(&event)
                    .ok()
                    .map(Ok::<_, Infallible>),
                _ => None,
            }
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
