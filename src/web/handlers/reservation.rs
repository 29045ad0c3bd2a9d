//! Reservation handlers.
//!
//! All three operations are scoped to the caller's verified identity: the
//! owner of every created record is the authenticated user, and list/delete
//! never touch another user's rows.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::{NewReservation, ReservationRepository};
use crate::validation::{date_not_in_past, valid_time_format, within_business_hours};
use crate::web::dto::{ApiResponse, CreateReservationRequest, ReservationData};
use crate::web::error::ApiError;
use crate::web::middleware::AuthUser;

use super::AppState;

/// Check a reservation request against the booking rules.
///
/// Returns one entry per failing field. This check is deliberately not part
/// of the create path itself: the handler only invokes it when
/// `booking.enforce_rules` is configured, since reservations were
/// historically persisted verbatim.
pub fn check_booking_rules(req: &CreateReservationRequest) -> HashMap<String, Vec<String>> {
    let mut failures: HashMap<String, Vec<String>> = HashMap::new();

    if !date_not_in_past(&req.date) {
        failures.insert(
            "date".to_string(),
            vec!["Date must be today or later".to_string()],
        );
    }

    if !valid_time_format(&req.time) {
        failures.insert(
            "time".to_string(),
            vec!["Time must be HH:MM".to_string()],
        );
    } else if !within_business_hours(&req.time) {
        failures.insert(
            "time".to_string(),
            vec!["Time must be within business hours (08:00-18:00)".to_string()],
        );
    }

    failures
}

/// POST /api/reservas - Create a reservation for the authenticated user.
pub async fn create(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationData>>), ApiError> {
    if state.enforce_booking_rules {
        let failures = check_booking_rules(&req);
        if !failures.is_empty() {
            return Err(ApiError::validation(failures));
        }
    }

    let repo = ReservationRepository::new(state.db.pool());
    let reservation = repo
        .create(&NewReservation {
            user_id: claims.sub,
            date: req.date,
            time: req.time,
            service: req.service,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(reservation.into())),
    ))
}

/// GET /api/reservas - List the authenticated user's reservations.
pub async fn list(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<ApiResponse<Vec<ReservationData>>>, ApiError> {
    let repo = ReservationRepository::new(state.db.pool());
    let reservations = repo.list_for_user(claims.sub).await?;

    Ok(Json(ApiResponse::new(
        reservations.into_iter().map(ReservationData::from).collect(),
    )))
}

/// DELETE /api/reservas/:id - Delete an owned reservation.
///
/// A record that does not exist and a record owned by someone else are both
/// 404: the caller learns nothing about other users' reservations.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ReservationData>>, ApiError> {
    let repo = ReservationRepository::new(state.db.pool());
    let deleted = repo
        .delete_owned(id, claims.sub)
        .await?
        .ok_or_else(|| ApiError::not_found("Reservation not found"))?;

    Ok(Json(ApiResponse::new(deleted.into())))
}
