use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use service::booking::{Booking, NewBooking};

use crate::errors::{parse_id, JsonApiError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Required.
    pub room_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub booking_id: i32,
}

#[utoipa::path(
    post, path = "/bookings", tag = "bookings",
    request_body = crate::openapi::NewBookingDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CreatedBookingDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    input: Result<Json<NewBooking>, JsonRejection>,
) -> Result<Json<Created>, JsonApiError> {
    let Json(input) = input?;
    if input.room_id <= 0 {
        return Err(JsonApiError::bad_request(crate::errors::BAD_ID));
    }
    let booking_id = state.bookings.create(input).await?;
    Ok(Json(Created { booking_id }))
}

#[utoipa::path(
    get, path = "/bookings", tag = "bookings",
    params(ListQuery),
    responses(
        (status = 200, description = "Bookings of the room, by date_start", body = [crate::openapi::BookingDoc]),
        (status = 400, description = "Bad room id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<Booking>>, JsonApiError> {
    let room_id = parse_id(q.room_id.as_deref().unwrap_or_default())?;
    Ok(Json(state.bookings.get_by_room_id(room_id).await?))
}

#[utoipa::path(
    get, path = "/bookings/{id}", tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BookingDoc),
        (status = 400, description = "Wrong booking id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Booking>, JsonApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.bookings.get(id).await?))
}

#[utoipa::path(
    delete, path = "/bookings/{id}", tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Wrong booking id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<&'static str>, JsonApiError> {
    let id = parse_id(&id)?;
    state.bookings.delete(id).await?;
    Ok(Json("OK"))
}
