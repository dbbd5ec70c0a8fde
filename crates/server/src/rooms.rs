use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use service::room::{NewRoom, Room};

use crate::errors::{parse_id, JsonApiError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// `id` or `price`, prefixed with `-` for descending order.
    #[serde(default)]
    pub sort: String,
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub room_id: i32,
}

#[utoipa::path(
    post, path = "/rooms", tag = "rooms",
    request_body = crate::openapi::NewRoomDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CreatedRoomDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    input: Result<Json<NewRoom>, JsonRejection>,
) -> Result<Json<Created>, JsonApiError> {
    let Json(input) = input?;
    let room_id = state.rooms.create(input).await?;
    Ok(Json(Created { room_id }))
}

#[utoipa::path(
    get, path = "/rooms", tag = "rooms",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::RoomDoc]),
        (status = 400, description = "Wrong sort param", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<Room>>, JsonApiError> {
    Ok(Json(state.rooms.get_all(&q.sort).await?))
}

#[utoipa::path(
    get, path = "/rooms/{id}", tag = "rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::RoomDoc),
        (status = 400, description = "Wrong room id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Room>, JsonApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.rooms.get(id).await?))
}

#[utoipa::path(
    delete, path = "/rooms/{id}", tag = "rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Wrong room id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<&'static str>, JsonApiError> {
    let id = parse_id(&id)?;
    state.rooms.delete(id).await?;
    Ok(Json("OK"))
}
