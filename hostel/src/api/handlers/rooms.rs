use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use hostel_core::{
    records::{NewRoom, Room, RoomUpdate},
    RequestContext,
};
use serde::Deserialize;

use crate::api::error::{AppError, ErrorBody};
use crate::api::json::AppJson;
use crate::app_state::SharedAppState;

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OccupantRequest {
    pub user_id: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    responses(
    (status = 200, description = "All rooms for admins, the own room for students", body = [Room]),
    (status = 403, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_rooms_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service.list_rooms(&ctx).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms",
    request_body = NewRoom,
    responses(
    (status = 201, body = Room),
    (status = 403, body = ErrorBody),
    (status = 409, description = "Room number already exists", body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_room_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    AppJson(room): AppJson<NewRoom>,
) -> Result<impl IntoResponse, AppError> {
    let room = state.service.create_room(&ctx, room).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

#[utoipa::path(
    get,
    path = "/api/v1/rooms/{number}",
    params(("number" = String, Path, description = "Room number")),
    responses(
    (status = 200, body = Room),
    (status = 404, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn get_room_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service.get_room(&ctx, &number).await?))
}

#[utoipa::path(
    patch,
    path = "/api/v1/rooms/{number}",
    params(("number" = String, Path, description = "Room number")),
    request_body = RoomUpdate,
    responses(
    (status = 200, body = Room),
    (status = 409, description = "Number taken or capacity below occupancy", body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn update_room_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(number): Path<String>,
    AppJson(update): AppJson<RoomUpdate>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service.update_room(&ctx, &number, update).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{number}",
    params(("number" = String, Path, description = "Room number")),
    responses(
    (status = 204, description = "Room deleted"),
    (status = 404, body = ErrorBody),
    (status = 409, description = "Room is occupied", body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_room_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.service.delete_room(&ctx, &number).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms/{number}/assign",
    params(("number" = String, Path, description = "Room number")),
    request_body = OccupantRequest,
    responses(
    (status = 200, body = Room),
    (status = 409, description = "Room full or student already housed", body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn assign_room_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(number): Path<String>,
    AppJson(body): AppJson<OccupantRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state
            .service
            .assign_room(&ctx, &number, &body.user_id)
            .await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/rooms/{number}/unassign",
    params(("number" = String, Path, description = "Room number")),
    request_body = OccupantRequest,
    responses(
    (status = 200, body = Room),
    (status = 404, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn unassign_room_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(number): Path<String>,
    AppJson(body): AppJson<OccupantRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state
            .service
            .unassign_room(&ctx, &number, &body.user_id)
            .await?,
    ))
}
