use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use hostel_core::{
    records::{NewRoomRequest, RoomRequest},
    RequestContext,
};
use serde::Deserialize;

use super::parse_id;
use crate::api::error::{AppError, ErrorBody};
use crate::api::json::AppJson;
use crate::app_state::SharedAppState;

/// Approval body; `roomNumber` places the student in a different room
#[derive(Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequest {
    #[serde(default)]
    pub room_number: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/room-requests",
    responses(
    (status = 200, description = "Newest first; students see their own", body = [RoomRequest]),
    (status = 403, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_room_requests_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service.list_room_requests(&ctx).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/room-requests",
    request_body = NewRoomRequest,
    responses(
    (status = 201, body = RoomRequest),
    (status = 404, description = "Room does not exist", body = ErrorBody),
    (status = 409, description = "Student already housed or has a pending request", body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_room_request_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    AppJson(request): AppJson<NewRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    let request = state.service.request_room(&ctx, request).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

#[utoipa::path(
    post,
    path = "/api/v1/room-requests/{id}/approve",
    params(("id" = String, Path, description = "Request id")),
    request_body = ApproveRequest,
    responses(
    (status = 200, body = RoomRequest),
    (status = 409, description = "Room full or request already decided", body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn approve_room_request_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
    body: Option<AppJson<ApproveRequest>>,
) -> Result<impl IntoResponse, AppError> {
    let room_number = body.and_then(|AppJson(body)| body.room_number);
    let request = state
        .service
        .approve_room_request(&ctx, parse_id(&id)?, room_number.as_deref())
        .await?;
    Ok(Json(request))
}

#[utoipa::path(
    post,
    path = "/api/v1/room-requests/{id}/deny",
    params(("id" = String, Path, description = "Request id")),
    responses(
    (status = 200, body = RoomRequest),
    (status = 409, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn deny_room_request_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state.service.deny_room_request(&ctx, parse_id(&id)?).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/room-requests/{id}",
    params(("id" = String, Path, description = "Request id")),
    responses(
    (status = 204, description = "Request deleted"),
    (status = 404, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_room_request_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .service
        .delete_room_request(&ctx, parse_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
