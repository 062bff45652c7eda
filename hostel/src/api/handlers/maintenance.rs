use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use hostel_core::{
    records::{MaintenanceTicket, NewTicket, TicketStatus},
    RequestContext,
};
use serde::Deserialize;

use super::parse_id;
use crate::api::error::{AppError, ErrorBody};
use crate::api::json::AppJson;
use crate::app_state::SharedAppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct StatusChange {
    pub status: TicketStatus,
}

#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffAssignment {
    pub staff_id: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/maintenance",
    responses(
    (status = 200, description = "Newest first; students see their own", body = [MaintenanceTicket]),
    (status = 403, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_maintenance_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service.list_maintenance(&ctx).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/maintenance",
    request_body = NewTicket,
    responses(
    (status = 201, body = MaintenanceTicket),
    (status = 403, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn raise_maintenance_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    AppJson(ticket): AppJson<NewTicket>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = state.service.raise_maintenance(&ctx, ticket).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

#[utoipa::path(
    post,
    path = "/api/v1/maintenance/{id}/status",
    params(("id" = String, Path, description = "Ticket id")),
    request_body = StatusChange,
    responses(
    (status = 200, body = MaintenanceTicket),
    (status = 409, description = "Transition not allowed", body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn update_maintenance_status_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
    AppJson(body): AppJson<StatusChange>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = state
        .service
        .update_maintenance_status(&ctx, parse_id(&id)?, body.status)
        .await?;
    Ok(Json(ticket))
}

#[utoipa::path(
    post,
    path = "/api/v1/maintenance/{id}/assign",
    params(("id" = String, Path, description = "Ticket id")),
    request_body = StaffAssignment,
    responses(
    (status = 200, body = MaintenanceTicket),
    (status = 400, description = "Assignee is not staff", body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn assign_maintenance_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
    AppJson(body): AppJson<StaffAssignment>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = state
        .service
        .assign_maintenance(&ctx, parse_id(&id)?, &body.staff_id)
        .await?;
    Ok(Json(ticket))
}

#[utoipa::path(
    delete,
    path = "/api/v1/maintenance/{id}",
    params(("id" = String, Path, description = "Ticket id")),
    responses(
    (status = 204, description = "Ticket deleted"),
    (status = 404, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_maintenance_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .service
        .delete_maintenance(&ctx, parse_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
