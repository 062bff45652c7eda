use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use hostel_core::{
    records::{NewVisitorRequest, VisitorRequest},
    RequestContext,
};

use super::parse_id;
use crate::api::error::{AppError, ErrorBody};
use crate::api::json::AppJson;
use crate::app_state::SharedAppState;

#[utoipa::path(
    get,
    path = "/api/v1/visitors",
    responses(
    (status = 200, description = "Latest visit date first; students see their own", body = [VisitorRequest]),
    (status = 403, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_visitors_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service.list_visitors(&ctx).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/visitors",
    request_body = NewVisitorRequest,
    responses(
    (status = 201, body = VisitorRequest),
    (status = 403, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn register_visitor_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    AppJson(visit): AppJson<NewVisitorRequest>,
) -> Result<impl IntoResponse, AppError> {
    let visit = state.service.register_visitor(&ctx, visit).await?;
    Ok((StatusCode::CREATED, Json(visit)))
}

#[utoipa::path(
    post,
    path = "/api/v1/visitors/{id}/approve",
    params(("id" = String, Path, description = "Visitor request id")),
    responses(
    (status = 200, body = VisitorRequest),
    (status = 409, description = "Already decided", body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn approve_visitor_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state.service.approve_visitor(&ctx, parse_id(&id)?).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/visitors/{id}/reject",
    params(("id" = String, Path, description = "Visitor request id")),
    responses(
    (status = 200, body = VisitorRequest),
    (status = 409, description = "Already decided", body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn reject_visitor_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state.service.reject_visitor(&ctx, parse_id(&id)?).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/visitors/{id}",
    params(("id" = String, Path, description = "Visitor request id")),
    responses(
    (status = 204, description = "Visitor request deleted"),
    (status = 404, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_visitor_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.service.delete_visitor(&ctx, parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
