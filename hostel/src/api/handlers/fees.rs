use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use hostel_core::{
    records::{Fee, NewFee},
    RequestContext,
};

use super::parse_id;
use crate::api::error::{AppError, ErrorBody};
use crate::api::json::AppJson;
use crate::app_state::SharedAppState;

#[utoipa::path(
    get,
    path = "/api/v1/fees",
    responses(
    (status = 200, description = "Earliest due date first; students see their own", body = [Fee]),
    (status = 403, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_fees_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service.list_fees(&ctx).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/fees",
    request_body = NewFee,
    responses(
    (status = 201, body = Fee),
    (status = 404, description = "Student does not exist", body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_fee_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    AppJson(fee): AppJson<NewFee>,
) -> Result<impl IntoResponse, AppError> {
    let fee = state.service.create_fee(&ctx, fee).await?;
    Ok((StatusCode::CREATED, Json(fee)))
}

#[utoipa::path(
    get,
    path = "/api/v1/fees/{id}",
    params(("id" = String, Path, description = "Fee id")),
    responses(
    (status = 200, body = Fee),
    (status = 403, body = ErrorBody),
    (status = 404, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn get_fee_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service.get_fee(&ctx, parse_id(&id)?).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/fees/{id}/pay",
    params(("id" = String, Path, description = "Fee id")),
    responses(
    (status = 200, body = Fee),
    (status = 409, description = "Fee already paid", body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn pay_fee_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state.service.mark_fee_paid(&ctx, parse_id(&id)?).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/fees/{id}",
    params(("id" = String, Path, description = "Fee id")),
    responses(
    (status = 204, description = "Fee deleted"),
    (status = 404, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_fee_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.service.delete_fee(&ctx, parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
