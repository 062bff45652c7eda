use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use hostel_core::{
    records::{Feedback, NewFeedback},
    RequestContext,
};

use crate::api::error::{AppError, ErrorBody};
use crate::api::json::AppJson;
use crate::app_state::SharedAppState;

#[utoipa::path(
    get,
    path = "/api/v1/feedback",
    responses(
    (status = 200, description = "Newest first; students see their own", body = [Feedback]),
    (status = 403, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_feedback_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service.list_feedback(&ctx).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/feedback",
    request_body = NewFeedback,
    responses(
    (status = 201, body = Feedback),
    (status = 403, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn submit_feedback_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    AppJson(feedback): AppJson<NewFeedback>,
) -> Result<impl IntoResponse, AppError> {
    let feedback = state.service.submit_feedback(&ctx, feedback).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}
