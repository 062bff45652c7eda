use axum::{extract::State, response::IntoResponse, Extension, Json};
use hostel_core::{records::UserProfile, RequestContext};

use crate::api::error::{AppError, ErrorBody};
use crate::app_state::SharedAppState;

#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
    (status = 200, body = [UserProfile]),
    (status = 403, body = ErrorBody),
    ),
    security(
        ("bearerAuth" = [])
    )
)]
pub async fn list_users_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service.list_users(&ctx).await?))
}
