use axum::{debug_handler, extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use chrono::{DateTime, Utc};
use hostel_core::{
    records::{NewUser, UserProfile},
    Action, RequestContext,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::{error::AppError, error::ErrorBody, middleware::session_auth::SessionToken};
use crate::api::json::AppJson;
use crate::app_state::SharedAppState;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Email address or userId
    #[serde(alias = "email", alias = "userId")]
    pub identifier: String,
    pub password: String,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserProfile,
}

#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user: UserProfile,
    /// What the client may offer this user
    pub allowed_actions: Vec<Action>,
}

#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = NewUser,
    responses(
    (status = 201, body = UserProfile),
    (status = 400, body = ErrorBody),
    (status = 409, description = "Email or userId taken, or an admin already exists", body = ErrorBody),
    )
)]
#[debug_handler]
pub async fn register_handler(
    State(state): State<SharedAppState>,
    AppJson(new_user): AppJson<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    let profile = state.service.register(new_user).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
    (status = 200, body = LoginResponse),
    (status = 401, body = ErrorBody),
    )
)]
#[debug_handler]
pub async fn login_handler(
    State(state): State<SharedAppState>,
    AppJson(form): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.service.login(&form.identifier, &form.password).await?;
    let (token, session) = state
        .sessions
        .create(RequestContext::new(user.user_id.clone(), user.role))
        .await;
    info!("{} logged in", user.user_id);

    Ok(Json(LoginResponse {
        token,
        expires_at: session.expires_at,
        user: user.profile(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
    (status = 204, description = "Session closed"),
    (status = 401, body = ErrorBody),
    ),
    security(
        ("bearerAuth" = [])
    )
)]
pub async fn logout_handler(
    State(state): State<SharedAppState>,
    Extension(token): Extension<SessionToken>,
) -> impl IntoResponse {
    state.sessions.remove(&token.0).await;
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    get,
    path = "/api/v1/me",
    responses(
    (status = 200, body = MeResponse),
    (status = 401, body = ErrorBody),
    ),
    security(
        ("bearerAuth" = [])
    )
)]
pub async fn me_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.service.profile(&ctx).await?;
    Ok(Json(MeResponse {
        user,
        allowed_actions: state.service.allowed_actions(&ctx),
    }))
}
