use axum::{
    extract::{Request, State},
    http,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::api::error::AppError;
use crate::app_state::SharedAppState;

/// Bearer token of the current request, kept for logout
#[derive(Clone, Debug)]
pub struct SessionToken(pub String);

/// Resolve the bearer session token into a `RequestContext` extension
pub async fn session_auth(
    State(state): State<SharedAppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string());

    let Some(token) = token else {
        warn!(
            "Missing Authorization header | {} {}",
            req.method(),
            req.uri()
        );
        return Err(AppError::Unauthenticated);
    };

    let Some(context) = state.sessions.resolve(&token).await else {
        warn!("Unknown or expired session | {} {}", req.method(), req.uri());
        return Err(AppError::Unauthenticated);
    };

    debug!("Request by {} ({})", context.user_id, context.role);
    req.extensions_mut().insert(context);
    req.extensions_mut().insert(SessionToken(token));
    Ok(next.run(req).await)
}
