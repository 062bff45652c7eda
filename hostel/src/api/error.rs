use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use hostel_core::HostelError;
use thiserror::Error;
use tracing::error;

#[derive(Clone, Error, Debug)]
pub enum AppError {
    #[error("Missing or unknown session")]
    Unauthenticated,

    #[error(transparent)]
    Hostel(#[from] HostelError),
}

/// Error body returned by every failing endpoint
#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: bool,
    pub message: String,
}

impl AppError {
    fn get_error_msg(&self) -> (StatusCode, String) {
        let status = match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Hostel(e) => match e {
                HostelError::DuplicateKey(_)
                | HostelError::Conflict(_)
                | HostelError::InvalidTransition { .. } => StatusCode::CONFLICT,
                HostelError::NotFound(_) => StatusCode::NOT_FOUND,
                HostelError::Unauthorized(_) => StatusCode::FORBIDDEN,
                HostelError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                HostelError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                HostelError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };

        (status, self.to_string())
    }
}

/// Unreadable request bodies are reported like any other invalid input
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Hostel(HostelError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.get_error_msg();
        if status.is_server_error() {
            error!("Request failed: {}", message);
        }
        (
            status,
            Json(ErrorBody {
                error: true,
                message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostel_core::Action;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (HostelError::DuplicateKey("x".into()), StatusCode::CONFLICT),
            (HostelError::Conflict("x".into()), StatusCode::CONFLICT),
            (
                HostelError::InvalidTransition {
                    from: "paid".into(),
                    to: "pending".into(),
                },
                StatusCode::CONFLICT,
            ),
            (HostelError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                HostelError::Unauthorized(Action::DeleteRoom),
                StatusCode::FORBIDDEN,
            ),
            (HostelError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (HostelError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (
                HostelError::Storage("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(AppError::from(error).into_response().status(), expected);
        }
        assert_eq!(
            AppError::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
