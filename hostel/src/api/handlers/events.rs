use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use hostel_core::{
    records::{Event, EventUpdate, NewEvent},
    RequestContext,
};

use super::parse_id;
use crate::api::error::{AppError, ErrorBody};
use crate::api::json::AppJson;
use crate::app_state::SharedAppState;

#[utoipa::path(
    get,
    path = "/api/v1/events",
    responses(
    (status = 200, description = "Latest date first", body = [Event]),
    (status = 403, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_events_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.service.list_events(&ctx).await?))
}

#[utoipa::path(
    post,
    path = "/api/v1/events",
    request_body = NewEvent,
    responses(
    (status = 201, body = Event),
    (status = 403, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_event_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    AppJson(event): AppJson<NewEvent>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.service.create_event(&ctx, event).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[utoipa::path(
    put,
    path = "/api/v1/events/{id}",
    params(("id" = String, Path, description = "Event id")),
    request_body = EventUpdate,
    responses(
    (status = 200, body = Event),
    (status = 404, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn update_event_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
    AppJson(update): AppJson<EventUpdate>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state
            .service
            .update_event(&ctx, parse_id(&id)?, update)
            .await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/events/{id}",
    params(("id" = String, Path, description = "Event id")),
    responses(
    (status = 204, description = "Event deleted"),
    (status = 404, body = ErrorBody),
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_event_handler(
    State(state): State<SharedAppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.service.delete_event(&ctx, parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
