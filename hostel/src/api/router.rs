use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use hostel_core::records::{
    Event, Fee, FeeStatus, Feedback, MaintenanceTicket, NewEvent, NewFee, NewFeedback, NewRoom,
    NewRoomRequest, NewTicket, NewUser, NewVisitorRequest, RecordId, RequestStatus, Room,
    RoomRequest, RoomStatus, RoomType, RoomUpdate, TicketStatus, UserProfile, VisitStatus,
    VisitorRequest,
};
use hostel_core::{Action, Role};

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::error::ErrorBody;
use crate::api::handlers::auth::__path_login_handler;
use crate::api::handlers::auth::__path_logout_handler;
use crate::api::handlers::auth::__path_me_handler;
use crate::api::handlers::auth::__path_register_handler;
use crate::api::handlers::events::__path_create_event_handler;
use crate::api::handlers::events::__path_delete_event_handler;
use crate::api::handlers::events::__path_list_events_handler;
use crate::api::handlers::events::__path_update_event_handler;
use crate::api::handlers::feedback::__path_list_feedback_handler;
use crate::api::handlers::feedback::__path_submit_feedback_handler;
use crate::api::handlers::fees::__path_create_fee_handler;
use crate::api::handlers::fees::__path_delete_fee_handler;
use crate::api::handlers::fees::__path_get_fee_handler;
use crate::api::handlers::fees::__path_list_fees_handler;
use crate::api::handlers::fees::__path_pay_fee_handler;
use crate::api::handlers::health::__path_health_checker_handler;
use crate::api::handlers::maintenance::__path_assign_maintenance_handler;
use crate::api::handlers::maintenance::__path_delete_maintenance_handler;
use crate::api::handlers::maintenance::__path_list_maintenance_handler;
use crate::api::handlers::maintenance::__path_raise_maintenance_handler;
use crate::api::handlers::maintenance::__path_update_maintenance_status_handler;
use crate::api::handlers::room_requests::__path_approve_room_request_handler;
use crate::api::handlers::room_requests::__path_create_room_request_handler;
use crate::api::handlers::room_requests::__path_delete_room_request_handler;
use crate::api::handlers::room_requests::__path_deny_room_request_handler;
use crate::api::handlers::room_requests::__path_list_room_requests_handler;
use crate::api::handlers::rooms::__path_assign_room_handler;
use crate::api::handlers::rooms::__path_create_room_handler;
use crate::api::handlers::rooms::__path_delete_room_handler;
use crate::api::handlers::rooms::__path_get_room_handler;
use crate::api::handlers::rooms::__path_list_rooms_handler;
use crate::api::handlers::rooms::__path_unassign_room_handler;
use crate::api::handlers::rooms::__path_update_room_handler;
use crate::api::handlers::users::__path_list_users_handler;
use crate::api::handlers::visitors::__path_approve_visitor_handler;
use crate::api::handlers::visitors::__path_delete_visitor_handler;
use crate::api::handlers::visitors::__path_list_visitors_handler;
use crate::api::handlers::visitors::__path_register_visitor_handler;
use crate::api::handlers::visitors::__path_reject_visitor_handler;
use crate::app_state::SharedAppState;

use super::handlers::auth::{
    login_handler, logout_handler, me_handler, register_handler, LoginRequest, LoginResponse,
    MeResponse,
};
use super::handlers::events::{
    create_event_handler, delete_event_handler, list_events_handler, update_event_handler,
};
use super::handlers::feedback::{list_feedback_handler, submit_feedback_handler};
use super::handlers::fees::{
    create_fee_handler, delete_fee_handler, get_fee_handler, list_fees_handler, pay_fee_handler,
};
use super::handlers::health::health_checker_handler;
use super::handlers::maintenance::{
    assign_maintenance_handler, delete_maintenance_handler, list_maintenance_handler,
    raise_maintenance_handler, update_maintenance_status_handler, StaffAssignment, StatusChange,
};
use super::handlers::room_requests::{
    approve_room_request_handler, create_room_request_handler, delete_room_request_handler,
    deny_room_request_handler, list_room_requests_handler, ApproveRequest,
};
use super::handlers::rooms::{
    assign_room_handler, create_room_handler, delete_room_handler, get_room_handler,
    list_rooms_handler, unassign_room_handler, update_room_handler, OccupantRequest,
};
use super::handlers::users::list_users_handler;
use super::handlers::visitors::{
    approve_visitor_handler, delete_visitor_handler, list_visitors_handler,
    register_visitor_handler, reject_visitor_handler,
};
use super::middleware::session_auth::session_auth;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_checker_handler,
        register_handler,
        login_handler,
        logout_handler,
        me_handler,
        list_users_handler,
        list_rooms_handler,
        create_room_handler,
        get_room_handler,
        update_room_handler,
        delete_room_handler,
        assign_room_handler,
        unassign_room_handler,
        list_room_requests_handler,
        create_room_request_handler,
        approve_room_request_handler,
        deny_room_request_handler,
        delete_room_request_handler,
        list_maintenance_handler,
        raise_maintenance_handler,
        update_maintenance_status_handler,
        assign_maintenance_handler,
        delete_maintenance_handler,
        list_events_handler,
        create_event_handler,
        update_event_handler,
        delete_event_handler,
        list_fees_handler,
        create_fee_handler,
        get_fee_handler,
        pay_fee_handler,
        delete_fee_handler,
        list_visitors_handler,
        register_visitor_handler,
        approve_visitor_handler,
        reject_visitor_handler,
        delete_visitor_handler,
        list_feedback_handler,
        submit_feedback_handler,
    ),
    components(
        schemas(
            ErrorBody, Role, Action, RecordId, NewUser, UserProfile, LoginRequest, LoginResponse,
            MeResponse, Room, RoomType, RoomStatus, NewRoom, RoomUpdate, OccupantRequest,
            RoomRequest, RequestStatus, NewRoomRequest, ApproveRequest, MaintenanceTicket,
            TicketStatus, NewTicket, StatusChange, StaffAssignment, Event, NewEvent, Fee,
            FeeStatus, NewFee, VisitorRequest, VisitStatus, NewVisitorRequest, Feedback,
            NewFeedback
        )
    ),
    tags(
        (name = "hostel", description = "hostel administration api")
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            )
        }
    }
}

pub struct ApiRoutes;

impl ApiRoutes {
    pub fn create(state: SharedAppState) -> Router {
        let api = ApiDoc::openapi();

        let authenticated_router = Router::new()
            .route("/api/v1/logout", post(logout_handler))
            .route("/api/v1/me", get(me_handler))
            .route("/api/v1/users", get(list_users_handler))
            .route(
                "/api/v1/rooms",
                get(list_rooms_handler).post(create_room_handler),
            )
            .route(
                "/api/v1/rooms/{number}",
                get(get_room_handler)
                    .patch(update_room_handler)
                    .delete(delete_room_handler),
            )
            .route("/api/v1/rooms/{number}/assign", post(assign_room_handler))
            .route(
                "/api/v1/rooms/{number}/unassign",
                post(unassign_room_handler),
            )
            .route(
                "/api/v1/room-requests",
                get(list_room_requests_handler).post(create_room_request_handler),
            )
            .route(
                "/api/v1/room-requests/{id}",
                axum::routing::delete(delete_room_request_handler),
            )
            .route(
                "/api/v1/room-requests/{id}/approve",
                post(approve_room_request_handler),
            )
            .route(
                "/api/v1/room-requests/{id}/deny",
                post(deny_room_request_handler),
            )
            .route(
                "/api/v1/maintenance",
                get(list_maintenance_handler).post(raise_maintenance_handler),
            )
            .route(
                "/api/v1/maintenance/{id}",
                axum::routing::delete(delete_maintenance_handler),
            )
            .route(
                "/api/v1/maintenance/{id}/status",
                post(update_maintenance_status_handler),
            )
            .route(
                "/api/v1/maintenance/{id}/assign",
                post(assign_maintenance_handler),
            )
            .route(
                "/api/v1/events",
                get(list_events_handler).post(create_event_handler),
            )
            .route(
                "/api/v1/events/{id}",
                put(update_event_handler).delete(delete_event_handler),
            )
            .route(
                "/api/v1/fees",
                get(list_fees_handler).post(create_fee_handler),
            )
            .route(
                "/api/v1/fees/{id}",
                get(get_fee_handler).delete(delete_fee_handler),
            )
            .route("/api/v1/fees/{id}/pay", post(pay_fee_handler))
            .route(
                "/api/v1/visitors",
                get(list_visitors_handler).post(register_visitor_handler),
            )
            .route(
                "/api/v1/visitors/{id}",
                axum::routing::delete(delete_visitor_handler),
            )
            .route(
                "/api/v1/visitors/{id}/approve",
                post(approve_visitor_handler),
            )
            .route(
                "/api/v1/visitors/{id}/reject",
                post(reject_visitor_handler),
            )
            .route(
                "/api/v1/feedback",
                get(list_feedback_handler).post(submit_feedback_handler),
            )
            // Role checks happen in the service, this only resolves the session
            .route_layer(middleware::from_fn_with_state(state.clone(), session_auth));

        let public_router = Router::new()
            .route("/api/v1/register", post(register_handler))
            .route("/api/v1/login", post(login_handler))
            .route("/api/v1/health", get(health_checker_handler))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));

        Router::new()
            .merge(authenticated_router)
            .merge(public_router)
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_registers_bearer_auth() {
        let api = ApiDoc::openapi();
        let components = api.components.unwrap();
        assert!(components.security_schemes.contains_key("bearerAuth"));
        assert!(api.paths.paths.contains_key("/api/v1/room-requests/{id}/approve"));
        assert!(api.paths.paths.contains_key("/api/v1/fees/{id}/pay"));
    }
}
