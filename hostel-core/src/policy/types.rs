use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a registered user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Student,
    Staff,
}

impl Role {
    pub fn all() -> Vec<Role> {
        vec![Role::Admin, Role::Student, Role::Staff]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::Staff => "staff",
        }
    }

    /// Parse from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Role> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "student" => Some(Role::Student),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every action that is gated by the access policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ViewProfile,
    ListUsers,

    CreateRoom,
    UpdateRoom,
    AssignRoom,
    UnassignRoom,
    DeleteRoom,
    ViewAllRooms,
    ViewOwnRoom,

    RequestRoom,
    ViewOwnRoomRequests,
    ViewAllRoomRequests,
    ApproveRoomRequest,
    DenyRoomRequest,
    DeleteRoomRequest,

    RaiseMaintenance,
    ViewOwnMaintenance,
    ViewAllMaintenance,
    UpdateMaintenanceStatus,
    AssignMaintenance,
    DeleteMaintenance,

    ViewEvents,
    CreateEvent,
    UpdateEvent,
    DeleteEvent,

    CreateFee,
    MarkFeePaid,
    DeleteFee,
    ViewAllFees,
    ViewOwnFee,

    RegisterVisitor,
    ViewOwnVisitors,
    ViewAllVisitors,
    ApproveVisitor,
    RejectVisitor,
    DeleteVisitor,

    SubmitFeedback,
    ViewOwnFeedback,
    ViewAllFeedback,
}

impl Action {
    /// All actions in display order
    pub fn all() -> Vec<Action> {
        vec![
            Action::ViewProfile,
            Action::ListUsers,
            Action::CreateRoom,
            Action::UpdateRoom,
            Action::AssignRoom,
            Action::UnassignRoom,
            Action::DeleteRoom,
            Action::ViewAllRooms,
            Action::ViewOwnRoom,
            Action::RequestRoom,
            Action::ViewOwnRoomRequests,
            Action::ViewAllRoomRequests,
            Action::ApproveRoomRequest,
            Action::DenyRoomRequest,
            Action::DeleteRoomRequest,
            Action::RaiseMaintenance,
            Action::ViewOwnMaintenance,
            Action::ViewAllMaintenance,
            Action::UpdateMaintenanceStatus,
            Action::AssignMaintenance,
            Action::DeleteMaintenance,
            Action::ViewEvents,
            Action::CreateEvent,
            Action::UpdateEvent,
            Action::DeleteEvent,
            Action::CreateFee,
            Action::MarkFeePaid,
            Action::DeleteFee,
            Action::ViewAllFees,
            Action::ViewOwnFee,
            Action::RegisterVisitor,
            Action::ViewOwnVisitors,
            Action::ViewAllVisitors,
            Action::ApproveVisitor,
            Action::RejectVisitor,
            Action::DeleteVisitor,
            Action::SubmitFeedback,
            Action::ViewOwnFeedback,
            Action::ViewAllFeedback,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ViewProfile => "view_profile",
            Action::ListUsers => "list_users",
            Action::CreateRoom => "create_room",
            Action::UpdateRoom => "update_room",
            Action::AssignRoom => "assign_room",
            Action::UnassignRoom => "unassign_room",
            Action::DeleteRoom => "delete_room",
            Action::ViewAllRooms => "view_all_rooms",
            Action::ViewOwnRoom => "view_own_room",
            Action::RequestRoom => "request_room",
            Action::ViewOwnRoomRequests => "view_own_room_requests",
            Action::ViewAllRoomRequests => "view_all_room_requests",
            Action::ApproveRoomRequest => "approve_room_request",
            Action::DenyRoomRequest => "deny_room_request",
            Action::DeleteRoomRequest => "delete_room_request",
            Action::RaiseMaintenance => "raise_maintenance",
            Action::ViewOwnMaintenance => "view_own_maintenance",
            Action::ViewAllMaintenance => "view_all_maintenance",
            Action::UpdateMaintenanceStatus => "update_maintenance_status",
            Action::AssignMaintenance => "assign_maintenance",
            Action::DeleteMaintenance => "delete_maintenance",
            Action::ViewEvents => "view_events",
            Action::CreateEvent => "create_event",
            Action::UpdateEvent => "update_event",
            Action::DeleteEvent => "delete_event",
            Action::CreateFee => "create_fee",
            Action::MarkFeePaid => "mark_fee_paid",
            Action::DeleteFee => "delete_fee",
            Action::ViewAllFees => "view_all_fees",
            Action::ViewOwnFee => "view_own_fee",
            Action::RegisterVisitor => "register_visitor",
            Action::ViewOwnVisitors => "view_own_visitors",
            Action::ViewAllVisitors => "view_all_visitors",
            Action::ApproveVisitor => "approve_visitor",
            Action::RejectVisitor => "reject_visitor",
            Action::DeleteVisitor => "delete_visitor",
            Action::SubmitFeedback => "submit_feedback",
            Action::ViewOwnFeedback => "view_own_feedback",
            Action::ViewAllFeedback => "view_all_feedback",
        }
    }

    /// Parse from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Action> {
        let s = s.trim().to_lowercase();
        Action::all().into_iter().find(|action| action.as_str() == s)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an action additionally requires the actor to be the record's subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Required,
    NotRequired,
}

/// Roles allowed to perform an action plus its ownership requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub roles: &'static [Role],
    pub ownership: Ownership,
}

impl Rule {
    pub const fn any_of(roles: &'static [Role]) -> Self {
        Self {
            roles,
            ownership: Ownership::NotRequired,
        }
    }

    pub const fn owner(roles: &'static [Role]) -> Self {
        Self {
            roles,
            ownership: Ownership::Required,
        }
    }

    pub fn permits(&self, role: Role, is_owner: bool) -> bool {
        self.roles.contains(&role) && (self.ownership == Ownership::NotRequired || is_owner)
    }
}
