//! Access policy for the hostel service
//!
//! Maps `(role, action, is_owner)` to allow/deny. The table is an exhaustive
//! match over [`Action`], so every action has exactly one rule. The policy has
//! no state and no side effects.

pub mod types;


pub use types::{Action, Ownership, Role, Rule};

const ADMIN: &[Role] = &[Role::Admin];
const STUDENT: &[Role] = &[Role::Student];
const STAFF_OR_ADMIN: &[Role] = &[Role::Staff, Role::Admin];
const STUDENT_OR_STAFF: &[Role] = &[Role::Student, Role::Staff];
const ADMIN_OR_STUDENT: &[Role] = &[Role::Admin, Role::Student];
const EVERYONE: &[Role] = &[Role::Admin, Role::Student, Role::Staff];

/// The rule governing an action
pub fn rule_for(action: Action) -> Rule {
    match action {
        Action::ViewProfile => Rule::any_of(EVERYONE),
        Action::ListUsers => Rule::any_of(ADMIN),

        Action::CreateRoom
        | Action::UpdateRoom
        | Action::AssignRoom
        | Action::UnassignRoom
        | Action::DeleteRoom
        | Action::ViewAllRooms => Rule::any_of(ADMIN),
        Action::ViewOwnRoom => Rule::owner(STUDENT),

        Action::RequestRoom => Rule::any_of(STUDENT),
        Action::ViewOwnRoomRequests => Rule::owner(STUDENT),
        Action::ViewAllRoomRequests
        | Action::ApproveRoomRequest
        | Action::DenyRoomRequest
        | Action::DeleteRoomRequest => Rule::any_of(ADMIN),

        Action::RaiseMaintenance => Rule::any_of(STUDENT_OR_STAFF),
        Action::ViewOwnMaintenance => Rule::owner(STUDENT),
        Action::ViewAllMaintenance | Action::UpdateMaintenanceStatus => {
            Rule::any_of(STAFF_OR_ADMIN)
        }
        Action::AssignMaintenance | Action::DeleteMaintenance => Rule::any_of(ADMIN),

        Action::ViewEvents => Rule::any_of(ADMIN_OR_STUDENT),
        Action::CreateEvent | Action::UpdateEvent | Action::DeleteEvent => Rule::any_of(ADMIN),

        Action::CreateFee | Action::MarkFeePaid | Action::DeleteFee | Action::ViewAllFees => {
            Rule::any_of(ADMIN)
        }
        Action::ViewOwnFee => Rule::owner(STUDENT),

        Action::RegisterVisitor => Rule::any_of(STUDENT),
        Action::ViewOwnVisitors => Rule::owner(STUDENT),
        Action::ViewAllVisitors | Action::ApproveVisitor | Action::RejectVisitor => {
            Rule::any_of(STAFF_OR_ADMIN)
        }
        Action::DeleteVisitor => Rule::any_of(ADMIN),

        Action::SubmitFeedback => Rule::any_of(STUDENT),
        Action::ViewOwnFeedback => Rule::owner(STUDENT),
        Action::ViewAllFeedback => Rule::any_of(ADMIN),
    }
}

/// Decide whether `role` may perform `action`.
///
/// `is_owner` tells whether the actor is the subject of the record being
/// accessed; it only matters for actions whose rule requires ownership.
pub fn is_allowed(role: Role, action: Action, is_owner: bool) -> bool {
    rule_for(action).permits(role, is_owner)
}

/// String boundary of [`is_allowed`]. Unknown roles or actions are denied.
pub fn is_allowed_str(role: &str, action: &str, is_owner: bool) -> bool {
    match (Role::from_str(role), Action::from_str(action)) {
        (Some(role), Some(action)) => is_allowed(role, action, is_owner),
        _ => false,
    }
}

/// Every action a role can perform on at least its own records
pub fn allowed_actions(role: Role) -> Vec<Action> {
    Action::all()
        .into_iter()
        .filter(|action| is_allowed(role, *action, true))
        .collect()
}
