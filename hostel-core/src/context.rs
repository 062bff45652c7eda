use serde::{Deserialize, Serialize};

use crate::policy::{self, Action, Role};

/// Identity of the user performing a request.
///
/// Built once per request from the session and handed down to every gated
/// operation; it is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub user_id: String,
    pub role: Role,
}

impl RequestContext {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    pub fn is_owner_of(&self, owner_id: &str) -> bool {
        self.user_id == owner_id
    }

    pub fn can(&self, action: Action, is_owner: bool) -> bool {
        policy::is_allowed(self.role, action, is_owner)
    }
}
