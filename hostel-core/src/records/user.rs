use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Record, RecordId};
use crate::policy::Role;

/// A stored account. The password is kept only as a bcrypt hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Registration input
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Generated when omitted
    #[serde(default)]
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

/// A user as shown to clients, without the password hash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_uses_camel_case_and_profile_hides_hash() {
        let user = User {
            id: RecordId::new(),
            user_id: "abc123".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            role: Role::Student,
            password_hash: "$2b$04$hash".into(),
            created_at: Utc::now(),
        };
        let document = user.to_document().unwrap();
        assert_eq!(document["userId"], "abc123");
        assert_eq!(document["role"], "student");
        assert_eq!(User::from_document(document).unwrap(), user);

        let profile = serde_json::to_value(user.profile()).unwrap();
        assert!(profile.get("passwordHash").is_none());
    }
}
