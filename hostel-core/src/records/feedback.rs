use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Record, RecordId};

/// Append-only; there is no update or delete path for feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: RecordId,
    pub submitted_by: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Feedback {
    const COLLECTION: &'static str = "feedback";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewFeedback {
    pub text: String,
}
