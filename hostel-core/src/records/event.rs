use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Event {
    const COLLECTION: &'static str = "events";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

/// Full replacement of the editable event fields
pub type EventUpdate = NewEvent;
