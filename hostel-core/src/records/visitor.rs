use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{status_display, Lifecycle, Record, RecordId, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Pending,
    Approved,
    Rejected,
}

status_display!(VisitStatus {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
});

impl Status for VisitStatus {
    fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (VisitStatus::Pending, VisitStatus::Approved)
                | (VisitStatus::Pending, VisitStatus::Rejected)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorRequest {
    pub id: RecordId,
    pub student_id: String,
    pub visitor_name: String,
    pub contact_number: String,
    pub purpose: String,
    pub date: NaiveDate,
    pub status: VisitStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for VisitorRequest {
    const COLLECTION: &'static str = "visitorRequests";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Lifecycle for VisitorRequest {
    type Status = VisitStatus;

    fn status(&self) -> VisitStatus {
        self.status
    }

    fn set_status(&mut self, status: VisitStatus) {
        self.status = status;
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewVisitorRequest {
    pub visitor_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub purpose: String,
    pub date: NaiveDate,
}
