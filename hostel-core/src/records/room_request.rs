use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{status_display, Lifecycle, Record, RecordId, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Denied,
}

status_display!(RequestStatus {
    Pending => "pending",
    Approved => "approved",
    Denied => "denied",
});

impl Status for RequestStatus {
    fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (RequestStatus::Pending, RequestStatus::Approved)
                | (RequestStatus::Pending, RequestStatus::Denied)
        )
    }
}

/// A student's application for a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomRequest {
    pub id: RecordId,
    pub student_id: String,
    pub room_number: String,
    pub status: RequestStatus,
    /// Room the student was placed in, set on approval
    pub assigned_room: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Record for RoomRequest {
    const COLLECTION: &'static str = "roomRequests";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Lifecycle for RoomRequest {
    type Status = RequestStatus;

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
        self.decided_at = Some(Utc::now());
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRoomRequest {
    pub room_number: String,
}
