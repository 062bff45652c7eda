use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{status_display, Lifecycle, Record, RecordId, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

status_display!(TicketStatus {
    Open => "open",
    InProgress => "in_progress",
    Resolved => "resolved",
});

impl Status for TicketStatus {
    /// Resolved is terminal; an in-progress ticket may be reopened.
    fn can_transition_to(self, next: Self) -> bool {
        use TicketStatus::*;
        matches!(
            (self, next),
            (Open, InProgress) | (Open, Resolved) | (InProgress, Resolved) | (InProgress, Open)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTicket {
    pub id: RecordId,
    pub raised_by: String,
    pub description: String,
    pub status: TicketStatus,
    pub assigned_staff: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for MaintenanceTicket {
    const COLLECTION: &'static str = "maintenanceTickets";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Lifecycle for MaintenanceTicket {
    type Status = TicketStatus;

    fn status(&self) -> TicketStatus {
        self.status
    }

    fn set_status(&mut self, status: TicketStatus) {
        self.status = status;
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewTicket {
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_is_terminal() {
        use TicketStatus::*;
        for next in [Open, InProgress, Resolved] {
            assert!(!Resolved.can_transition_to(next));
        }
        assert!(InProgress.can_transition_to(Open));
        assert!(!Open.can_transition_to(Open));
    }
}
