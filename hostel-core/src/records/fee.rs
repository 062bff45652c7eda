use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{status_display, Lifecycle, Record, RecordId, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeeStatus {
    Pending,
    Paid,
}

status_display!(FeeStatus {
    Pending => "pending",
    Paid => "paid",
});

impl Status for FeeStatus {
    fn can_transition_to(self, next: Self) -> bool {
        matches!((self, next), (FeeStatus::Pending, FeeStatus::Paid))
    }
}

/// A charge raised against a student. Amounts are integral cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    pub id: RecordId,
    pub student_id: String,
    pub amount_cents: u64,
    pub due_date: NaiveDate,
    pub status: FeeStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Record for Fee {
    const COLLECTION: &'static str = "fees";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Lifecycle for Fee {
    type Status = FeeStatus;

    fn status(&self) -> FeeStatus {
        self.status
    }

    fn set_status(&mut self, status: FeeStatus) {
        self.status = status;
        if status == FeeStatus::Paid {
            self.paid_at = Some(Utc::now());
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewFee {
    pub student_id: String,
    pub amount_cents: u64,
    pub due_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_never_moves_back() {
        assert!(FeeStatus::Pending.can_transition_to(FeeStatus::Paid));
        assert!(!FeeStatus::Paid.can_transition_to(FeeStatus::Pending));
        assert!(!FeeStatus::Paid.can_transition_to(FeeStatus::Paid));
    }
}
