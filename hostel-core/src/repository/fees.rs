use chrono::Utc;
use tracing::instrument;

use super::{find_user, Collection};
use crate::error::{HostelError, Result};
use crate::policy::Role;
use crate::records::{Fee, FeeStatus, NewFee, RecordId, User};
use crate::store::{Filter, SharedStore};

#[derive(Debug, Clone)]
pub struct FeeRepository {
    fees: Collection<Fee>,
    users: Collection<User>,
}

impl FeeRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            fees: Collection::new(store.clone()),
            users: Collection::new(store),
        }
    }

    /// Raise a fee against an existing student
    #[instrument(skip(self))]
    pub async fn create(&self, fee: NewFee) -> Result<Fee> {
        if fee.amount_cents == 0 {
            return Err(HostelError::InvalidInput(
                "amount must be greater than zero".into(),
            ));
        }
        let student = find_user(&self.users, fee.student_id.trim()).await?;
        if student.role != Role::Student {
            return Err(HostelError::InvalidInput(format!(
                "{} is not a student",
                student.user_id
            )));
        }

        let record = Fee {
            id: RecordId::new(),
            student_id: student.user_id,
            amount_cents: fee.amount_cents,
            due_date: fee.due_date,
            status: FeeStatus::Pending,
            paid_at: None,
            created_at: Utc::now(),
        };
        self.fees.create(&record).await?;
        Ok(record)
    }

    pub async fn get(&self, id: RecordId) -> Result<Fee> {
        self.fees.get(id).await
    }

    /// Fees ordered by due date, earliest first
    pub async fn list(&self, student_id: Option<&str>) -> Result<Vec<Fee>> {
        let filter = match student_id {
            Some(student_id) => Filter::all().eq("studentId", student_id),
            None => Filter::all(),
        };
        let mut fees = self.fees.list(&filter).await?;
        fees.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        Ok(fees)
    }

    pub async fn update(&self, id: RecordId, status: FeeStatus) -> Result<Fee> {
        self.fees.transition(id, status).await
    }

    pub async fn mark_paid(&self, id: RecordId) -> Result<Fee> {
        self.update(id, FeeStatus::Paid).await
    }

    pub async fn delete(&self, id: RecordId) -> Result<()> {
        self.fees.delete(id).await
    }
}
