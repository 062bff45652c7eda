use chrono::Utc;
use tracing::instrument;

use super::Collection;
use crate::error::Result;
use crate::records::{require, NewVisitorRequest, RecordId, VisitStatus, VisitorRequest};
use crate::store::{Filter, SharedStore};

#[derive(Debug, Clone)]
pub struct VisitorRepository {
    visits: Collection<VisitorRequest>,
}

impl VisitorRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            visits: Collection::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn create(
        &self,
        student_id: &str,
        visit: NewVisitorRequest,
    ) -> Result<VisitorRequest> {
        require("visitorName", &visit.visitor_name)?;
        let record = VisitorRequest {
            id: RecordId::new(),
            student_id: student_id.to_string(),
            visitor_name: visit.visitor_name.trim().to_string(),
            contact_number: visit.contact_number.trim().to_string(),
            purpose: visit.purpose.trim().to_string(),
            date: visit.date,
            status: VisitStatus::Pending,
            created_at: Utc::now(),
        };
        self.visits.create(&record).await?;
        Ok(record)
    }

    pub async fn get(&self, id: RecordId) -> Result<VisitorRequest> {
        self.visits.get(id).await
    }

    /// Visits ordered by visit date, latest first
    pub async fn list(&self, student_id: Option<&str>) -> Result<Vec<VisitorRequest>> {
        let filter = match student_id {
            Some(student_id) => Filter::all().eq("studentId", student_id),
            None => Filter::all(),
        };
        let mut visits = self.visits.list(&filter).await?;
        visits.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(visits)
    }

    pub async fn update(&self, id: RecordId, status: VisitStatus) -> Result<VisitorRequest> {
        self.visits.transition(id, status).await
    }

    pub async fn delete(&self, id: RecordId) -> Result<()> {
        self.visits.delete(id).await
    }
}
