use chrono::Utc;

use super::Collection;
use crate::error::Result;
use crate::records::{require, Feedback, NewFeedback, RecordId};
use crate::store::{Filter, SharedStore};

/// Feedback can be submitted and read, never changed or removed
#[derive(Debug, Clone)]
pub struct FeedbackRepository {
    feedback: Collection<Feedback>,
}

impl FeedbackRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            feedback: Collection::new(store),
        }
    }

    pub async fn create(&self, submitted_by: &str, feedback: NewFeedback) -> Result<Feedback> {
        require("text", &feedback.text)?;
        let record = Feedback {
            id: RecordId::new(),
            submitted_by: submitted_by.to_string(),
            text: feedback.text.trim().to_string(),
            created_at: Utc::now(),
        };
        self.feedback.create(&record).await?;
        Ok(record)
    }

    pub async fn get(&self, id: RecordId) -> Result<Feedback> {
        self.feedback.get(id).await
    }

    pub async fn list(&self, submitted_by: Option<&str>) -> Result<Vec<Feedback>> {
        let filter = match submitted_by {
            Some(user_id) => Filter::all().eq("submittedBy", user_id),
            None => Filter::all(),
        };
        let mut feedback = self.feedback.list(&filter).await?;
        feedback.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(feedback)
    }
}
