use chrono::Utc;
use tracing::instrument;

use super::Collection;
use crate::error::Result;
use crate::records::{require, Event, EventUpdate, NewEvent, RecordId};
use crate::store::{Filter, SharedStore};

#[derive(Debug, Clone)]
pub struct EventRepository {
    events: Collection<Event>,
}

impl EventRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            events: Collection::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, event: NewEvent) -> Result<Event> {
        require("title", &event.title)?;
        let record = Event {
            id: RecordId::new(),
            title: event.title.trim().to_string(),
            date: event.date,
            description: event.description.trim().to_string(),
            created_at: Utc::now(),
        };
        self.events.create(&record).await?;
        Ok(record)
    }

    pub async fn get(&self, id: RecordId) -> Result<Event> {
        self.events.get(id).await
    }

    /// Upcoming and past events, latest date first
    pub async fn list(&self) -> Result<Vec<Event>> {
        let mut events = self.events.list(&Filter::all()).await?;
        events.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(events)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: RecordId, update: EventUpdate) -> Result<Event> {
        require("title", &update.title)?;
        let mut event = self.get(id).await?;
        event.title = update.title.trim().to_string();
        event.date = update.date;
        event.description = update.description.trim().to_string();
        self.events.save(&event).await?;
        Ok(event)
    }

    pub async fn delete(&self, id: RecordId) -> Result<()> {
        self.events.delete(id).await
    }
}
