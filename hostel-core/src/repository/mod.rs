//! Repositories over the document store
//!
//! Each repository wraps a typed [`Collection`] and adds the rules of its
//! entity. Repositories know nothing about roles; access checks happen one
//! layer up, before a repository is called.

pub mod events;
pub mod feedback;
pub mod fees;
pub mod maintenance;
pub mod rooms;
pub mod visitors;


use std::marker::PhantomData;

use tracing::{debug, info};

use crate::error::{HostelError, Result};
use crate::records::{check_transition, Lifecycle, Record, RecordId, Room, User};
use crate::store::{Filter, SharedStore, UniqueIndex};

pub use events::EventRepository;
pub use feedback::FeedbackRepository;
pub use fees::FeeRepository;
pub use maintenance::MaintenanceRepository;
pub use rooms::{RoomRepository, RoomRequestRepository};
pub use visitors::VisitorRepository;

/// Typed view of one collection of the store
#[derive(Debug)]
pub struct Collection<R: Record> {
    store: SharedStore,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self::new(self.store.clone())
    }
}

impl<R: Record> Collection<R> {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    pub async fn create(&self, record: &R) -> Result<RecordId> {
        self.store
            .insert(R::COLLECTION, &record.key(), record.to_document()?)
            .await?;
        info!("Created {} {}", R::COLLECTION, record.id());
        Ok(record.id())
    }

    pub async fn get(&self, id: RecordId) -> Result<R> {
        let key = id.to_string();
        match self.store.get(R::COLLECTION, &key).await? {
            Some(document) => R::from_document(document),
            None => Err(HostelError::NotFound(format!("{}/{}", R::COLLECTION, key))),
        }
    }

    pub async fn find_one(&self, filter: &Filter) -> Result<Option<R>> {
        Ok(self.list(filter).await?.into_iter().next())
    }

    pub async fn list(&self, filter: &Filter) -> Result<Vec<R>> {
        let documents = self.store.find(R::COLLECTION, filter).await?;
        debug!("Found {} documents in {}", documents.len(), R::COLLECTION);
        documents.into_iter().map(R::from_document).collect()
    }

    pub async fn save(&self, record: &R) -> Result<()> {
        self.store
            .replace(R::COLLECTION, &record.key(), record.to_document()?)
            .await?;
        debug!("Saved {} {}", R::COLLECTION, record.id());
        Ok(())
    }

    pub async fn delete(&self, id: RecordId) -> Result<()> {
        self.store.delete(R::COLLECTION, &id.to_string()).await?;
        info!("Deleted {} {}", R::COLLECTION, id);
        Ok(())
    }
}

impl<R: Lifecycle> Collection<R> {
    /// Move a record to `next`, checking its transition table first
    pub async fn transition(&self, id: RecordId, next: R::Status) -> Result<R> {
        let mut record = self.get(id).await?;
        check_transition(record.status(), next)?;
        let from = record.status();
        record.set_status(next);
        self.save(&record).await?;
        info!("{} {} moved from {} to {}", R::COLLECTION, id, from, next);
        Ok(record)
    }
}

/// Read access to users for the repositories that reference them
pub(crate) async fn find_user(users: &Collection<User>, user_id: &str) -> Result<User> {
    users
        .find_one(&Filter::all().eq("userId", user_id))
        .await?
        .ok_or_else(|| HostelError::NotFound(format!("user {user_id}")))
}

/// All repositories over one shared store
#[derive(Debug, Clone)]
pub struct Repositories {
    pub rooms: RoomRepository,
    pub room_requests: RoomRequestRepository,
    pub maintenance: MaintenanceRepository,
    pub events: EventRepository,
    pub fees: FeeRepository,
    pub visitors: VisitorRepository,
    pub feedback: FeedbackRepository,
}

impl Repositories {
    /// Register the room number index and build every repository
    pub async fn open(store: SharedStore) -> Result<Self> {
        store
            .ensure_unique_index(UniqueIndex::new(Room::COLLECTION, "number"))
            .await?;

        Ok(Self {
            rooms: RoomRepository::new(store.clone()),
            room_requests: RoomRequestRepository::new(store.clone()),
            maintenance: MaintenanceRepository::new(store.clone()),
            events: EventRepository::new(store.clone()),
            fees: FeeRepository::new(store.clone()),
            visitors: VisitorRepository::new(store.clone()),
            feedback: FeedbackRepository::new(store),
        })
    }
}
