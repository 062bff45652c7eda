//! Typed records and their document encoding

pub mod event;
pub mod feedback;
pub mod fee;
pub mod maintenance;
pub mod room;
pub mod room_request;
pub mod user;
pub mod visitor;

use std::fmt::{Debug, Display};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{HostelError, Result};
use crate::store::Document;

pub use event::{Event, EventUpdate, NewEvent};
pub use feedback::{Feedback, NewFeedback};
pub use fee::{Fee, FeeStatus, NewFee};
pub use maintenance::{MaintenanceTicket, NewTicket, TicketStatus};
pub use room::{NewRoom, Room, RoomStatus, RoomType, RoomUpdate};
pub use room_request::{NewRoomRequest, RequestStatus, RoomRequest};
pub use user::{NewUser, User, UserProfile};
pub use visitor::{NewVisitorRequest, VisitStatus, VisitorRequest};

/// Opaque primary key of every stored record
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| HostelError::NotFound(format!("record {s}")))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A struct stored as one document of a named collection.
///
/// Encoding goes through serde, so the field names of the document are the
/// serde names of the struct.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    const COLLECTION: &'static str;

    fn id(&self) -> RecordId;

    fn key(&self) -> String {
        self.id().to_string()
    }

    fn to_document(&self) -> Result<Document> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(HostelError::Storage(format!(
                "{} did not encode to an object: {other}",
                Self::COLLECTION
            ))),
        }
    }

    fn from_document(document: Document) -> Result<Self> {
        Ok(serde_json::from_value(serde_json::Value::Object(document))?)
    }
}

/// Status values with a fixed transition table
pub trait Status: Copy + PartialEq + Display + Debug {
    fn can_transition_to(self, next: Self) -> bool;
}

/// Records that move through a status lifecycle
pub trait Lifecycle: Record {
    type Status: Status;

    fn status(&self) -> Self::Status;

    /// Store the new status. Called only after the transition was checked.
    fn set_status(&mut self, status: Self::Status);
}

pub fn check_transition<S: Status>(from: S, to: S) -> Result<()> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(HostelError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

/// Reject empty or whitespace-only input fields
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(HostelError::InvalidInput(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

/// Display helper shared by the status enums
macro_rules! status_display {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
pub(crate) use status_display;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_parse() {
        let id = RecordId::new();
        assert_eq!(RecordId::parse(&id.to_string()).unwrap(), id);
        assert!(matches!(
            RecordId::parse("not-a-uuid"),
            Err(HostelError::NotFound(_))
        ));
    }

    #[test]
    fn test_require_rejects_blank() {
        assert!(require("title", "Movie night").is_ok());
        assert!(matches!(
            require("title", "   "),
            Err(HostelError::InvalidInput(_))
        ));
    }
}
