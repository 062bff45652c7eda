pub mod auth;
pub mod events;
pub mod feedback;
pub mod fees;
pub mod health;
pub mod maintenance;
pub mod room_requests;
pub mod rooms;
pub mod users;
pub mod visitors;

use hostel_core::records::RecordId;

use crate::api::error::AppError;

/// Malformed ids cannot name a stored record, so they are reported as not found
pub(crate) fn parse_id(id: &str) -> Result<RecordId, AppError> {
    Ok(RecordId::parse(id)?)
}
