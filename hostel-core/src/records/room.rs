use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{status_display, Record, RecordId};
use crate::error::HostelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Single,
    Double,
    Triple,
}

impl RoomType {
    pub fn default_capacity(&self) -> u32 {
        match self {
            RoomType::Single => 1,
            RoomType::Double => 2,
            RoomType::Triple => 3,
        }
    }
}

impl FromStr for RoomType {
    type Err = HostelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(RoomType::Single),
            "double" => Ok(RoomType::Double),
            "triple" => Ok(RoomType::Triple),
            other => Err(HostelError::InvalidInput(format!("unknown room type {other}"))),
        }
    }
}

/// Occupancy state of a room, recomputed whenever occupants or requests change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Vacant,
    Requested,
    Full,
}

status_display!(RoomStatus {
    Vacant => "vacant",
    Requested => "requested",
    Full => "full",
});

impl RoomStatus {
    pub fn derive(occupants: usize, capacity: u32, has_pending_request: bool) -> Self {
        if occupants >= capacity as usize {
            RoomStatus::Full
        } else if has_pending_request {
            RoomStatus::Requested
        } else {
            RoomStatus::Vacant
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RecordId,
    pub number: String,
    pub room_type: RoomType,
    pub hostel_block: String,
    pub capacity: u32,
    /// userIds of the students living in the room
    pub occupants: Vec<String>,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for Room {
    const COLLECTION: &'static str = "rooms";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Room {
    pub fn has_space(&self) -> bool {
        self.occupants.len() < self.capacity as usize
    }

    pub fn is_occupied_by(&self, user_id: &str) -> bool {
        self.occupants.iter().any(|o| o == user_id)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub number: String,
    pub room_type: RoomType,
    #[serde(default)]
    pub hostel_block: String,
    /// Defaults to the capacity of the room type
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// Admin edit of a room; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    pub number: Option<String>,
    pub room_type: Option<RoomType>,
    pub hostel_block: Option<String>,
    pub capacity: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_derivation() {
        assert_eq!(RoomStatus::derive(0, 2, false), RoomStatus::Vacant);
        assert_eq!(RoomStatus::derive(1, 2, true), RoomStatus::Requested);
        assert_eq!(RoomStatus::derive(2, 2, true), RoomStatus::Full);
        assert_eq!(RoomStatus::derive(0, 0, false), RoomStatus::Full);
    }

    #[test]
    fn test_room_type_parse() {
        assert_eq!("Double".parse::<RoomType>().unwrap(), RoomType::Double);
        assert_eq!(RoomType::Triple.default_capacity(), 3);
        assert!("suite".parse::<RoomType>().is_err());
    }
}
