use chrono::Utc;
use tracing::{info, instrument, warn};

use super::{find_user, Collection};
use crate::error::{HostelError, Result};
use crate::policy::Role;
use crate::records::{
    check_transition, require, NewRoom, NewRoomRequest, RecordId, RequestStatus, Room,
    RoomRequest, RoomStatus, RoomUpdate, Status, User,
};
use crate::store::{Filter, SharedStore};

fn pending_for_room(number: &str) -> Filter {
    Filter::all()
        .eq("roomNumber", number)
        .eq("status", RequestStatus::Pending.as_str())
}

/// Recompute and persist the derived status of a room
async fn refresh_status(
    rooms: &Collection<Room>,
    requests: &Collection<RoomRequest>,
    room: &mut Room,
) -> Result<()> {
    let has_pending = requests
        .find_one(&pending_for_room(&room.number))
        .await?
        .is_some();
    let status = RoomStatus::derive(room.occupants.len(), room.capacity, has_pending);
    if status != room.status {
        room.status = status;
        rooms.save(room).await?;
    }
    Ok(())
}

async fn room_by_number(rooms: &Collection<Room>, number: &str) -> Result<Room> {
    rooms
        .find_one(&Filter::all().eq("number", number))
        .await?
        .ok_or_else(|| HostelError::NotFound(format!("room {number}")))
}

async fn room_of_occupant(rooms: &Collection<Room>, user_id: &str) -> Result<Option<Room>> {
    rooms
        .find_one(&Filter::all().contains("occupants", user_id))
        .await
}

#[derive(Debug, Clone)]
pub struct RoomRepository {
    rooms: Collection<Room>,
    requests: Collection<RoomRequest>,
    users: Collection<User>,
}

impl RoomRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            rooms: Collection::new(store.clone()),
            requests: Collection::new(store.clone()),
            users: Collection::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, new_room: NewRoom) -> Result<Room> {
        require("number", &new_room.number)?;
        let capacity = new_room
            .capacity
            .unwrap_or_else(|| new_room.room_type.default_capacity());
        if capacity == 0 {
            return Err(HostelError::InvalidInput(
                "capacity must be at least 1".into(),
            ));
        }

        let room = Room {
            id: RecordId::new(),
            number: new_room.number.trim().to_string(),
            room_type: new_room.room_type,
            hostel_block: new_room.hostel_block.trim().to_string(),
            capacity,
            occupants: Vec::new(),
            status: RoomStatus::Vacant,
            created_at: Utc::now(),
        };
        self.rooms.create(&room).await?;
        Ok(room)
    }

    pub async fn get(&self, number: &str) -> Result<Room> {
        room_by_number(&self.rooms, number).await
    }

    /// All rooms ordered by room number
    pub async fn list(&self) -> Result<Vec<Room>> {
        let mut rooms = self.rooms.list(&Filter::all()).await?;
        rooms.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(rooms)
    }

    /// The room a student currently lives in, if any
    pub async fn find_by_occupant(&self, user_id: &str) -> Result<Option<Room>> {
        room_of_occupant(&self.rooms, user_id).await
    }

    #[instrument(skip(self))]
    pub async fn update_details(&self, number: &str, update: RoomUpdate) -> Result<Room> {
        let mut room = self.get(number).await?;
        let old_number = room.number.clone();

        if let Some(new_number) = update.number {
            require("number", &new_number)?;
            room.number = new_number.trim().to_string();
        }
        if let Some(block) = update.hostel_block {
            room.hostel_block = block.trim().to_string();
        }
        if let Some(room_type) = update.room_type {
            room.room_type = room_type;
            if update.capacity.is_none() {
                room.capacity = room_type.default_capacity();
            }
        }
        if let Some(capacity) = update.capacity {
            room.capacity = capacity;
        }
        if room.capacity == 0 {
            return Err(HostelError::InvalidInput(
                "capacity must be at least 1".into(),
            ));
        }
        if room.occupants.len() > room.capacity as usize {
            return Err(HostelError::Conflict(format!(
                "room {} has {} occupants, more than capacity {}",
                number,
                room.occupants.len(),
                room.capacity
            )));
        }

        // The unique index on the number rejects a clash with another room
        self.rooms.save(&room).await?;
        if room.number != old_number {
            self.move_pending_requests(&old_number, &room.number).await?;
        }
        refresh_status(&self.rooms, &self.requests, &mut room).await?;
        Ok(room)
    }

    /// Pending requests follow a renamed room; decided ones keep the old number
    async fn move_pending_requests(&self, from: &str, to: &str) -> Result<()> {
        for mut request in self.requests.list(&pending_for_room(from)).await? {
            request.room_number = to.to_string();
            self.requests.save(&request).await?;
        }
        info!("Room {} renamed to {}", from, to);
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn assign(&self, number: &str, user_id: &str) -> Result<Room> {
        let mut room = self.get(number).await?;
        let user = find_user(&self.users, user_id).await?;
        if user.role != Role::Student {
            return Err(HostelError::InvalidInput(format!(
                "{user_id} is not a student"
            )));
        }
        if let Some(current) = self.find_by_occupant(user_id).await? {
            return Err(HostelError::Conflict(format!(
                "{user_id} already lives in room {}",
                current.number
            )));
        }
        if !room.has_space() {
            return Err(HostelError::Conflict(format!("room {number} is full")));
        }

        room.occupants.push(user.user_id);
        self.rooms.save(&room).await?;
        refresh_status(&self.rooms, &self.requests, &mut room).await?;
        info!("Assigned {} to room {}", user_id, number);
        Ok(room)
    }

    #[instrument(skip(self))]
    pub async fn unassign(&self, number: &str, user_id: &str) -> Result<Room> {
        let mut room = self.get(number).await?;
        if !room.is_occupied_by(user_id) {
            return Err(HostelError::NotFound(format!(
                "{user_id} in room {number}"
            )));
        }
        room.occupants.retain(|o| o != user_id);
        self.rooms.save(&room).await?;
        refresh_status(&self.rooms, &self.requests, &mut room).await?;
        info!("Removed {} from room {}", user_id, number);
        Ok(room)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, number: &str) -> Result<()> {
        let room = self.get(number).await?;
        if !room.occupants.is_empty() {
            warn!("Refusing to delete occupied room {}", number);
            return Err(HostelError::Conflict(format!("room {number} is occupied")));
        }
        self.rooms.delete(room.id).await
    }
}

#[derive(Debug, Clone)]
pub struct RoomRequestRepository {
    rooms: Collection<Room>,
    requests: Collection<RoomRequest>,
}

impl RoomRequestRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            rooms: Collection::new(store.clone()),
            requests: Collection::new(store),
        }
    }

    #[instrument(skip(self))]
    pub async fn create(&self, student_id: &str, request: NewRoomRequest) -> Result<RoomRequest> {
        require("roomNumber", &request.room_number)?;
        let mut room = room_by_number(&self.rooms, request.room_number.trim()).await?;

        if let Some(current) = room_of_occupant(&self.rooms, student_id).await? {
            return Err(HostelError::Conflict(format!(
                "{student_id} already lives in room {}",
                current.number
            )));
        }
        let pending = Filter::all()
            .eq("studentId", student_id)
            .eq("status", RequestStatus::Pending.as_str());
        if self.requests.find_one(&pending).await?.is_some() {
            return Err(HostelError::Conflict(format!(
                "{student_id} already has a pending room request"
            )));
        }

        let record = RoomRequest {
            id: RecordId::new(),
            student_id: student_id.to_string(),
            room_number: room.number.clone(),
            status: RequestStatus::Pending,
            assigned_room: None,
            decided_at: None,
            created_at: Utc::now(),
        };
        self.requests.create(&record).await?;
        refresh_status(&self.rooms, &self.requests, &mut room).await?;
        Ok(record)
    }

    pub async fn get(&self, id: RecordId) -> Result<RoomRequest> {
        self.requests.get(id).await
    }

    /// Requests newest first, optionally only those of one student
    pub async fn list(&self, student_id: Option<&str>) -> Result<Vec<RoomRequest>> {
        let filter = match student_id {
            Some(student_id) => Filter::all().eq("studentId", student_id),
            None => Filter::all(),
        };
        let mut requests = self.requests.list(&filter).await?;
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    /// Apply a status change, dispatching to approval or denial
    pub async fn update(&self, id: RecordId, status: RequestStatus) -> Result<RoomRequest> {
        match status {
            RequestStatus::Approved => self.approve(id, None).await,
            RequestStatus::Denied => self.deny(id).await,
            RequestStatus::Pending => {
                let request = self.get(id).await?;
                check_transition(request.status, status)?;
                Ok(request)
            }
        }
    }

    /// Approve a pending request and move the student into the room.
    ///
    /// `room_number` overrides the room that was asked for.
    #[instrument(skip(self))]
    pub async fn approve(&self, id: RecordId, room_number: Option<&str>) -> Result<RoomRequest> {
        let mut request = self.get(id).await?;
        check_transition(request.status, RequestStatus::Approved)?;

        let target = room_number.unwrap_or(&request.room_number).trim().to_string();
        let mut room = room_by_number(&self.rooms, &target).await?;

        if let Some(current) = room_of_occupant(&self.rooms, &request.student_id).await? {
            return Err(HostelError::Conflict(format!(
                "{} already lives in room {}",
                request.student_id, current.number
            )));
        }
        if !room.has_space() {
            warn!("Cannot approve request {}: room {} is full", id, target);
            return Err(HostelError::Conflict(format!("room {target} is full")));
        }

        room.occupants.push(request.student_id.clone());
        self.rooms.save(&room).await?;

        request.status = RequestStatus::Approved;
        request.assigned_room = Some(room.number.clone());
        request.decided_at = Some(Utc::now());
        self.requests.save(&request).await?;

        refresh_status(&self.rooms, &self.requests, &mut room).await?;
        if request.room_number != room.number {
            self.refresh_room(&request.room_number).await?;
        }
        info!(
            "Approved room request {} for {} into room {}",
            id, request.student_id, room.number
        );
        Ok(request)
    }

    #[instrument(skip(self))]
    pub async fn deny(&self, id: RecordId) -> Result<RoomRequest> {
        let request = self.requests.transition(id, RequestStatus::Denied).await?;
        self.refresh_room(&request.room_number).await?;
        Ok(request)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> Result<()> {
        let request = self.get(id).await?;
        self.requests.delete(id).await?;
        if request.status.can_transition_to(RequestStatus::Approved) {
            self.refresh_room(&request.room_number).await?;
        }
        Ok(())
    }

    /// Rooms may have been deleted since the request was made
    async fn refresh_room(&self, number: &str) -> Result<()> {
        match room_by_number(&self.rooms, number).await {
            Ok(mut room) => refresh_status(&self.rooms, &self.requests, &mut room).await,
            Err(HostelError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
