use hostel_core::{
    records::{NewRoom, NewRoomRequest, RecordId, Room, RoomRequest, RoomUpdate},
    Action, RequestContext, Result,
};

use super::HostelService;

impl HostelService {
    pub async fn create_room(&self, ctx: &RequestContext, room: NewRoom) -> Result<Room> {
        self.authorize(ctx, Action::CreateRoom, false)?;
        self.repos.rooms.create(room).await
    }

    /// All rooms for admins, the caller's own room for students
    pub async fn list_rooms(&self, ctx: &RequestContext) -> Result<Vec<Room>> {
        match self.list_scope(ctx, Action::ViewAllRooms, Action::ViewOwnRoom)? {
            None => self.repos.rooms.list().await,
            Some(user_id) => Ok(self
                .repos
                .rooms
                .find_by_occupant(user_id)
                .await?
                .into_iter()
                .collect()),
        }
    }

    pub async fn get_room(&self, ctx: &RequestContext, number: &str) -> Result<Room> {
        let found = self.repos.rooms.get(number).await;
        self.authorize_view(ctx, Action::ViewAllRooms, Action::ViewOwnRoom, found, |room| {
            room.is_occupied_by(&ctx.user_id)
        })
    }

    pub async fn update_room(
        &self,
        ctx: &RequestContext,
        number: &str,
        update: RoomUpdate,
    ) -> Result<Room> {
        self.authorize(ctx, Action::UpdateRoom, false)?;
        self.repos.rooms.update_details(number, update).await
    }

    pub async fn assign_room(
        &self,
        ctx: &RequestContext,
        number: &str,
        user_id: &str,
    ) -> Result<Room> {
        self.authorize(ctx, Action::AssignRoom, false)?;
        self.repos.rooms.assign(number, user_id).await
    }

    pub async fn unassign_room(
        &self,
        ctx: &RequestContext,
        number: &str,
        user_id: &str,
    ) -> Result<Room> {
        self.authorize(ctx, Action::UnassignRoom, false)?;
        self.repos.rooms.unassign(number, user_id).await
    }

    pub async fn delete_room(&self, ctx: &RequestContext, number: &str) -> Result<()> {
        self.authorize(ctx, Action::DeleteRoom, false)?;
        self.repos.rooms.delete(number).await
    }

    pub async fn request_room(
        &self,
        ctx: &RequestContext,
        request: NewRoomRequest,
    ) -> Result<RoomRequest> {
        self.authorize(ctx, Action::RequestRoom, false)?;
        self.repos.room_requests.create(&ctx.user_id, request).await
    }

    pub async fn list_room_requests(&self, ctx: &RequestContext) -> Result<Vec<RoomRequest>> {
        let scope = self.list_scope(
            ctx,
            Action::ViewAllRoomRequests,
            Action::ViewOwnRoomRequests,
        )?;
        self.repos.room_requests.list(scope).await
    }

    pub async fn approve_room_request(
        &self,
        ctx: &RequestContext,
        id: RecordId,
        room_number: Option<&str>,
    ) -> Result<RoomRequest> {
        self.authorize(ctx, Action::ApproveRoomRequest, false)?;
        self.repos.room_requests.approve(id, room_number).await
    }

    pub async fn deny_room_request(&self, ctx: &RequestContext, id: RecordId) -> Result<RoomRequest> {
        self.authorize(ctx, Action::DenyRoomRequest, false)?;
        self.repos.room_requests.deny(id).await
    }

    pub async fn delete_room_request(&self, ctx: &RequestContext, id: RecordId) -> Result<()> {
        self.authorize(ctx, Action::DeleteRoomRequest, false)?;
        self.repos.room_requests.delete(id).await
    }
}
