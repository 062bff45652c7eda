use hostel_core::{
    records::{Event, EventUpdate, NewEvent, RecordId},
    Action, RequestContext, Result,
};

use super::HostelService;

impl HostelService {
    pub async fn list_events(&self, ctx: &RequestContext) -> Result<Vec<Event>> {
        self.authorize(ctx, Action::ViewEvents, false)?;
        self.repos.events.list().await
    }

    pub async fn create_event(&self, ctx: &RequestContext, event: NewEvent) -> Result<Event> {
        self.authorize(ctx, Action::CreateEvent, false)?;
        self.repos.events.create(event).await
    }

    pub async fn update_event(
        &self,
        ctx: &RequestContext,
        id: RecordId,
        update: EventUpdate,
    ) -> Result<Event> {
        self.authorize(ctx, Action::UpdateEvent, false)?;
        self.repos.events.update(id, update).await
    }

    pub async fn delete_event(&self, ctx: &RequestContext, id: RecordId) -> Result<()> {
        self.authorize(ctx, Action::DeleteEvent, false)?;
        self.repos.events.delete(id).await
    }
}
