use hostel_core::{
    records::{MaintenanceTicket, NewTicket, RecordId, TicketStatus},
    Action, RequestContext, Result,
};

use super::HostelService;

impl HostelService {
    pub async fn raise_maintenance(
        &self,
        ctx: &RequestContext,
        ticket: NewTicket,
    ) -> Result<MaintenanceTicket> {
        self.authorize(ctx, Action::RaiseMaintenance, false)?;
        self.repos.maintenance.create(&ctx.user_id, ticket).await
    }

    pub async fn list_maintenance(&self, ctx: &RequestContext) -> Result<Vec<MaintenanceTicket>> {
        let scope = self.list_scope(ctx, Action::ViewAllMaintenance, Action::ViewOwnMaintenance)?;
        self.repos.maintenance.list(scope).await
    }

    pub async fn update_maintenance_status(
        &self,
        ctx: &RequestContext,
        id: RecordId,
        status: TicketStatus,
    ) -> Result<MaintenanceTicket> {
        self.authorize(ctx, Action::UpdateMaintenanceStatus, false)?;
        self.repos.maintenance.update(id, status).await
    }

    pub async fn assign_maintenance(
        &self,
        ctx: &RequestContext,
        id: RecordId,
        staff_id: &str,
    ) -> Result<MaintenanceTicket> {
        self.authorize(ctx, Action::AssignMaintenance, false)?;
        self.repos.maintenance.assign_staff(id, staff_id).await
    }

    pub async fn delete_maintenance(&self, ctx: &RequestContext, id: RecordId) -> Result<()> {
        self.authorize(ctx, Action::DeleteMaintenance, false)?;
        self.repos.maintenance.delete(id).await
    }
}
