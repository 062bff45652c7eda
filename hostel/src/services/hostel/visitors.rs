use hostel_core::{
    records::{NewVisitorRequest, RecordId, VisitStatus, VisitorRequest},
    Action, RequestContext, Result,
};

use super::HostelService;

impl HostelService {
    pub async fn register_visitor(
        &self,
        ctx: &RequestContext,
        visit: NewVisitorRequest,
    ) -> Result<VisitorRequest> {
        self.authorize(ctx, Action::RegisterVisitor, false)?;
        self.repos.visitors.create(&ctx.user_id, visit).await
    }

    pub async fn list_visitors(&self, ctx: &RequestContext) -> Result<Vec<VisitorRequest>> {
        let scope = self.list_scope(ctx, Action::ViewAllVisitors, Action::ViewOwnVisitors)?;
        self.repos.visitors.list(scope).await
    }

    pub async fn approve_visitor(
        &self,
        ctx: &RequestContext,
        id: RecordId,
    ) -> Result<VisitorRequest> {
        self.authorize(ctx, Action::ApproveVisitor, false)?;
        self.repos.visitors.update(id, VisitStatus::Approved).await
    }

    pub async fn reject_visitor(
        &self,
        ctx: &RequestContext,
        id: RecordId,
    ) -> Result<VisitorRequest> {
        self.authorize(ctx, Action::RejectVisitor, false)?;
        self.repos.visitors.update(id, VisitStatus::Rejected).await
    }

    pub async fn delete_visitor(&self, ctx: &RequestContext, id: RecordId) -> Result<()> {
        self.authorize(ctx, Action::DeleteVisitor, false)?;
        self.repos.visitors.delete(id).await
    }
}
