use hostel_core::{
    records::{Fee, NewFee, RecordId},
    Action, RequestContext, Result,
};

use super::HostelService;

impl HostelService {
    pub async fn create_fee(&self, ctx: &RequestContext, fee: NewFee) -> Result<Fee> {
        self.authorize(ctx, Action::CreateFee, false)?;
        self.repos.fees.create(fee).await
    }

    pub async fn list_fees(&self, ctx: &RequestContext) -> Result<Vec<Fee>> {
        let scope = self.list_scope(ctx, Action::ViewAllFees, Action::ViewOwnFee)?;
        self.repos.fees.list(scope).await
    }

    pub async fn get_fee(&self, ctx: &RequestContext, id: RecordId) -> Result<Fee> {
        let found = self.repos.fees.get(id).await;
        self.authorize_view(ctx, Action::ViewAllFees, Action::ViewOwnFee, found, |fee| {
            ctx.is_owner_of(&fee.student_id)
        })
    }

    pub async fn mark_fee_paid(&self, ctx: &RequestContext, id: RecordId) -> Result<Fee> {
        self.authorize(ctx, Action::MarkFeePaid, false)?;
        self.repos.fees.mark_paid(id).await
    }

    pub async fn delete_fee(&self, ctx: &RequestContext, id: RecordId) -> Result<()> {
        self.authorize(ctx, Action::DeleteFee, false)?;
        self.repos.fees.delete(id).await
    }
}
