use hostel_core::{
    records::{Feedback, NewFeedback},
    Action, RequestContext, Result,
};

use super::HostelService;

impl HostelService {
    pub async fn submit_feedback(
        &self,
        ctx: &RequestContext,
        feedback: NewFeedback,
    ) -> Result<Feedback> {
        self.authorize(ctx, Action::SubmitFeedback, false)?;
        self.repos.feedback.create(&ctx.user_id, feedback).await
    }

    pub async fn list_feedback(&self, ctx: &RequestContext) -> Result<Vec<Feedback>> {
        let scope = self.list_scope(ctx, Action::ViewAllFeedback, Action::ViewOwnFeedback)?;
        self.repos.feedback.list(scope).await
    }
}
