use hostel_core::{
    policy,
    records::{NewUser, User, UserProfile},
    Action, RequestContext, Result,
};

use super::HostelService;

impl HostelService {
    /// Open registration; the single-admin rule is enforced by the credential store
    pub async fn register(&self, new_user: NewUser) -> Result<UserProfile> {
        Ok(self.credentials.register(new_user).await?.profile())
    }

    pub async fn login(&self, identifier: &str, password: &str) -> Result<User> {
        self.credentials.authenticate(identifier, password).await
    }

    pub async fn profile(&self, ctx: &RequestContext) -> Result<UserProfile> {
        self.authorize(ctx, Action::ViewProfile, true)?;
        Ok(self.credentials.get(&ctx.user_id).await?.profile())
    }

    pub fn allowed_actions(&self, ctx: &RequestContext) -> Vec<Action> {
        policy::allowed_actions(ctx.role)
    }

    pub async fn list_users(&self, ctx: &RequestContext) -> Result<Vec<UserProfile>> {
        self.authorize(ctx, Action::ListUsers, false)?;
        Ok(self
            .credentials
            .list()
            .await?
            .iter()
            .map(User::profile)
            .collect())
    }
}
