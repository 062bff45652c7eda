//! Gated operations
//!
//! Every operation takes the caller's [`RequestContext`], asks the access
//! policy, and only then touches a repository. The service holds no
//! per-request state.

mod events;
mod feedback;
mod fees;
mod maintenance;
mod rooms;
mod users;
mod visitors;

#[cfg(test)]
mod tests;

use hostel_core::{
    store::SharedStore, Action, CredentialStore, HostelError, Repositories, RequestContext,
    Result,
};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct HostelService {
    repos: Repositories,
    credentials: CredentialStore,
}

impl HostelService {
    pub async fn open(store: SharedStore, bcrypt_cost: u32) -> Result<Self> {
        Ok(Self {
            credentials: CredentialStore::open(store.clone(), bcrypt_cost).await?,
            repos: Repositories::open(store).await?,
        })
    }

    fn authorize(&self, ctx: &RequestContext, action: Action, is_owner: bool) -> Result<()> {
        if ctx.can(action, is_owner) {
            Ok(())
        } else {
            warn!(
                "Access denied: {} ({}) cannot {}",
                ctx.user_id, ctx.role, action
            );
            Err(HostelError::Unauthorized(action))
        }
    }

    /// Decide which records a list call may return.
    ///
    /// `None` means every record; `Some(user_id)` restricts the list to the
    /// caller's own records.
    fn list_scope<'a>(
        &self,
        ctx: &'a RequestContext,
        view_all: Action,
        view_own: Action,
    ) -> Result<Option<&'a str>> {
        if ctx.can(view_all, false) {
            return Ok(None);
        }
        self.authorize(ctx, view_own, true)?;
        Ok(Some(ctx.user_id.as_str()))
    }

    /// Gate a single-record read.
    ///
    /// Callers with `view_all` see the lookup result as is. Everyone else
    /// gets `Unauthorized` for a record that is missing and for one they do
    /// not own alike, so existence is never revealed.
    fn authorize_view<R>(
        &self,
        ctx: &RequestContext,
        view_all: Action,
        view_own: Action,
        found: Result<R>,
        is_owner: impl Fn(&R) -> bool,
    ) -> Result<R> {
        if ctx.can(view_all, false) {
            return found;
        }
        let found = match found {
            Ok(record) => Some(record),
            Err(HostelError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };
        self.authorize(ctx, view_own, found.as_ref().is_some_and(&is_owner))?;
        found.ok_or(HostelError::Unauthorized(view_own))
    }
}
