use crate::error::Result;
use crate::session::Session;
use async_trait::async_trait;
use showcase_discovery::ProjectRecord;

/// Where project records come from.
///
/// Implementations own transport concerns, cancellation included; callers
/// only see complete results or an error.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Full snapshot of every project.
    async fn fetch_all(&self) -> Result<Vec<ProjectRecord>>;

    /// `Ok(None)` when the backend has no project with this id.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<ProjectRecord>>;

    async fn fetch_by_creator(&self, creator_id: &str) -> Result<Vec<ProjectRecord>>;

    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Projects created by the signed-in user.
    async fn fetch_for_session(&self, session: &Session) -> Result<Vec<ProjectRecord>> {
        self.fetch_by_creator(&session.user_id).await
    }
}
