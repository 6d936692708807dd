use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::modules::search::domain::entities::User;
use crate::shared::errors::AppResult;

/// Port (interface) for account lookup
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `Ok(None)` when no account has this id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
}
