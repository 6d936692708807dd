use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::search::domain::{User, UserRepository};
use crate::shared::errors::AppResult;

/// Account store keyed by id
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<DashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::default();
        for user in users {
            repo.insert(user);
        }
        repo
    }

    pub fn insert(&self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }
}
