use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use super::user_data::User;

pub type UserHashMap = HashMap<Uuid, User>;

/// In-memory user store shared across request handlers.
///
/// Lookups by email scan the map; account counts stay small enough that a
/// second index is not worth the bookkeeping.
#[derive(Debug, Clone)]
pub struct SharedUserList {
    users: Arc<RwLock<UserHashMap>>,
}

impl Default for SharedUserList {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedUserList {
    pub fn new() -> SharedUserList {
        SharedUserList {
            users: Arc::new(RwLock::new(UserHashMap::new())),
        }
    }

    pub async fn add_user(&self, user: User) -> anyhow::Result<User> {
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    pub async fn get_user(&self, user_id: &Uuid) -> Option<User> {
        let u = self.users.read().await;
        u.get(user_id).cloned()
    }

    /// Look up a user by email, case-insensitive per RFC 5321 practice for
    /// the domain part; local parts are compared case-insensitively too
    /// since registration treats addresses as opaque identifiers.
    pub async fn get_user_by_email(&self, email: &str) -> Option<User> {
        let u = self.users.read().await;
        u.values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    pub async fn has_user_with_email(&self, email: &str) -> bool {
        self.get_user_by_email(email).await.is_some()
    }

    pub async fn len(&self) -> usize {
        let u = self.users.read().await;
        u.len()
    }

    pub async fn is_empty(&self) -> bool {
        let u = self.users.read().await;
        u.is_empty()
    }
}
