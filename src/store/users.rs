//! User store, keyed by id with a unique email.

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::models::User;

#[derive(Default)]
pub struct UserStore {
    users: RwLock<IndexMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user unless the email is already registered.
    ///
    /// The uniqueness check and the insert happen under one write lock.
    /// Returns `false` when the email is taken.
    pub async fn insert_unique_email(&self, user: User) -> bool {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return false;
        }
        users.insert(user.id.clone(), user);
        true
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(id: &str, email: &str) -> User {
        let now = Utc::now();
        User {
            id: id.to_string(),
            username: "writer".to_string(),
            email: email.to_string(),
            password: "hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_email_is_unique() {
        let store = UserStore::new();
        assert!(store.insert_unique_email(user("1", "a@example.com")).await);
        assert!(!store.insert_unique_email(user("2", "a@example.com")).await);
        assert!(store.find_by_id("2").await.is_none());
        assert_eq!(
            store.find_by_email("a@example.com").await.unwrap().id,
            "1"
        );
    }
}
