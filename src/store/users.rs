use std::sync::{Mutex, MutexGuard};

use crate::error::AppError;
use crate::models::User;

/// In-memory credential store.
///
/// Usernames and emails are unique across the table; ids are assigned by an
/// incrementing counter that starts above any seeded record. Users are never
/// updated or deleted.
pub struct UserStore {
    inner: Mutex<Table>,
}

struct Table {
    users: Vec<User>,
    next_id: i32,
}

impl UserStore {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Builds a store pre-populated with `users`. The id counter starts one
    /// past the highest seeded id.
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Table { users, next_id }),
        }
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.inner.lock().expect("user table mutex poisoned")
    }

    /// Looks a user up by username or email, whichever matches.
    pub fn find_by_username_or_email(&self, identifier: &str) -> Option<User> {
        self.table()
            .users
            .iter()
            .find(|u| u.username == identifier || u.email == identifier)
            .cloned()
    }

    pub fn find_by_id(&self, id: i32) -> Option<User> {
        self.table().users.iter().find(|u| u.id == id).cloned()
    }

    /// Appends a new user. Fails with `DuplicateIdentity` when the username
    /// or the email is already taken; the check and the insert share one
    /// lock acquisition.
    pub fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let mut table = self.table();
        if table
            .users
            .iter()
            .any(|u| u.username == username || u.email == email)
        {
            return Err(AppError::DuplicateIdentity(
                "Username or email already exists".into(),
            ));
        }

        let user = User {
            id: table.next_id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        table.next_id += 1;
        table.users.push(user.clone());
        Ok(user)
    }

    pub fn all(&self) -> Vec<User> {
        self.table().users.clone()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_user(id: i32, username: &str, email: &str) -> User {
        User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[test]
    fn test_create_assigns_monotonic_ids() {
        let store = UserStore::new();
        let a = store.create("alice", "alice@x.com", "h1").unwrap();
        let b = store.create("bob", "bob@x.com", "h2").unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_ids_start_above_seeded_records() {
        let store = UserStore::with_users(vec![
            seeded_user(1, "admin", "admin@example.com"),
            seeded_user(2, "demo", "demo@example.com"),
        ]);
        let user = store.create("carol", "carol@x.com", "h").unwrap();
        assert_eq!(user.id, 3);
    }

    #[test]
    fn test_duplicate_username_or_email_rejected() {
        let store = UserStore::new();
        store.create("alice", "alice@x.com", "h").unwrap();

        // Either colliding field is enough.
        let by_username = store.create("alice", "other@x.com", "h");
        assert!(matches!(by_username, Err(AppError::DuplicateIdentity(_))));

        let by_email = store.create("other", "alice@x.com", "h");
        assert!(matches!(by_email, Err(AppError::DuplicateIdentity(_))));
    }

    #[test]
    fn test_find_by_username_or_email() {
        let store = UserStore::new();
        store.create("alice", "alice@x.com", "h").unwrap();

        assert!(store.find_by_username_or_email("alice").is_some());
        assert!(store.find_by_username_or_email("alice@x.com").is_some());
        assert!(store.find_by_username_or_email("nobody").is_none());
    }

    #[test]
    fn test_find_by_id() {
        let store = UserStore::new();
        let user = store.create("alice", "alice@x.com", "h").unwrap();
        assert_eq!(store.find_by_id(user.id).unwrap().username, "alice");
        assert!(store.find_by_id(999).is_none());
    }
}
