//! User store.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::auth::{NewUser, User, UserUuid};

const SEED_USERS: [(&str, &str, &str); 2] = [
    ("admin@boxisleep.com", "admin123", "Administrador"),
    ("user@boxisleep.com", "user123", "Usuario Demo"),
];

#[derive(Debug)]
struct StoredUser {
    user: User,
    password: String,
}

/// Process-local user list, keyed by email. Nothing is persisted.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<FxHashMap<String, StoredUser>>,
}

impl UserStore {
    /// A store holding the two demo accounts.
    pub fn seeded() -> Self {
        let store = Self::default();

        for (email, password, name) in SEED_USERS {
            store.insert(NewUser {
                email: email.to_string(),
                password: password.to_string(),
                name: name.to_string(),
            });
        }

        store
    }

    /// The user for `email`, if the password matches.
    pub fn verify(&self, email: &str, password: &str) -> Option<User> {
        self.users
            .read()
            .get(email)
            .filter(|stored| stored.password == password)
            .map(|stored| stored.user.clone())
    }

    /// Add a user. Returns `None` when the email is already taken.
    pub fn insert(&self, new_user: NewUser) -> Option<User> {
        let mut users = self.users.write();

        if users.contains_key(&new_user.email) {
            return None;
        }

        let user = User {
            uuid: UserUuid::new(),
            email: new_user.email.clone(),
            name: new_user.name,
        };

        users.insert(
            new_user.email,
            StoredUser {
                user: user.clone(),
                password: new_user.password,
            },
        );

        Some(user)
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}
