//! Auth service.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::auth::{AuthServiceError, NewUser, SessionStore, User, UserStore};

/// Auth service over a [`UserStore`], with the signed-in user kept in a [`SessionStore`].
#[derive(Debug)]
pub struct InMemoryAuthService {
    users: UserStore,
    session: SessionStore,
    current: RwLock<Option<User>>,
    latency: Duration,
}

impl InMemoryAuthService {
    /// Build the service, restoring any saved session.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing session file cannot be read.
    pub fn new(
        users: UserStore,
        session: SessionStore,
        latency: Duration,
    ) -> Result<Self, AuthServiceError> {
        let current = session.load()?;

        if let Some(user) = &current {
            debug!(email = %user.email, "session restored");
        }

        Ok(Self {
            users,
            session,
            current: RwLock::new(current),
            latency,
        })
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn sign_in(&self, user: User) -> Result<(), AuthServiceError> {
        self.session.save(&user)?;

        info!(email = %user.email, "signed in");

        *self.current.write() = Some(user);

        Ok(())
    }
}

#[async_trait]
impl AuthService for InMemoryAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<bool, AuthServiceError> {
        self.simulate_latency().await;

        let Some(user) = self.users.verify(email, password) else {
            debug!(%email, "login rejected");

            return Ok(false);
        };

        self.sign_in(user)?;

        Ok(true)
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<bool, AuthServiceError> {
        self.simulate_latency().await;

        let Some(user) = self.users.insert(NewUser {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        }) else {
            debug!(%email, "registration rejected, email taken");

            return Ok(false);
        };

        self.sign_in(user)?;

        Ok(true)
    }

    async fn logout(&self) -> Result<(), AuthServiceError> {
        self.session.clear()?;

        *self.current.write() = None;

        Ok(())
    }

    fn current_user(&self) -> Option<User> {
        self.current.read().clone()
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Sign in. Returns `false` for unknown email or wrong password.
    async fn login(&self, email: &str, password: &str) -> Result<bool, AuthServiceError>;

    /// Create an account and sign in. Returns `false` when the email is taken.
    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<bool, AuthServiceError>;

    /// Sign out and forget the saved session.
    async fn logout(&self) -> Result<(), AuthServiceError>;

    /// The signed-in user, if any.
    fn current_user(&self) -> Option<User>;
}
