//! Session file.
//!
//! The signed-in user is kept as JSON in a single file so that it survives
//! between CLI invocations.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::auth::{SessionError, User};

/// File name of the session inside the session directory.
pub const SESSION_FILE: &str = "salesdesk-user.json";

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore the saved user.
    ///
    /// A file that does not decode is removed and treated as no session.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or removed.
    pub fn load(&self) -> Result<Option<User>, SessionError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(user) => Ok(Some(user)),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "dropping unreadable session");

                self.clear()?;

                Ok(None)
            }
        }
    }

    /// Persist `user` as the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, user: &User) -> Result<(), SessionError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        fs::write(&self.path, serde_json::to_string(user)?)?;

        Ok(())
    }

    /// Remove the session file, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists and cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Err(error) if error.kind() != io::ErrorKind::NotFound => Err(error.into()),
            _ => Ok(()),
        }
    }
}
