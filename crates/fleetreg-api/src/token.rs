// Session token persistence.
//
// One bearer token plus a role marker, stored as JSON under a fixed file in
// the platform data directory so a session survives process restarts.
// Loads are tolerant: a missing or corrupt file reads as "anonymous".

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Error;

/// An authenticated session as persisted on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token, attached to every request while held.
    pub token: String,
    /// Role marker captured at login (e.g. `officer`, `dvla_officer`).
    pub role: String,
}

/// Durable storage for the one session the client owns.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Open the store at the platform-conventional data path.
    pub fn open_default() -> Result<Self, Error> {
        let dirs = ProjectDirs::from("uk", "fleetreg", "fleetreg")
            .ok_or_else(|| Error::SessionStore("no home directory available".into()))?;
        Ok(Self {
            path: dirs.data_dir().join("session.json"),
        })
    }

    /// Open the store at an explicit path. Used by tests and by callers
    /// that manage their own state directory.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read the persisted session, if one exists and parses.
    pub fn load(&self) -> Option<Session> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding unreadable session file");
                None
            }
        }
    }

    /// Persist a session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::SessionStore(format!("creating {}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| Error::SessionStore(format!("serializing session: {e}")))?;
        std::fs::write(&self.path, json)
            .map_err(|e| Error::SessionStore(format!("writing {}: {e}", self.path.display())))?;
        debug!(path = %self.path.display(), "session persisted");
        Ok(())
    }

    /// Remove the persisted session. Removing an absent file is not an error.
    pub fn clear(&self) -> Result<(), Error> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::SessionStore(format!(
                "removing {}: {e}",
                self.path.display()
            ))),
        }
    }
}
