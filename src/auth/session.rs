use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{watch, RwLock};
use uuid::Uuid;

use crate::auth::provider::AuthenticatedUser;

/// Whether sessions survive a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersistenceMode {
    #[default]
    Durable,
    SessionOnly,
}

impl PersistenceMode {
    /// The login form's "remember me" checkbox maps directly to a mode.
    pub fn from_remember_me(remember_me: bool) -> Self {
        if remember_me {
            PersistenceMode::Durable
        } else {
            PersistenceMode::SessionOnly
        }
    }
}

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Name to greet the user with; falls back to the email address.
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Debug, Default)]
struct SessionState {
    sessions: HashMap<String, Session>,
    /// Tokens that live in the durable store. Tracked per session, not per
    /// mode: the mode can flip between sign-ins, and only these tokens may
    /// ever be written back to disk.
    durable: HashSet<String>,
    mode: PersistenceMode,
}

/// Owns session lifecycle: creation on sign-in, lookup, sign-out, the
/// durable-vs-session-only persistence switch, and a session-change feed.
///
/// Subscribers hold a `watch::Receiver` as their explicit subscription
/// handle; dropping it unsubscribes.
pub struct SessionManager {
    inner: RwLock<SessionState>,
    path: PathBuf,
    changes: watch::Sender<Option<Session>>,
}

impl SessionManager {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let (changes, _) = watch::channel(None);
        Self {
            inner: RwLock::new(SessionState::default()),
            path: path.as_ref().to_path_buf(),
            changes,
        }
    }

    /// Creates a manager and restores any durably persisted sessions.
    /// A missing or corrupt session file starts empty, non-fatally.
    pub async fn open(path: impl AsRef<Path>) -> Self {
        let manager = Self::new(path);
        let restored = manager.restore().await;
        tracing::info!(
            path = %manager.path.display(),
            restored,
            "Session store initialized"
        );
        manager
    }

    async fn restore(&self) -> usize {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return 0,
        };
        let sessions: Vec<Session> = match serde_json::from_str(&raw) {
            Ok(sessions) => sessions,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding corrupt session store");
                return 0;
            }
        };

        let mut inner = self.inner.write().await;
        for session in sessions {
            inner.durable.insert(session.token.clone());
            inner.sessions.insert(session.token.clone(), session);
        }
        inner.sessions.len()
    }

    pub async fn set_persistence_mode(&self, mode: PersistenceMode) {
        self.inner.write().await.mode = mode;
    }

    pub async fn persistence_mode(&self) -> PersistenceMode {
        self.inner.read().await.mode
    }

    /// Opens a session for an authenticated user and announces the change.
    pub async fn sign_in(&self, user: AuthenticatedUser) -> Session {
        let session = Session {
            token: Uuid::new_v4().to_string(),
            uid: user.uid,
            email: user.email,
            display_name: user.display_name,
            created_at: Utc::now(),
        };

        let persist = {
            let mut inner = self.inner.write().await;
            inner
                .sessions
                .insert(session.token.clone(), session.clone());
            if inner.mode == PersistenceMode::Durable {
                inner.durable.insert(session.token.clone())
            } else {
                false
            }
        };
        if persist {
            self.persist().await;
        }

        let _ = self.changes.send_replace(Some(session.clone()));
        session
    }

    /// Ends a session. Always acknowledges, even for an unknown token. A
    /// durably persisted token is removed from the store regardless of the
    /// current persistence mode, so a revoked session cannot come back after
    /// a restart.
    pub async fn sign_out(&self, token: &str) {
        let rewrite_store = {
            let mut inner = self.inner.write().await;
            inner.sessions.remove(token);
            inner.durable.remove(token)
        };
        if rewrite_store {
            self.persist().await;
        }

        let _ = self.changes.send_replace(None);
    }

    pub async fn session(&self, token: &str) -> Option<Session> {
        self.inner.read().await.sessions.get(token).cloned()
    }

    /// Subscription handle for session changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.changes.subscribe()
    }

    /// Rewrites the durable store. Only durably created sessions are
    /// written; session-only entries never touch the disk.
    async fn persist(&self) {
        let sessions: Vec<Session> = {
            let inner = self.inner.read().await;
            inner
                .durable
                .iter()
                .filter_map(|token| inner.sessions.get(token))
                .cloned()
                .collect()
        };

        let json = match serde_json::to_string(&sessions) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Session serialization failed");
                return;
            }
        };

        if let Err(e) = tokio::fs::write(&self.path, json).await {
            tracing::error!(error = %e, path = %self.path.display(), "Session store write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, name: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser {
            uid: "uid-1".to_string(),
            email: email.to_string(),
            display_name: name.map(str::to_string),
        }
    }

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("sessions.json")
    }

    #[tokio::test]
    async fn test_sign_in_then_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SessionManager::new(store_path(&dir));

        let session = manager.sign_in(user("a@example.com", None)).await;
        let found = manager.session(&session.token).await.unwrap();

        assert_eq!(found.email, "a@example.com");
    }

    #[tokio::test]
    async fn test_durable_sessions_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let manager = SessionManager::new(&path);
        let session = manager.sign_in(user("a@example.com", Some("Ana"))).await;

        let reopened = SessionManager::open(&path).await;
        let restored = reopened.session(&session.token).await.unwrap();
        assert_eq!(restored.display_label(), "Ana");
    }

    #[tokio::test]
    async fn test_session_only_mode_does_not_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let manager = SessionManager::new(&path);
        manager.set_persistence_mode(PersistenceMode::SessionOnly).await;
        let session = manager.sign_in(user("a@example.com", None)).await;

        // Live lookup works, but nothing was written to disk
        assert!(manager.session(&session.token).await.is_some());
        let reopened = SessionManager::open(&path).await;
        assert!(reopened.session(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_removes_session() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SessionManager::new(store_path(&dir));

        let session = manager.sign_in(user("a@example.com", None)).await;
        manager.sign_out(&session.token).await;

        assert!(manager.session(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_clears_durable_store_in_any_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let manager = SessionManager::new(&path);
        let session = manager.sign_in(user("a@example.com", None)).await;

        // A later login without remember-me flips the mode; revocation must
        // still reach the durable store.
        manager.set_persistence_mode(PersistenceMode::SessionOnly).await;
        manager.sign_out(&session.token).await;

        let reopened = SessionManager::open(&path).await;
        assert!(reopened.session(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn test_store_rewrite_excludes_session_only_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let manager = SessionManager::new(&path);
        let durable = manager.sign_in(user("a@example.com", None)).await;

        manager.set_persistence_mode(PersistenceMode::SessionOnly).await;
        let ephemeral = manager.sign_in(user("b@example.com", None)).await;
        manager.sign_out(&durable.token).await;

        let reopened = SessionManager::open(&path).await;
        assert!(reopened.session(&durable.token).await.is_none());
        assert!(reopened.session(&ephemeral.token).await.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_unknown_token_is_acknowledged() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SessionManager::new(store_path(&dir));
        manager.sign_out("no-such-token").await;
    }

    #[tokio::test]
    async fn test_subscription_sees_sign_in_and_sign_out() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SessionManager::new(store_path(&dir));
        let mut changes = manager.subscribe();

        let session = manager.sign_in(user("a@example.com", None)).await;
        changes.changed().await.unwrap();
        assert_eq!(
            changes.borrow_and_update().as_ref().map(|s| s.token.clone()),
            Some(session.token.clone())
        );

        manager.sign_out(&session.token).await;
        changes.changed().await.unwrap();
        assert!(changes.borrow_and_update().is_none());
    }

    #[tokio::test]
    async fn test_display_label_falls_back_to_email() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SessionManager::new(store_path(&dir));

        let session = manager.sign_in(user("a@example.com", None)).await;
        assert_eq!(session.display_label(), "a@example.com");
    }

    #[test]
    fn test_remember_me_selects_mode() {
        assert_eq!(
            PersistenceMode::from_remember_me(true),
            PersistenceMode::Durable
        );
        assert_eq!(
            PersistenceMode::from_remember_me(false),
            PersistenceMode::SessionOnly
        );
    }

    #[tokio::test]
    async fn test_corrupt_session_store_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        std::fs::write(&path, "{{ nope").unwrap();

        let manager = SessionManager::open(&path).await;
        assert!(manager.session("any").await.is_none());
    }
}
