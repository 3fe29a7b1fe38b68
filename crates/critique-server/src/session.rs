use dashmap::DashMap;
use secrecy::ExposeSecret;

use critique_core::{ApiKey, SessionId};

/// Per-session configuration: the one durable piece of user state. Created
/// empty (or seeded from the environment), mutated on every credential
/// edit, never persisted beyond process memory.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    credential: Option<ApiKey>,
}

impl SessionConfig {
    pub fn has_credential(&self) -> bool {
        self.credential
            .as_ref()
            .is_some_and(|key| !key.0.expose_secret().trim().is_empty())
    }

    pub fn credential(&self) -> Option<&ApiKey> {
        self.credential.as_ref().filter(|_| self.has_credential())
    }
}

/// In-memory session store. Each user session is independent; the map is
/// concurrent so parallel requests never contend on a lock.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<SessionId, SessionConfig>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session. `GEMINI_API_KEY`/`GOOGLE_API_KEY`, when set, seed
    /// the initial credential; the UI field still overrides it.
    pub fn create(&self) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(
            id.clone(),
            SessionConfig {
                credential: ApiKey::from_env(),
            },
        );
        id
    }

    /// Replace the session's credential. An empty or blank value clears it.
    /// Returns whether a credential is now present, or None for an unknown
    /// session.
    pub fn set_credential(&self, id: &SessionId, raw: &str) -> Option<bool> {
        let mut session = self.sessions.get_mut(id)?;
        let trimmed = raw.trim();
        session.credential = if trimmed.is_empty() {
            None
        } else {
            Some(ApiKey::new(trimmed))
        };
        Some(session.has_credential())
    }

    /// Look up a session's config. None for an unknown session.
    pub fn get(&self, id: &SessionId) -> Option<SessionConfig> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
