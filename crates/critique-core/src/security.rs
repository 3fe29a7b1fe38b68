use secrecy::SecretString;

/// Wraps the Gemini API key with secrecy protection (zeroized on drop,
/// redacted in Debug). The key lives only in process memory for the duration
/// of a session; it is never persisted.
#[derive(Clone)]
pub struct ApiKey(pub SecretString);

impl ApiKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// Read a key from the environment, preferring `GEMINI_API_KEY`.
    /// Blank values are treated as absent.
    pub fn from_env() -> Option<Self> {
        [env_vars::GEMINI_API_KEY, env_vars::GOOGLE_API_KEY]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(|v| v.trim().to_owned())
            .find(|v| !v.is_empty())
            .map(Self::new)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Environment variable names recognized for the credential.
pub mod env_vars {
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
}
