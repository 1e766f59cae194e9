//! Backend configuration structures and builders.

use crate::credentials::SecretString;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Configuration for a single backend exchange client.
///
/// Credentials are stored as [`SecretString`] and zeroed on drop. The
/// `options` map carries backend-specific knobs (the same role as CCXT's
/// per-exchange options dictionary) without widening this struct per quirk.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend identifier (e.g. "bitmart", "kucoin").
    pub id: String,
    /// Backend display name.
    pub name: String,
    /// API key for authentication (zeroed on drop).
    pub api_key: Option<SecretString>,
    /// API secret for authentication (zeroed on drop).
    pub secret: Option<SecretString>,
    /// Passphrase/memo required by some backends (zeroed on drop).
    pub passphrase: Option<SecretString>,
    /// Per-attempt request timeout.
    pub timeout: Duration,
    /// Enable sandbox/testnet mode.
    pub sandbox: bool,
    /// Backend-specific options.
    pub options: HashMap<String, Value>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            api_key: None,
            secret: None,
            passphrase: None,
            timeout: Duration::from_secs(30),
            sandbox: false,
            options: HashMap::new(),
        }
    }
}

impl BackendConfig {
    /// Creates a new configuration builder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unifex::config::BackendConfig;
    ///
    /// let config = BackendConfig::builder()
    ///     .id("bitmart")
    ///     .name("BitMart")
    ///     .api_key("key")
    ///     .secret("secret")
    ///     .passphrase("memo")
    ///     .build();
    /// assert_eq!(config.id, "bitmart");
    /// ```
    pub fn builder() -> BackendConfigBuilder {
        BackendConfigBuilder::default()
    }

    /// Loads credentials from the environment using the conventional
    /// per-backend variable names: `<PREFIX>_API_KEY`, `<PREFIX>_API_SECRET`
    /// and `<PREFIX>_API_PASSPHRASE`.
    ///
    /// Missing variables leave the corresponding credential unset; callers
    /// that require authentication get an `Authentication` error from the
    /// backend client, not from here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unifex::config::BackendConfig;
    ///
    /// let config = BackendConfig::from_env("bitmart", "BITMART");
    /// assert_eq!(config.id, "bitmart");
    /// ```
    #[must_use]
    pub fn from_env(id: &str, prefix: &str) -> Self {
        let var = |suffix: &str| std::env::var(format!("{prefix}_{suffix}")).ok();
        Self {
            id: id.to_string(),
            name: id.to_string(),
            api_key: var("API_KEY").map(SecretString::new),
            secret: var("API_SECRET").map(SecretString::new),
            passphrase: var("API_PASSPHRASE").map(SecretString::new),
            ..Self::default()
        }
    }

    /// Returns `true` if both an API key and secret are configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() && self.secret.is_some()
    }
}

/// Builder for [`BackendConfig`].
///
/// # Example
///
/// ```rust
/// use unifex::config::BackendConfigBuilder;
/// use std::time::Duration;
///
/// let config = BackendConfigBuilder::new()
///     .id("kucoin")
///     .name("KuCoin")
///     .timeout(Duration::from_secs(60))
///     .sandbox(true)
///     .build();
/// assert!(config.sandbox);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BackendConfigBuilder {
    config: BackendConfig,
}

impl BackendConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.config.id = id.into();
        self
    }

    /// Sets the backend display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(key));
        self
    }

    /// Sets the API secret.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.config.secret = Some(SecretString::new(secret));
        self
    }

    /// Sets the passphrase/memo required by some backends.
    pub fn passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.config.passphrase = Some(SecretString::new(passphrase));
        self
    }

    /// Sets the per-attempt request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Enables or disables sandbox/testnet mode.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.config.sandbox = sandbox;
        self
    }

    /// Sets a backend-specific option.
    pub fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.config.options.insert(key.into(), value);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> BackendConfig {
        self.config
    }
}
