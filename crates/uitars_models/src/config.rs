//! HTTP client configuration.

use derive_getters::Getters;
use std::time::Duration;

/// Request timeout ceiling.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings used to build the underlying HTTP client.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use uitars_models::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(*config.timeout(), Duration::from_secs(60));
/// assert!(!config.reuse_connections());
///
/// let custom = ClientConfig::builder()
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
/// assert_eq!(*custom.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ClientConfig {
    /// Total time allowed per request, connect through body
    #[builder(default = "DEFAULT_TIMEOUT")]
    timeout: Duration,
    /// Value for the `User-Agent` header
    #[builder(default = "default_user_agent()")]
    user_agent: String,
    /// Keep idle connections for later calls instead of closing them
    #[builder(default)]
    #[getter(skip)]
    reuse_connections: bool,
}

impl ClientConfig {
    /// Returns a builder seeded with the defaults.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Whether idle connections are pooled between calls.
    pub fn reuse_connections(&self) -> bool {
        self.reuse_connections
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
            reuse_connections: false,
        }
    }
}

fn default_user_agent() -> String {
    format!("uitars/{}", env!("CARGO_PKG_VERSION"))
}
