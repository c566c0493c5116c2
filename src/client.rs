//! Sketchware API client.
//!
//! Top-level entry point. Holds the shared dispatcher and the endpoint
//! groups built on it.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{paths, CollectionKind, ProjectsApi, SharedCollectionsApi, UserApi};
use crate::dispatcher::Dispatcher;
use crate::error::Result;
use crate::models::{AuthorizedUser, SharedItem};
use crate::outcome::Outcome;
use crate::transport::{ReqwestTransport, Transport};

/// Default service endpoint.
pub const DEFAULT_BASE_URL: &str = "http://sketchware.io";
const USER_AGENT: &str = concat!("sketchware-api/", env!("CARGO_PKG_VERSION"));

/// Client construction settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL endpoint paths are joined to.
    pub base_url: String,
    /// Emit `tracing` events for every request and response.
    pub logging: bool,
    /// Per-request timeout enforced by the default transport.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            logging: false,
            timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read configuration from environment variables.
    ///
    /// `SKETCHWARE_API_URL` overrides the base URL and `SKETCHWARE_API_LOG`
    /// (`1` or `true`) enables request logging. Unset variables keep their
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("SKETCHWARE_API_URL") {
            config.base_url = url;
        }
        if let Ok(flag) = env::var("SKETCHWARE_API_LOG") {
            config.logging = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true");
        }
        config
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_logging(mut self, logging: bool) -> Self {
        self.logging = logging;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Sketchware API client.
///
/// The endpoint groups are built once at construction and share a single
/// dispatcher; the client is cheaply cloneable and safe to use from
/// concurrent tasks.
///
/// # Example
///
/// ```no_run
/// use sketchware_api::{ClientConfig, CollectionKind, SketchwareClient};
///
/// # async fn example() -> sketchware_api::Result<()> {
/// let client = SketchwareClient::new(ClientConfig::default().with_logging(true))?;
///
/// let tags = client.shared().all_tags().await.into_result()?;
/// let views = client
///     .shared()
///     .search_by_tag(CollectionKind::View, 10, 0, &tags[0].text)
///     .await
///     .into_result()?;
/// println!("{} views tagged {}", views.len(), tags[0].text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SketchwareClient {
    dispatcher: Dispatcher,
    projects: ProjectsApi,
    user: UserApi,
    shared: SharedCollectionsApi,
}

impl SketchwareClient {
    /// Create a client using the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.user_agent, config.timeout)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client for the public service with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Create a client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `SKETCHWARE_API_URL` is not a valid URL.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Create a client over a caller-provided transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let dispatcher = Dispatcher::new(transport, &config.base_url, config.logging)?;
        Ok(Self {
            projects: ProjectsApi::new(dispatcher.clone()),
            user: UserApi::new(dispatcher.clone()),
            shared: SharedCollectionsApi::new(dispatcher.clone()),
            dispatcher,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &url::Url {
        self.dispatcher.base_url()
    }

    /// The dispatcher shared by every endpoint group.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn projects(&self) -> &ProjectsApi {
        &self.projects
    }

    pub fn user(&self) -> &UserApi {
        &self.user
    }

    pub fn shared(&self) -> &SharedCollectionsApi {
        &self.shared
    }

    /// Minimum app version the service still accepts.
    pub async fn min_sketchware_version(&self) -> Outcome<u32> {
        self.dispatcher.get_json(paths::MIN_VERSION).await
    }

    /// Shortcut for [`SharedCollectionsApi::recent`].
    pub async fn recent_shared(
        &self,
        kind: CollectionKind,
        items_to_load: u32,
        index: u32,
    ) -> Outcome<Vec<SharedItem>> {
        self.shared.recent(kind, items_to_load, index).await
    }

    /// Shortcut for [`UserApi::authorize`].
    pub async fn authorize_user(
        &self,
        login_id: &str,
        device_id: &str,
        access_token: &str,
        gcm_id: &str,
    ) -> Outcome<AuthorizedUser> {
        self.user
            .authorize(login_id, device_id, access_token, gcm_id)
            .await
    }
}
