use crate::{errors::ClientError, http::HttpDoer};
use serde::{Deserialize, Serialize};
use std::{env::var, fmt, sync::Arc, time::Duration};
use url::Url;

pub const CARDANO_MAINNET_URL: &str = "https://cardano-mainnet.blockfrost.io/api/v0";
pub const CARDANO_PREPROD_URL: &str = "https://cardano-preprod.blockfrost.io/api/v0";
pub const CARDANO_PREVIEW_URL: &str = "https://cardano-preview.blockfrost.io/api/v0";
pub const CARDANO_TESTNET_URL: &str = "https://cardano-testnet.blockfrost.io/api/v0";
pub const IPFS_URL: &str = "https://ipfs.blockfrost.io/api/v0";

pub const PROJECT_ID_ENV: &str = "BLOCKFROST_PROJECT_ID";
pub const IPFS_PROJECT_ID_ENV: &str = "BLOCKFROST_IPFS_PROJECT_ID";

pub const DEFAULT_ROUTINES: usize = 10;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const USER_AGENT: &str = concat!("blockfrost-client/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Preprod,
    Preview,
    Testnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Preprod => "preprod",
            Self::Preview => "preview",
            Self::Testnet => "testnet",
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Mainnet => CARDANO_MAINNET_URL,
            Self::Preprod => CARDANO_PREPROD_URL,
            Self::Preview => CARDANO_PREVIEW_URL,
            Self::Testnet => CARDANO_TESTNET_URL,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction-time options for [`crate::BlockfrostClient`] and
/// [`crate::BlockfrostIpfs`].
#[derive(Clone)]
pub struct ClientOptions {
    /// Sent as the `project_id` header. Falls back to the environment when
    /// unset or empty.
    pub project_id: Option<String>,
    /// Base URL of the API, e.g. [`CARDANO_PREVIEW_URL`].
    pub server: Option<String>,
    /// Replaces the default `reqwest::Client`. Must be safe to share
    /// between tasks.
    pub http_doer: Option<Arc<dyn HttpDoer>>,
    /// Number of workers spawned by every fan-out walk.
    pub routines: usize,
    /// Per-request timeout of the default HTTP executor.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            project_id: None,
            server: None,
            http_doer: None,
            routines: DEFAULT_ROUTINES,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("project_id", &self.project_id.as_ref().map(|_| "<redacted>"))
            .field("server", &self.server)
            .field("http_doer", &self.http_doer.as_ref().map(|_| "<custom>"))
            .field("routines", &self.routines)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn network(self, network: Network) -> Self {
        self.server(network.base_url())
    }

    pub fn http_doer(mut self, http_doer: Arc<dyn HttpDoer>) -> Self {
        self.http_doer = Some(http_doer);
        self
    }

    pub fn routines(mut self, routines: usize) -> Self {
        self.routines = routines;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Options after defaults and the environment have been applied.
#[derive(Clone)]
pub(crate) struct ResolvedOptions {
    pub base_url: Url,
    pub project_id: String,
    pub http_doer: Option<Arc<dyn HttpDoer>>,
    pub routines: usize,
    pub timeout: Duration,
}

impl ClientOptions {
    pub(crate) fn resolve(
        self,
        default_server: &str,
        project_id_env: &str,
    ) -> Result<ResolvedOptions, ClientError> {
        let project_id = match self.project_id.filter(|id| !id.is_empty()) {
            Some(project_id) => project_id,
            None => var(project_id_env).unwrap_or_default(),
        };

        let server = self.server.unwrap_or_else(|| default_server.to_string());
        let base_url = parse_base_url(&server)?;

        if self.routines == 0 {
            return Err(ClientError::Config(
                "routines must be at least 1".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(ResolvedOptions {
            base_url,
            project_id,
            http_doer: self.http_doer,
            routines: self.routines,
            timeout: self.timeout,
        })
    }
}

/// `Url::join` drops the last segment unless the base ends with a slash,
/// which would turn `.../api/v0` + `blocks` into `.../api/blocks`.
fn parse_base_url(server: &str) -> Result<Url, ClientError> {
    let mut base_url = Url::parse(server)?;

    if base_url.cannot_be_a_base() {
        return Err(ClientError::Config(format!(
            "server URL cannot be used as a base: {server}"
        )));
    }

    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }

    Ok(base_url)
}
