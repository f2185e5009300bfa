use crate::config::{
    ClientOptions, ResolvedOptions, CARDANO_MAINNET_URL, IPFS_PROJECT_ID_ENV, IPFS_URL,
    PROJECT_ID_ENV,
};
use crate::errors::ClientError;
use crate::fanout::PageStream;
use crate::json_client::JsonClient;
use crate::pagination::Pagination;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

/// Client for the Blockfrost Cardano API.
///
/// Cheap to clone and safe to share between tasks: it holds no mutable state
/// once built.
#[derive(Clone)]
pub struct BlockfrostClient {
    pub(crate) client: JsonClient,
    routines: usize,
}

impl BlockfrostClient {
    /// Builds a client from `options`. Without an explicit `server` the
    /// mainnet URL is used; without a `project_id` the value of
    /// `BLOCKFROST_PROJECT_ID` is read once, here.
    pub fn new(options: ClientOptions) -> Result<Self, ClientError> {
        let resolved = options.resolve(CARDANO_MAINNET_URL, PROJECT_ID_ENV)?;

        Self::from_resolved(&resolved)
    }

    /// Mainnet client authenticated with `project_id`.
    pub fn with_project_id(project_id: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientOptions::new().project_id(project_id))
    }

    fn from_resolved(resolved: &ResolvedOptions) -> Result<Self, ClientError> {
        if resolved.project_id.is_empty() {
            debug!("Blockfrost client built without a project id");
        }

        Ok(Self {
            client: JsonClient::new(resolved)?,
            routines: resolved.routines,
        })
    }

    pub fn base_url(&self) -> &Url {
        self.client.base_url()
    }

    /// Number of workers used by the `*_all` methods.
    pub fn routines(&self) -> usize {
        self.routines
    }

    pub(crate) fn all<T>(&self, path: &[&str], cancel: CancellationToken) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let path = path.iter().map(|segment| segment.to_string()).collect();

        self.client.fan_out(self.routines, path, Pagination::default(), cancel)
    }

    /// Fan-out walk of any listing endpoint, keeping the `order`, `from` and
    /// `to` of `base`. Its `count` and `page` are replaced for every page.
    ///
    /// Each `/`-separated component of `path` is encoded as one segment.
    /// Like every `*_all` method this spawns onto the current Tokio runtime
    /// and panics when called outside of one.
    pub fn list_all<T>(
        &self,
        path: &str,
        base: Pagination,
        cancel: CancellationToken,
    ) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let path = path
            .trim_matches('/')
            .split('/')
            .map(str::to_string)
            .collect();

        self.client.fan_out(self.routines, path, base, cancel)
    }
}

/// Client for the Blockfrost IPFS API.
#[derive(Clone)]
pub struct BlockfrostIpfs {
    pub(crate) client: JsonClient,
    routines: usize,
}

impl BlockfrostIpfs {
    /// Like [`BlockfrostClient::new`], but defaults to the IPFS URL and
    /// falls back to `BLOCKFROST_IPFS_PROJECT_ID`.
    pub fn new(options: ClientOptions) -> Result<Self, ClientError> {
        let resolved = options.resolve(IPFS_URL, IPFS_PROJECT_ID_ENV)?;

        Ok(Self {
            client: JsonClient::new(&resolved)?,
            routines: resolved.routines,
        })
    }

    pub fn with_project_id(project_id: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientOptions::new().project_id(project_id))
    }

    pub fn base_url(&self) -> &Url {
        self.client.base_url()
    }

    pub fn routines(&self) -> usize {
        self.routines
    }

    pub(crate) fn all<T>(&self, path: &[&str], cancel: CancellationToken) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let path = path.iter().map(|segment| segment.to_string()).collect();

        self.client.fan_out(self.routines, path, Pagination::default(), cancel)
    }
}
