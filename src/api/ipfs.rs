use crate::client::BlockfrostIpfs;
use crate::errors::ClientError;
use crate::fanout::PageStream;
use crate::pagination::Pagination;
use crate::types::{ApiResult, IpfsAdded, IpfsPinChange, IpfsPinnedObject};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use tokio_util::sync::CancellationToken;

impl BlockfrostIpfs {
    /// Uploads `content` as a single `file` part named `file_name`.
    pub async fn add(
        &self,
        content: Vec<u8>,
        file_name: impl Into<String>,
    ) -> ApiResult<IpfsAdded> {
        let part = Part::bytes(content).file_name(file_name.into());
        let form = Form::new().part("file", part);

        self.client.post_multipart(&["ipfs", "add"], form).await
    }

    /// Reads `path` and uploads it under its own file name.
    pub async fn add_file(&self, path: impl AsRef<Path>) -> ApiResult<IpfsAdded> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| ClientError::Config(format!("{} is not a file", path.display())))?;

        let content = tokio::fs::read(path).await?;

        self.add(content, file_name).await
    }

    /// Raw bytes of the object behind `ipfs_path`.
    pub async fn gateway(&self, ipfs_path: &str) -> ApiResult<Vec<u8>> {
        let path = ipfs_segments(&["ipfs", "gateway"], ipfs_path);

        self.client.get_bytes(&path).await
    }

    pub async fn pin(&self, ipfs_path: &str) -> ApiResult<IpfsPinChange> {
        let path = ipfs_segments(&["ipfs", "pin", "add"], ipfs_path);

        self.client.post(&path).await
    }

    pub async fn pinned_objects(
        &self,
        pagination: &Pagination,
    ) -> ApiResult<Vec<IpfsPinnedObject>> {
        self.client.get(&["ipfs", "pin", "list"], Some(pagination)).await
    }

    pub fn pinned_objects_all(&self, cancel: CancellationToken) -> PageStream<IpfsPinnedObject> {
        self.all(&["ipfs", "pin", "list"], cancel)
    }

    pub async fn pinned_object(&self, ipfs_path: &str) -> ApiResult<IpfsPinnedObject> {
        let path = ipfs_segments(&["ipfs", "pin", "list"], ipfs_path);

        self.client.get(&path, None).await
    }

    pub async fn remove(&self, ipfs_path: &str) -> ApiResult<IpfsPinChange> {
        let path = ipfs_segments(&["ipfs", "pin", "remove"], ipfs_path);

        self.client.post(&path).await
    }
}

/// An IPFS path such as `<cid>/dir/file` keeps its `/` separators, each
/// component is encoded as its own segment.
fn ipfs_segments<'a>(prefix: &[&'a str], ipfs_path: &'a str) -> Vec<&'a str> {
    prefix
        .iter()
        .copied()
        .chain(ipfs_path.trim_matches('/').split('/'))
        .collect()
}
