use crate::client::BlockfrostClient;
use crate::types::{ApiResult, DerivedAddress};

impl BlockfrostClient {
    /// Shelley address derived from an extended public key.
    pub async fn derive_address(
        &self,
        xpub: &str,
        role: u32,
        index: u32,
    ) -> ApiResult<DerivedAddress> {
        let role = role.to_string();
        let index = index.to_string();
        let path = ["utils", "addresses", "xpub", xpub, role.as_str(), index.as_str()];

        self.client.get(&path, None).await
    }
}
