use crate::errors::ClientError;
use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use std::time::Duration;

/// The single capability the transport needs: send a prepared request and
/// hand back whatever the server answered.
///
/// Implementations are shared between every caller of a client and every
/// fan-out worker, so they have to be thread-safe.
#[async_trait]
pub trait HttpDoer: Send + Sync + 'static {
    async fn perform(&self, request: Request) -> Result<Response, ClientError>;
}

#[async_trait]
impl HttpDoer for Client {
    async fn perform(&self, request: Request) -> Result<Response, ClientError> {
        Ok(Client::execute(self, request).await?)
    }
}

pub(crate) fn default_doer(timeout: Duration) -> Result<Client, ClientError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ClientError::Config(format!("failed to build client: {e}")))
}
