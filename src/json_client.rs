use crate::config::{ResolvedOptions, USER_AGENT};
use crate::errors::{ApiError, BlockfrostError, ClientError};
use crate::fanout::{self, PageStream};
use crate::http::{default_doer, HttpDoer};
use crate::pagination::{ApplyPagination, Pagination};

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER};
use reqwest::{multipart::Form, Client, Method, Request, Response, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

pub const PROJECT_ID_HEADER: &str = "project_id";
pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_CBOR: &str = "application/cbor";

/// Authenticated JSON transport shared by every resource method.
#[derive(Clone)]
pub struct JsonClient {
    base_url: Url,
    headers: HeaderMap,
    // Only used to assemble requests (multipart bodies need a builder); the
    // request itself always goes through `doer`.
    builder: Client,
    doer: Arc<dyn HttpDoer>,
}

impl JsonClient {
    pub(crate) fn new(options: &ResolvedOptions) -> Result<Self, ClientError> {
        let builder = default_doer(options.timeout)?;
        let doer: Arc<dyn HttpDoer> = match &options.http_doer {
            Some(doer) => doer.clone(),
            None => Arc::new(builder.clone()),
        };

        let mut project_id = HeaderValue::from_str(&options.project_id)?;
        project_id.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(PROJECT_ID_HEADER, project_id);
        headers.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));

        Ok(Self {
            base_url: options.base_url.clone(),
            headers,
            builder,
            doer,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/<segment>/...[?<query>]`. Every segment is percent-encoded on
    /// its own, so a parameter can never add path components, start a query
    /// or leave the `/api/v0` prefix.
    pub fn url(
        &self,
        segments: &[&str],
        pagination: Option<&Pagination>,
    ) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();

        if !segments.is_empty() {
            let base = &self.base_url;
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::Config(format!("{base} cannot be a base")))?;
            path.pop_if_empty();

            for segment in segments {
                // `url` drops these silently instead of encoding them.
                if segment.is_empty() || *segment == "." || *segment == ".." {
                    return Err(ClientError::InvalidPath((*segment).to_string()));
                }
                path.push(segment);
            }
        }

        if let Some(pag) = pagination {
            url.apply_pagination(pag);
        }

        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        url: Url,
        content_type: Option<&'static str>,
    ) -> reqwest::RequestBuilder {
        let builder = self
            .builder
            .request(method, url)
            .headers(self.headers.clone());

        match content_type {
            Some(content_type) => builder.header(CONTENT_TYPE, content_type),
            None => builder,
        }
    }

    /// Dispatches `request` and turns any non-2xx status into an [`ApiError`].
    async fn send(&self, request: Request) -> Result<Response, ClientError> {
        let method = request.method().clone();
        let url = request.url().clone();

        debug!(%method, url = %url, "Blockfrost request");

        let response = self.doer.perform(request).await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(url = %url, status = %status, error = %e, "failed to read error body");
                String::new()
            },
        };

        let body = serde_json::from_str::<BlockfrostError>(&body_text).unwrap_or_else(|e| {
            warn!(
                url = %url,
                status = %status,
                response_body = %body_text,
                error = %e,
                "error body is not a Blockfrost error"
            );
            BlockfrostError::default()
        });

        debug!(url = %url, status = %status, error = %body.error, "Blockfrost request failed");

        Err(ApiError::from_status(status.as_u16(), body).into())
    }

    async fn decode<T>(response: Response) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = response.url().clone();
        let status = response.status();
        let body_text = response.text().await?;

        let body: T = serde_json::from_str(&body_text).map_err(|e| {
            error!(
                url = %url,
                status = %status,
                response_body = %body_text,
                error = %e,
                "JsonClient failed to parse response"
            );
            e
        })?;

        Ok(body)
    }

    pub async fn get<T>(
        &self,
        path: &[&str],
        pagination: Option<&Pagination>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path, pagination)?;
        let request = self
            .request(Method::GET, url, Some(APPLICATION_JSON))
            .build()?;

        let response = self.send(request).await?;

        Self::decode(response).await
    }

    /// GET that returns the raw body instead of decoding it.
    pub async fn get_bytes(&self, path: &[&str]) -> Result<Vec<u8>, ClientError> {
        let url = self.url(path, None)?;
        let request = self
            .request(Method::GET, url, Some(APPLICATION_JSON))
            .build()?;

        let response = self.send(request).await?;

        Ok(response.bytes().await?.to_vec())
    }

    /// POST without a body, e.g. pinning an IPFS object.
    pub async fn post<T>(&self, path: &[&str]) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path, None)?;
        let request = self
            .request(Method::POST, url, Some(APPLICATION_JSON))
            .build()?;

        let response = self.send(request).await?;

        Self::decode(response).await
    }

    pub async fn post_cbor<T>(&self, path: &[&str], cbor: Vec<u8>) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path, None)?;
        let request = self
            .request(Method::POST, url, Some(APPLICATION_CBOR))
            .body(cbor)
            .build()?;

        let response = self.send(request).await?;

        Self::decode(response).await
    }

    /// `multipart/form-data` POST; reqwest sets the content type together
    /// with the boundary.
    pub async fn post_multipart<T>(&self, path: &[&str], form: Form) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path, None)?;
        let request = self.request(Method::POST, url, None).multipart(form).build()?;

        let response = self.send(request).await?;

        Self::decode(response).await
    }

    /// Walks every page of the listing at `path` with `routines` workers.
    pub fn fan_out<T>(
        &self,
        routines: usize,
        path: Vec<String>,
        base: Pagination,
        cancel: CancellationToken,
    ) -> PageStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();

        fanout::spawn(routines, cancel, move |page| {
            let client = client.clone();
            let path = path.clone();
            let pagination = base.for_page(page);

            async move {
                let segments: Vec<&str> = path.iter().map(String::as_str).collect();

                client.get::<Vec<T>>(&segments, Some(&pagination)).await
            }
        })
    }
}
