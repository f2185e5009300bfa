use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use blockfrost_client::{BlockfrostClient, BlockfrostIpfs, ClientOptions};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

pub const PROJECT_ID: &str = "previewMockProjectId";

/// A request as the mock server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub raw_query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn page(&self) -> u32 {
        self.query
            .get("page")
            .and_then(|page| page.parse().ok())
            .unwrap_or(1)
    }

    pub fn count(&self) -> u32 {
        self.query
            .get("count")
            .and_then(|count| count.parse().ok())
            .unwrap_or(100)
    }
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync>;

struct MockState {
    requests: Mutex<Vec<RecordedRequest>>,
    responder: Responder,
    delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

/// Blockfrost look-alike on a random local port. Every request is recorded
/// and answered by the responder it was started with.
pub struct MockBlockfrost {
    pub url: String,
    state: Arc<MockState>,
}

impl MockBlockfrost {
    pub async fn start<F>(delay: Duration, responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (StatusCode, String) + Send + Sync + 'static,
    {
        let state = Arc::new(MockState {
            requests: Mutex::new(Vec::new()),
            responder: Arc::new(responder),
            delay,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        });

        let mock_app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let url = format!("http://{addr}/api/v0");

        tokio::spawn(async move {
            axum::serve(listener, mock_app).await.unwrap();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        Self { url, state }
    }

    /// Answers every request with `status` and `body`.
    pub async fn respond(status: StatusCode, body: &str) -> Self {
        let body = body.to_string();

        Self::start(Duration::ZERO, move |_| (status, body.clone())).await
    }

    /// A listing of `items` strings (`"item-1"`, `"item-2"`, ...) honouring
    /// `count` and `page`.
    pub async fn listing(items: u32, delay: Duration) -> Self {
        Self::start(delay, move |request| {
            (StatusCode::OK, listing_page(items, request.page(), request.count()))
        })
        .await
    }

    pub fn client(&self, routines: usize) -> BlockfrostClient {
        BlockfrostClient::new(self.options(routines)).unwrap()
    }

    pub fn ipfs(&self) -> BlockfrostIpfs {
        BlockfrostIpfs::new(self.options(1)).unwrap()
    }

    pub fn options(&self, routines: usize) -> ClientOptions {
        ClientOptions::new()
            .project_id(PROJECT_ID)
            .server(&self.url)
            .routines(routines)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request reached the mock")
    }

    /// Highest number of requests that were being served at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.state.peak.load(Ordering::SeqCst)
    }
}

pub fn listing_page(items: u32, page: u32, count: u32) -> String {
    let first = (page - 1) * count + 1;
    let last = (page * count).min(items);
    let page: Vec<String> = (first..=last).map(|n| format!("item-{n}")).collect();

    serde_json::to_string(&page).unwrap()
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let query = uri
        .query()
        .map(|query| url::form_urlencoded::parse(query.as_bytes()).into_owned().collect())
        .unwrap_or_default();

    let request = RecordedRequest {
        method,
        path: uri.path().to_string(),
        query,
        raw_query: uri.query().map(str::to_string),
        headers,
        body,
    };

    state.requests.lock().unwrap().push(request.clone());

    let now = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.peak.fetch_max(now, Ordering::SeqCst);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    let (status, body) = (state.responder)(&request);
    state.in_flight.fetch_sub(1, Ordering::SeqCst);

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
