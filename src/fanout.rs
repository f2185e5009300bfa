//! Concurrent page walker behind every `*_all` method.
//!
//! A controller task hands out page numbers to a fixed set of workers. The
//! first worker that sees a short page (the tail of the listing) or an error
//! raises the `done` signal: from then on no new pages are handed out, pages
//! already being fetched still finish and are delivered, and the output
//! closes once every worker has returned.
//!
//! Cancelling the caller's token is always visible on the stream: if no
//! page in flight was cut short, the walk ends with a
//! [`ClientError::Cancelled`] for the first page it did not fetch.
//!
//! Pages arrive in completion order, not page order. Sort by
//! [`PageResult::page`] (or use [`PageStream::collect_sorted`]) when order
//! matters, or configure a single routine to walk the listing serially.

use crate::errors::ClientError;
use crate::pagination::MAX_COUNT;

use futures::{Stream, StreamExt};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// One page of a fan-out walk.
#[derive(Debug)]
pub struct PageResult<T> {
    pub page: u32,
    pub result: Result<Vec<T>, ClientError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageJob {
    page: u32,
    count: u32,
}

/// Stream of [`PageResult`]s produced by a fan-out walk.
///
/// Dropping the stream stops the walk from scheduling further pages.
///
/// The walk runs on spawned tasks, so a `PageStream` can only be created
/// from within a Tokio runtime; the `*_all` methods panic outside of one.
pub struct PageStream<T> {
    results: mpsc::Receiver<PageResult<T>>,
    done: CancellationToken,
}

impl<T> PageStream<T> {
    /// Drains the stream and returns every item in page order. The error of
    /// the lowest failing page wins.
    pub async fn collect_sorted(self) -> Result<Vec<T>, ClientError> {
        let mut pages: Vec<PageResult<T>> = self.collect().await;
        pages.sort_by_key(|page| page.page);

        let mut items = Vec::new();
        for page in pages {
            items.extend(page.result?);
        }

        Ok(items)
    }
}

impl<T> Stream for PageStream<T> {
    type Item = PageResult<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.results.poll_recv(cx)
    }
}

impl<T> Drop for PageStream<T> {
    fn drop(&mut self) {
        self.done.cancel();
    }
}

/// Starts a walk over pages `1, 2, 3, ...` using `fetch` for each page.
///
/// `routines` is clamped to at least one worker. Cancelling `cancel` aborts
/// in-flight fetches; each of them is reported as [`ClientError::Cancelled`].
/// A walk cancelled before it reached the end of the listing always closes
/// with at least one such page.
///
/// # Panics
///
/// Panics when called outside of a Tokio runtime.
pub fn spawn<T, F, Fut>(routines: usize, cancel: CancellationToken, fetch: F) -> PageStream<T>
where
    T: Send + 'static,
    F: Fn(u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ClientError>> + Send + 'static,
{
    let routines = routines.max(1);
    let done = cancel.child_token();
    let tail = Arc::new(AtomicU32::new(u32::MAX));
    let fetch = Arc::new(fetch);

    let (job_tx, job_rx) = mpsc::channel::<PageJob>(routines);
    let job_rx = Arc::new(Mutex::new(job_rx));
    let (result_tx, result_rx) = mpsc::channel::<PageResult<T>>(routines);

    let mut workers = JoinSet::new();
    for worker in 0..routines {
        workers.spawn(run_worker(
            worker,
            job_rx.clone(),
            result_tx.clone(),
            done.clone(),
            tail.clone(),
            cancel.clone(),
            fetch.clone(),
        ));
    }
    // the stream ends when the last worker and the controller drop their
    // senders
    let controller_done = done.clone();
    let controller_jobs = job_rx.clone();
    tokio::spawn(async move {
        let mut page = 1u32;

        // enqueueing
        loop {
            let job = PageJob {
                page,
                count: MAX_COUNT,
            };

            tokio::select! {
                biased;
                _ = controller_done.cancelled() => break,
                sent = job_tx.send(job) => {
                    if sent.is_err() {
                        break;
                    }
                    trace!(page, "fan-out: page enqueued");
                    match page.checked_add(1) {
                        Some(next) => page = next,
                        None => break,
                    }
                },
            }
        }

        // draining
        drop(job_tx);
        debug!(last_enqueued = page, "fan-out: draining workers");
        while workers.join_next().await.is_some() {}

        // nobody saw the end of the listing, so an unreported cancel would
        // look like a complete walk
        if cancel.is_cancelled() && tail.load(Ordering::SeqCst) == u32::MAX {
            let next = match controller_jobs.lock().await.try_recv() {
                Ok(job) => job.page,
                Err(_) => page,
            };
            debug!(page = next, "fan-out: cancelled before the end of listing");

            let envelope = PageResult {
                page: next,
                result: Err(ClientError::Cancelled),
            };
            // a closed output means the consumer is gone already
            let _ = result_tx.send(envelope).await;
        }

        debug!("fan-out: closed");
    });

    PageStream {
        results: result_rx,
        done,
    }
}

async fn run_worker<T, F, Fut>(
    worker: usize,
    jobs: Arc<Mutex<mpsc::Receiver<PageJob>>>,
    results: mpsc::Sender<PageResult<T>>,
    done: CancellationToken,
    tail: Arc<AtomicU32>,
    cancel: CancellationToken,
    fetch: Arc<F>,
) where
    T: Send + 'static,
    F: Fn(u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ClientError>> + Send + 'static,
{
    trace!(worker, "fan-out: worker started");

    loop {
        let job = {
            let mut jobs = jobs.lock().await;
            tokio::select! {
                biased;
                _ = done.cancelled() => None,
                job = jobs.recv() => job,
            }
        };

        let Some(job) = job else { break };

        // pages past the tail are skipped, pages before it are still fetched
        // even if another worker already reached the end
        if job.page > tail.load(Ordering::SeqCst) || results.is_closed() {
            continue;
        }

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ClientError::Cancelled),
            result = fetch(job.page) => result,
        };

        let is_tail = match &result {
            Ok(items) => items.len() < job.count as usize,
            Err(_) => true,
        };

        if is_tail {
            if tail.fetch_min(job.page, Ordering::SeqCst) == u32::MAX {
                debug!(
                    worker,
                    page = job.page,
                    error = result.is_err(),
                    "fan-out: end of listing"
                );
            }
            done.cancel();
        }

        // an empty page only marks the end, it is not part of the listing
        if matches!(&result, Ok(items) if items.is_empty()) {
            continue;
        }

        let envelope = PageResult {
            page: job.page,
            result,
        };

        if results.send(envelope).await.is_err() {
            // consumer went away
            done.cancel();
            break;
        }
    }

    trace!(worker, "fan-out: worker stopped");
}
