use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    time::Duration,
};

use anyhow::Context as _;

use crate::{
    foundation::core::Generation,
    foundation::error::StoryResult,
    geo::geojson::Geography,
    geo::source::{GeographySource, load_geography},
};

/// Shared flag telling a background fetch its result is no longer wanted.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// `true` once [`CancelToken::cancel`] was called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Result of one geography fetch, tagged with the generation that requested it.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Scene generation current when the fetch was started.
    pub generation: Generation,
    /// Decoded geography or the load failure.
    pub result: StoryResult<Geography>,
}

/// State of a pending fetch as seen by the host.
#[derive(Debug)]
pub enum FetchPoll {
    /// The worker delivered a result.
    Ready(FetchOutcome),
    /// Still running.
    Pending,
    /// The worker went away without delivering (cancelled or panicked).
    Lost,
}

/// Host-side end of a background geography fetch.
#[derive(Debug)]
pub struct FetchHandle {
    generation: Generation,
    cancel: CancelToken,
    rx: mpsc::Receiver<FetchOutcome>,
}

impl FetchHandle {
    /// Generation the fetch was started for.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Ask the worker to drop its result.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Non-blocking check for a result.
    pub fn poll(&self) -> FetchPoll {
        match self.rx.try_recv() {
            Ok(outcome) => FetchPoll::Ready(outcome),
            Err(mpsc::TryRecvError::Empty) => FetchPoll::Pending,
            Err(mpsc::TryRecvError::Disconnected) => FetchPoll::Lost,
        }
    }

    /// Block for at most `timeout` waiting for a result.
    pub fn wait(&self, timeout: Duration) -> FetchPoll {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => FetchPoll::Ready(outcome),
            Err(mpsc::RecvTimeoutError::Timeout) => FetchPoll::Pending,
            Err(mpsc::RecvTimeoutError::Disconnected) => FetchPoll::Lost,
        }
    }
}

/// Start loading geography on a background thread.
///
/// The worker checks the cancel token before and after loading and sends nothing once
/// cancelled. A dropped handle also discards the result.
pub fn spawn_fetch(
    source: Arc<dyn GeographySource>,
    generation: Generation,
) -> StoryResult<FetchHandle> {
    let (tx, rx) = mpsc::channel();
    let cancel = CancelToken::default();
    let token = cancel.clone();

    std::thread::Builder::new()
        .name(format!("geography-fetch-{}", generation.0))
        .spawn(move || {
            if token.is_cancelled() {
                return;
            }
            let result = load_geography(source.as_ref());
            if token.is_cancelled() {
                tracing::debug!(generation = generation.0, "fetch cancelled; dropping result");
                return;
            }
            // The receiver is gone when the session moved on; nothing to do.
            let _ = tx.send(FetchOutcome { generation, result });
        })
        .context("spawn geography fetch thread")?;

    Ok(FetchHandle {
        generation,
        cancel,
        rx,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geo/fetch.rs"]
mod tests;
