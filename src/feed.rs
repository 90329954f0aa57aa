// File: src/feed.rs
//! Feed state and its fetch lifecycle.
//!
//! `SyllabusFeed` owns one `FeedState` and publishes every change through a
//! `tokio::sync::watch` channel. Renderers subscribe; they never mutate.
//! Lifecycle per screen activation: `Idle -> Loading -> Ready | Failed`,
//! with no way back out of a terminal phase.
use crate::error::FetchError;
use crate::model::SyllabusRecord;
use std::future::Future;
use tokio::sync::watch;

/// Anything that can produce the sorted record list.
pub trait SyllabusSource {
    fn fetch_syllabus(
        &self,
    ) -> impl Future<Output = Result<Vec<SyllabusRecord>, FetchError>> + Send;
}

impl<T: SyllabusSource + Sync> SyllabusSource for &T {
    fn fetch_syllabus(
        &self,
    ) -> impl Future<Output = Result<Vec<SyllabusRecord>, FetchError>> + Send {
        (**self).fetch_syllabus()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(FetchError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    pub phase: FeedPhase,
    /// Newest first. Replaced only by a successful fetch.
    pub all: Vec<SyllabusRecord>,
    /// Subsequence of `all` matching `query`, same order.
    pub filtered: Vec<SyllabusRecord>,
    pub query: String,
}

impl FeedState {
    /// The text a renderer shows for a failed fetch.
    pub fn error_message(&self) -> Option<String> {
        match &self.phase {
            FeedPhase::Failed(e) => Some(format!("Error: {}", e)),
            _ => None,
        }
    }

    /// Ready, but nothing to show ("No syllabus available.").
    pub fn is_empty_view(&self) -> bool {
        self.phase == FeedPhase::Ready && self.filtered.is_empty()
    }
}

/// Keeps the records whose class name contains `query`, ignoring case.
/// Records without a class name only match the empty query.
pub fn apply_filter(all: &[SyllabusRecord], query: &str) -> Vec<SyllabusRecord> {
    if query.is_empty() {
        return all.to_vec();
    }
    let needle = query.to_lowercase();
    all.iter()
        .filter(|r| r.matches_class(&needle))
        .cloned()
        .collect()
}

#[derive(Debug)]
pub struct SyllabusFeed {
    tx: watch::Sender<FeedState>,
}

impl Default for SyllabusFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl SyllabusFeed {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(FeedState::default());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.tx.subscribe()
    }

    /// Borrow the current state. Do not hold the guard across an await.
    pub fn state(&self) -> watch::Ref<'_, FeedState> {
        self.tx.borrow()
    }

    pub fn snapshot(&self) -> FeedState {
        self.tx.borrow().clone()
    }

    pub fn phase(&self) -> FeedPhase {
        self.tx.borrow().phase.clone()
    }

    /// Runs the one fetch of this feed's lifetime.
    ///
    /// Returns `false` without touching the network unless the feed is
    /// still `Idle`.
    pub async fn fetch<S: SyllabusSource>(&self, source: &S) -> bool {
        let mut started = false;
        self.tx.send_if_modified(|s| {
            if s.phase != FeedPhase::Idle {
                return false;
            }
            s.phase = FeedPhase::Loading;
            started = true;
            true
        });
        if !started {
            log::debug!("Feed already fetched; ignoring re-activation");
            return false;
        }

        let result = source.fetch_syllabus().await;
        self.tx.send_modify(|s| match result {
            Ok(records) => {
                s.filtered = apply_filter(&records, &s.query);
                s.all = records;
                s.phase = FeedPhase::Ready;
            }
            Err(e) => {
                log::warn!("Syllabus fetch failed: {}", e);
                s.all.clear();
                s.filtered.clear();
                s.phase = FeedPhase::Failed(e);
            }
        });
        true
    }

    /// Stores the search text and re-derives `filtered`. Never fetches.
    pub fn set_query(&self, query: &str) {
        self.tx.send_modify(|s| {
            s.query = query.to_string();
            s.filtered = apply_filter(&s.all, query);
        });
    }
}
