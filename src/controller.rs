// File: src/controller.rs
//! Screen lifecycle glue for the syllabus list.
//! All front ends (CLI, mobile) drive the feed through this controller so
//! activation, search and taps behave the same everywhere.
use crate::feed::{FeedPhase, FeedState, SyllabusFeed, SyllabusSource};
use crate::navigation::{PdfTarget, Presenter, open_record};
use tokio::sync::watch;

pub struct SyllabusController<S, P> {
    feed: SyllabusFeed,
    source: S,
    presenter: P,
    pdf_base_url: String,
}

impl<S, P> SyllabusController<S, P>
where
    S: SyllabusSource,
    P: Presenter,
{
    pub fn new(source: S, presenter: P, pdf_base_url: impl Into<String>) -> Self {
        Self {
            feed: SyllabusFeed::new(),
            source,
            presenter,
            pdf_base_url: pdf_base_url.into(),
        }
    }

    /// Entrance animation, then the single fetch.
    /// A second activation of the same controller is a no-op.
    pub async fn activate(&self) -> bool {
        if self.feed.phase() == FeedPhase::Idle {
            self.presenter.start_entrance_animation();
        }
        self.feed.fetch(&self.source).await
    }

    pub fn search(&self, text: &str) {
        self.feed.set_query(text);
    }

    /// `None` when `index` is outside the filtered list.
    pub fn tap(&self, index: usize) -> Option<PdfTarget> {
        let record = self.feed.state().filtered.get(index).cloned()?;
        Some(open_record(&record, &self.pdf_base_url, &self.presenter))
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.feed.subscribe()
    }

    pub fn feed(&self) -> &SyllabusFeed {
        &self.feed
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Tears the screen down. Dropping the feed closes every subscriber.
    pub fn deactivate(self) {
        log::debug!("Deactivating syllabus screen");
    }
}
