/* pil-syllabus/src/mobile.rs
 *
 * UniFFI interface exposing the syllabus feed to mobile platforms (Android).
 * The Kotlin side renders; navigation decisions come from here.
 */

use crate::client::SyllabusClient;
use crate::config::Config;
use crate::context::StandardContext;
use crate::feed::{FeedPhase, SyllabusFeed};
use crate::model::{RecordDisplay, SyllabusRecord};
use crate::navigation::{PdfTarget, UNAVAILABLE_NOTICE, resolve_pdf_target};
use std::path::PathBuf;
use tokio::sync::Mutex;

#[derive(Debug, uniffi::Error)]
#[uniffi(flat_error)]
pub enum MobileError {
    Generic(String),
}
impl From<String> for MobileError {
    fn from(e: String) -> Self {
        Self::Generic(e)
    }
}
impl From<crate::error::FetchError> for MobileError {
    fn from(e: crate::error::FetchError) -> Self {
        Self::Generic(e.to_string())
    }
}
impl std::fmt::Display for MobileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MobileError::Generic(s) => write!(f, "{}", s),
        }
    }
}
impl std::error::Error for MobileError {}

#[derive(uniffi::Enum)]
pub enum MobileFeedPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(uniffi::Enum)]
pub enum MobilePdfTarget {
    Open { url: String },
    Unavailable { notice: String },
}

#[derive(uniffi::Record)]
pub struct MobileSyllabusRecord {
    pub class_name: String,
    pub date: String,
    pub time: String,
    pub created_at_iso: String,
    pub has_pdf: bool,
}

fn record_to_mobile(r: &SyllabusRecord) -> MobileSyllabusRecord {
    MobileSyllabusRecord {
        class_name: r.display_class().to_string(),
        date: r.upload_date().to_string(),
        time: r.upload_time().to_string(),
        created_at_iso: r.created_at.to_rfc3339(),
        has_pdf: r.has_pdf(),
    }
}

#[derive(uniffi::Object)]
pub struct SyllabusMobile {
    config: Config,
    client: Mutex<Option<SyllabusClient>>,
    feed: SyllabusFeed,
}

#[uniffi::export(async_runtime = "tokio")]
impl SyllabusMobile {
    #[uniffi::constructor]
    pub fn new(android_files_dir: String) -> Self {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("PilSyllabusRust"),
        );
        let ctx = StandardContext::new(Some(PathBuf::from(android_files_dir)));
        let config = Config::load_or_default(&ctx).unwrap_or_else(|e| {
            log::warn!("Falling back to default config: {}", e);
            Config::default()
        });
        Self {
            config,
            client: Mutex::new(None),
            feed: SyllabusFeed::new(),
        }
    }

    /// Runs the screen's single fetch. Fetch failures are reported through
    /// `phase()`/`error_message()`; only client construction errors land here.
    pub async fn activate(&self) -> Result<bool, MobileError> {
        let client = {
            let mut guard = self.client.lock().await;
            match &*guard {
                Some(c) => c.clone(),
                None => {
                    let c = SyllabusClient::new(&self.config)?;
                    *guard = Some(c.clone());
                    c
                }
            }
        };
        Ok(self.feed.fetch(&client).await)
    }

    pub fn search(&self, query: String) {
        self.feed.set_query(&query);
    }

    pub fn records(&self) -> Vec<MobileSyllabusRecord> {
        self.feed
            .state()
            .filtered
            .iter()
            .map(record_to_mobile)
            .collect()
    }

    pub fn phase(&self) -> MobileFeedPhase {
        match self.feed.phase() {
            FeedPhase::Idle => MobileFeedPhase::Idle,
            FeedPhase::Loading => MobileFeedPhase::Loading,
            FeedPhase::Ready => MobileFeedPhase::Ready,
            FeedPhase::Failed(_) => MobileFeedPhase::Failed,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.feed.state().error_message()
    }

    /// What tapping entry `index` of the filtered list should do.
    pub fn pdf_target_at(&self, index: u32) -> Option<MobilePdfTarget> {
        let state = self.feed.state();
        let record = state.filtered.get(index as usize)?;
        Some(match resolve_pdf_target(record, &self.config.pdf_base_url) {
            PdfTarget::Open(url) => MobilePdfTarget::Open { url },
            PdfTarget::Unavailable => MobilePdfTarget::Unavailable {
                notice: UNAVAILABLE_NOTICE.to_string(),
            },
        })
    }
}
