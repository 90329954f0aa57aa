// File: ./src/model/item.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;

/// Label shown when a record carries no usable class name.
pub const CLASS_FALLBACK: &str = "Not Provided";

/// One syllabus document as served by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllabusRecord {
    /// Server-side identifier. Carried through, never used for logic.
    pub id: Option<String>,
    /// Raw `class` field; `None` when absent or not a string.
    pub class_name: Option<String>,
    /// The timestamp exactly as received, kept for display.
    pub created_at_raw: String,
    pub created_at: DateTime<Utc>,
    /// Path relative to the PDF base URL. Empty means "no PDF".
    pub pdf_url: String,
}

impl SyllabusRecord {
    pub fn new(class_name: Option<&str>, created_at: &str, pdf_url: &str) -> Option<Self> {
        Some(Self {
            id: None,
            class_name: class_name.map(str::to_string),
            created_at_raw: created_at.to_string(),
            created_at: parse_timestamp(created_at)?,
            pdf_url: pdf_url.to_string(),
        })
    }

    /// Class name with the filter's fallback (empty string) applied.
    pub fn class_key(&self) -> &str {
        self.class_name.as_deref().unwrap_or("")
    }

    pub fn has_pdf(&self) -> bool {
        !self.pdf_url.is_empty()
    }

    /// Newest first. Equal timestamps compare equal so a stable sort keeps
    /// the payload order.
    pub fn compare_newest_first(&self, other: &Self) -> Ordering {
        other.created_at.cmp(&self.created_at)
    }

    /// Case-insensitive substring match on the class name.
    /// `needle` must already be lower-cased.
    pub fn matches_class(&self, needle: &str) -> bool {
        needle.is_empty() || self.class_key().to_lowercase().contains(needle)
    }
}

/// Offset-carrying layouts tried after RFC 3339. `%#z` takes `Z`, `+05`,
/// `+0530` and `+05:30`.
const ZONED_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// Parses the ISO-8601 flavours the API has been seen to emit, extended
/// and basic.
///
/// Offsets are honoured; timestamps without one are read as UTC and a bare
/// date means midnight UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt.and_utc());
        }
    }
    ["%Y-%m-%d", "%Y%m%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}
