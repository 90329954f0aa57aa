// File: ./src/model/display.rs
use crate::model::item::{CLASS_FALLBACK, SyllabusRecord};

const MISSING: &str = "N/A";

pub trait RecordDisplay {
    fn display_class(&self) -> &str;
    fn upload_date(&self) -> &str;
    fn upload_time(&self) -> &str;
    fn to_list_line(&self, index: usize) -> String;
}

impl RecordDisplay for SyllabusRecord {
    fn display_class(&self) -> &str {
        self.class_name.as_deref().unwrap_or(CLASS_FALLBACK)
    }

    fn upload_date(&self) -> &str {
        match self.created_at_raw.split('T').next() {
            Some(d) if !d.is_empty() => d,
            _ => MISSING,
        }
    }

    // "2024-01-01T10:00:00.000Z" -> "10:00:00"
    fn upload_time(&self) -> &str {
        match self.created_at_raw.split_once('T') {
            Some((_, rest)) => rest.split('.').next().unwrap_or(MISSING),
            None => MISSING,
        }
    }

    fn to_list_line(&self, index: usize) -> String {
        let marker = if self.has_pdf() { "" } else { " (no PDF)" };
        format!(
            "{:>3}  {}  {}  {}{}",
            index,
            self.upload_date(),
            self.upload_time(),
            self.display_class(),
            marker
        )
    }
}
