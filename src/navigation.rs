// File: src/navigation.rs
//! Turning a tapped record into "open the viewer" or "tell the user no".
use crate::model::SyllabusRecord;

pub const UNAVAILABLE_NOTICE: &str = "PDF URL is unavailable.";

/// Renderer-side collaborator. The crate decides *what* happens on screen;
/// implementors decide *how*.
pub trait Presenter {
    fn open_pdf(&self, url: &str);
    fn show_notice(&self, message: &str);
    fn start_entrance_animation(&self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfTarget {
    Open(String),
    Unavailable,
}

/// Plain concatenation, no validation. An empty path yields `base` alone.
pub fn build_pdf_url(base: &str, relative_path: &str) -> String {
    format!("{}{}", base, relative_path)
}

pub fn resolve_pdf_target(record: &SyllabusRecord, base: &str) -> PdfTarget {
    if record.has_pdf() {
        PdfTarget::Open(build_pdf_url(base, &record.pdf_url))
    } else {
        PdfTarget::Unavailable
    }
}

pub fn open_record<P: Presenter + ?Sized>(
    record: &SyllabusRecord,
    base: &str,
    presenter: &P,
) -> PdfTarget {
    let target = resolve_pdf_target(record, base);
    match &target {
        PdfTarget::Open(url) => {
            log::debug!("Opening PDF viewer with url: {}", url);
            presenter.open_pdf(url);
        }
        PdfTarget::Unavailable => {
            log::debug!("PDF URL is empty; cannot open PDF");
            presenter.show_notice(UNAVAILABLE_NOTICE);
        }
    }
    target
}
