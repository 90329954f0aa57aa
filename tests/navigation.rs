use pil_syllabus::config::DEFAULT_PDF_BASE_URL;
use pil_syllabus::model::SyllabusRecord;
use pil_syllabus::navigation::{
    PdfTarget, Presenter, UNAVAILABLE_NOTICE, build_pdf_url, open_record, resolve_pdf_target,
};
use std::cell::RefCell;

#[derive(Default)]
struct Recorder {
    opened: RefCell<Vec<String>>,
    notices: RefCell<Vec<String>>,
}

impl Presenter for Recorder {
    fn open_pdf(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
    fn show_notice(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

#[test]
fn test_build_pdf_url_concatenates() {
    assert_eq!(
        build_pdf_url(DEFAULT_PDF_BASE_URL, "uploads/math.pdf"),
        "https://api-pil.site/uploads/math.pdf"
    );
    // No normalisation of slashes.
    assert_eq!(
        build_pdf_url("https://api-pil.site/", "/x.pdf"),
        "https://api-pil.site//x.pdf"
    );
}

#[test]
fn test_empty_path_yields_bare_base() {
    assert_eq!(build_pdf_url(DEFAULT_PDF_BASE_URL, ""), DEFAULT_PDF_BASE_URL);
}

#[test]
fn test_record_without_pdf_shows_notice() {
    let record = SyllabusRecord::new(Some("Math"), "2024-01-01T10:00:00Z", "").unwrap();
    let presenter = Recorder::default();

    let target = open_record(&record, DEFAULT_PDF_BASE_URL, &presenter);

    assert_eq!(target, PdfTarget::Unavailable);
    assert!(presenter.opened.borrow().is_empty());
    assert_eq!(*presenter.notices.borrow(), vec![UNAVAILABLE_NOTICE.to_string()]);
    assert_eq!(UNAVAILABLE_NOTICE, "PDF URL is unavailable.");
}

#[test]
fn test_record_with_pdf_opens_viewer() {
    let record =
        SyllabusRecord::new(Some("Math"), "2024-01-01T10:00:00Z", "uploads/math.pdf").unwrap();
    let presenter = Recorder::default();

    let target = open_record(&record, DEFAULT_PDF_BASE_URL, &presenter);

    let url = "https://api-pil.site/uploads/math.pdf".to_string();
    assert_eq!(target, PdfTarget::Open(url.clone()));
    assert_eq!(*presenter.opened.borrow(), vec![url]);
    assert!(presenter.notices.borrow().is_empty());
}

#[test]
fn test_resolve_uses_given_base() {
    let record = SyllabusRecord::new(None, "2024-01-01T10:00:00Z", "a.pdf").unwrap();
    assert_eq!(
        resolve_pdf_target(&record, "http://localhost:8080/"),
        PdfTarget::Open("http://localhost:8080/a.pdf".to_string())
    );
}
