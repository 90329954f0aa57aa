use pil_syllabus::config::{Config, DEFAULT_API_URL, DEFAULT_PDF_BASE_URL};
use pil_syllabus::context::{AppContext, TestContext};
use std::fs;

#[test]
fn test_missing_config_is_detected() {
    let ctx = TestContext::new();
    let err = Config::load(&ctx).unwrap_err();
    assert!(Config::is_missing_config_error(&err));

    let cfg = Config::load_or_default(&ctx).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.pdf_base_url, DEFAULT_PDF_BASE_URL);
    assert!(cfg.request_timeout_secs.is_none());
}

#[test]
fn test_save_then_load() {
    let ctx = TestContext::new();
    let cfg = Config {
        api_url: "http://localhost:9000/api/auth/syllabus".to_string(),
        request_timeout_secs: Some(15),
        ..Config::default()
    };
    cfg.save(&ctx).unwrap();

    assert_eq!(Config::load(&ctx).unwrap(), cfg);
    assert!(
        Config::get_path_string(&ctx)
            .unwrap()
            .ends_with("config.toml")
    );
}

#[test]
fn test_partial_file_takes_defaults() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "pdf_base_url = \"http://cdn.local/\"\n").unwrap();

    let cfg = Config::load(&ctx).unwrap();
    assert_eq!(cfg.pdf_base_url, "http://cdn.local/");
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert!(cfg.user_agent.starts_with("pil-syllabus/"));
}

#[test]
fn test_broken_file_is_not_treated_as_missing() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "api_url = [not toml").unwrap();

    let err = Config::load_or_default(&ctx).unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
    assert!(err.to_string().contains("Failed to parse config file"));
}
