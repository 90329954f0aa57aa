// Tests for mapping payload JSON onto records.
use pil_syllabus::FetchError;
use pil_syllabus::model::{RecordDisplay, SyllabusRecord, parse_payload, parse_timestamp};
use serde_json::json;

#[test]
fn test_fallbacks_for_missing_and_wrong_typed_fields() {
    let v = json!({ "class": 42, "createdAt": "2024-01-01T10:00:00.000Z", "pdfUrl": null });
    let r = SyllabusRecord::from_json(0, &v).unwrap();

    assert_eq!(r.class_name, None);
    assert_eq!(r.display_class(), "Not Provided");
    assert_eq!(r.class_key(), "");
    assert_eq!(r.pdf_url, "");
    assert!(!r.has_pdf());
}

#[test]
fn test_id_is_carried_through() {
    let v = json!({ "_id": "abc123", "class": "Math", "createdAt": "2024-01-01T10:00:00Z" });
    let r = SyllabusRecord::from_json(0, &v).unwrap();
    assert_eq!(r.id.as_deref(), Some("abc123"));
}

#[test]
fn test_date_and_time_split() {
    let r = SyllabusRecord::new(Some("Math"), "2024-01-01T10:05:09.123Z", "uploads/a.pdf").unwrap();
    assert_eq!(r.upload_date(), "2024-01-01");
    assert_eq!(r.upload_time(), "10:05:09");

    // No fractional part: the whole remainder is kept, offset included.
    let r = SyllabusRecord::new(None, "2024-01-01T10:05:09+02:00", "").unwrap();
    assert_eq!(r.upload_time(), "10:05:09+02:00");

    // Bare date has no time portion.
    let r = SyllabusRecord::new(None, "2024-01-01", "").unwrap();
    assert_eq!(r.upload_date(), "2024-01-01");
    assert_eq!(r.upload_time(), "N/A");
}

#[test]
fn test_list_line_marks_missing_pdf() {
    let r = SyllabusRecord::new(Some("Art"), "2024-03-01T09:00:00.000Z", "").unwrap();
    let line = r.to_list_line(3);
    assert!(line.contains("Art"));
    assert!(line.contains("2024-03-01"));
    assert!(line.contains("09:00:00"));
    assert!(line.ends_with("(no PDF)"));
}

#[test]
fn test_timestamp_formats() {
    let z = parse_timestamp("2024-01-01T10:00:00.000Z").unwrap();
    let naive = parse_timestamp("2024-01-01T10:00:00.000").unwrap();
    assert_eq!(z, naive);

    let offset = parse_timestamp("2024-01-01T12:00:00+02:00").unwrap();
    assert_eq!(z, offset);

    assert!(parse_timestamp("2024-01-01").is_some());
    assert_eq!(parse_timestamp("20240101"), parse_timestamp("2024-01-01"));
    assert!(parse_timestamp("").is_none());
    assert!(parse_timestamp("yesterday").is_none());
}

#[test]
fn test_timestamp_offset_and_basic_variants() {
    let expected = parse_timestamp("2024-01-01T10:00:00Z").unwrap();

    let cases = [
        "2024-01-01T15:30:00.000+0530",
        "2024-01-01T15:30:00+05:30",
        "2024-01-01T15:00:00+05",
        "2024-01-01T10:00Z",
        "2024-01-01T10:00",
        "2024-01-01 10:00:00Z",
        "20240101T100000Z",
        "20240101T153000+0530",
        "20240101T100000",
    ];
    for raw in cases {
        assert_eq!(parse_timestamp(raw), Some(expected), "parsing {}", raw);
    }

    assert!(parse_timestamp("2024-13-01T10:00:00Z").is_none());
    assert!(parse_timestamp("2024-01-01T10:00:00+5").is_none());
}

#[test]
fn test_compact_offset_does_not_fail_payload() {
    let body = br#"{"success": true, "data": [
        {"class":"Math","createdAt":"2024-01-01T10:00:00.000Z"},
        {"class":"Art","createdAt":"2024-03-01T09:00:00.000+0530"}
    ]}"#;
    let records = parse_payload(body).unwrap();
    let names: Vec<_> = records.iter().map(|r| r.class_key()).collect();
    assert_eq!(names, vec!["Art", "Math"]);
    assert_eq!(records[0].created_at_raw, "2024-03-01T09:00:00.000+0530");
}

#[test]
fn test_payload_sorted_newest_first() {
    let body = br#"{"success": true, "data": [
        {"class":"Math","createdAt":"2024-01-01T10:00:00.000Z"},
        {"class":"Art","createdAt":"2024-03-01T09:00:00.000Z"},
        {"class":"Bio","createdAt":"2023-12-31T23:59:59.000Z"}
    ]}"#;
    let records = parse_payload(body).unwrap();
    let names: Vec<_> = records.iter().map(|r| r.class_key()).collect();
    assert_eq!(names, vec!["Art", "Math", "Bio"]);

    for pair in records.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[test]
fn test_sort_is_stable_for_equal_timestamps() {
    let body = br#"{"success": true, "data": [
        {"class":"First","createdAt":"2024-01-01T10:00:00.000Z"},
        {"class":"Newer","createdAt":"2024-02-01T10:00:00.000Z"},
        {"class":"Second","createdAt":"2024-01-01T10:00:00.000Z"},
        {"class":"Third","createdAt":"2024-01-01T12:00:00.000+02:00"}
    ]}"#;
    let records = parse_payload(body).unwrap();
    let names: Vec<_> = records.iter().map(|r| r.class_key()).collect();
    assert_eq!(names, vec!["Newer", "First", "Second", "Third"]);
}

#[test]
fn test_success_false_is_rejected() {
    let body = br#"{"success": false, "data": []}"#;
    assert_eq!(parse_payload(body), Err(FetchError::ApiRejected));

    // Truthy-but-not-true values are rejected too.
    let body = br#"{"success": "true", "data": []}"#;
    assert_eq!(parse_payload(body), Err(FetchError::ApiRejected));

    let body = br#"{"data": []}"#;
    assert_eq!(parse_payload(body), Err(FetchError::ApiRejected));
}

#[test]
fn test_missing_data_is_decode_error() {
    let body = br#"{"success": true}"#;
    assert!(matches!(parse_payload(body), Err(FetchError::Decode(_))));

    let body = br#"{"success": true, "data": {}}"#;
    assert!(matches!(parse_payload(body), Err(FetchError::Decode(_))));
}

#[test]
fn test_not_json_is_decode_error() {
    assert!(matches!(
        parse_payload(b"<html>502</html>"),
        Err(FetchError::Decode(_))
    ));
}

#[test]
fn test_bad_created_at_fails_whole_fetch() {
    let body = br#"{"success": true, "data": [
        {"class":"Ok","createdAt":"2024-01-01T10:00:00.000Z"},
        {"class":"Bad","createdAt":"not a date"}
    ]}"#;
    assert_eq!(
        parse_payload(body),
        Err(FetchError::MalformedRecord {
            index: 1,
            value: "not a date".to_string()
        })
    );

    let body = br#"{"success": true, "data": [{"class":"NoDate"}]}"#;
    assert!(matches!(
        parse_payload(body),
        Err(FetchError::MalformedRecord { index: 0, .. })
    ));

    let body = br#"{"success": true, "data": ["just a string"]}"#;
    assert!(matches!(
        parse_payload(body),
        Err(FetchError::MalformedRecord { index: 0, .. })
    ));
}

#[test]
fn test_empty_data_is_ok() {
    let body = br#"{"success": true, "data": []}"#;
    assert_eq!(parse_payload(body), Ok(vec![]));
}
