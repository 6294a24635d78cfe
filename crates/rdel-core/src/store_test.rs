use std::io::Write;

use super::*;

fn write_fixture(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

fn raw(id: &str, name: Option<&str>) -> Result<RawLocationRecord, RecordError> {
    Ok(RawLocationRecord {
        id: Some(LocationId::new(id)),
        name: name.map(str::to_string),
        ..RawLocationRecord::default()
    })
}

#[test]
fn keeps_source_order() {
    let (store, report) = RecordStore::from_records([
        raw("b", Some("Second")),
        raw("a", Some("First")),
    ]);
    assert!(report.is_clean());
    let names: Vec<&str> = store.all().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Second", "First"]);
}

#[test]
fn skips_record_without_name() {
    let (store, report) = RecordStore::from_records([
        raw("1", Some("Bakery")),
        raw("2", None),
        raw("3", Some("Butcher")),
    ]);
    assert_eq!(store.len(), 2);
    assert_eq!(report.loaded, 2);
    assert_eq!(
        report.skipped,
        vec![SkippedRecord {
            index: 1,
            error: RecordError::MissingName(LocationId::new("2")),
        }]
    );
}

#[test]
fn skips_duplicate_ids_after_first() {
    let (store, report) = RecordStore::from_records([
        raw("1", Some("Original")),
        raw("1", Some("Impostor")),
    ]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].name, "Original");
    assert_eq!(
        report.skipped[0].error,
        RecordError::DuplicateId(LocationId::new("1"))
    );
}

#[test]
fn get_finds_by_id() {
    let (store, _) = RecordStore::from_entries(vec![
        LocationEntry::new("1", "One"),
        LocationEntry::new("2", "Two"),
    ]);
    assert_eq!(store.get(&LocationId::new("2")).map(|e| e.name.as_str()), Some("Two"));
    assert!(store.get(&LocationId::new("9")).is_none());
}

#[test]
fn empty_store() {
    let (store, report) = RecordStore::from_entries(Vec::new());
    assert!(store.is_empty());
    assert_eq!(report, LoadReport::default());
}

#[test]
fn loads_bare_yaml_list() {
    let file = write_fixture(
        ".yaml",
        r#"
- id: 1
  name: Bread & Butter Bakery
  deliveryHours:
    - Mon 09:00-17:00
    - Tue 09:00-17:00
- id: 2
  name: Veg Box Co
  deliveryHours: []
"#,
    );
    let (store, report) = load_locations(file.path()).unwrap();
    assert!(report.is_clean());
    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].delivery_hours.len(), 2);
}

#[test]
fn loads_wrapped_json_and_skips_bad_record() {
    let file = write_fixture(
        ".json",
        r#"{"locations": [
            {"id": "a", "name": "Fishmonger", "tags": ["fish"]},
            {"id": "b", "name": "Broken", "deliveryHours": "Mon 09:00-17:00"},
            {"id": "c"}
        ]}"#,
    );
    let (store, report) = load_locations(file.path()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(report.skipped.len(), 2);
    assert!(matches!(report.skipped[0].error, RecordError::Unreadable(_)));
    assert_eq!(
        report.skipped[1].error,
        RecordError::MissingName(LocationId::new("c"))
    );
}

#[test]
fn rejects_unknown_extension() {
    let file = write_fixture(".toml", "[]");
    let err = load_locations(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_locations(Path::new("/nonexistent/locations.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::LocationsFileIo { .. }));
}

#[test]
fn unparseable_document_is_parse_error() {
    let file = write_fixture(".yaml", "locations: 12");
    let err = load_locations(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::LocationsFileParseYaml(_)));
}
