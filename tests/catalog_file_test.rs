mod utils;

use search_hints_lib::shared::config::{SearchHintsConfig, CATALOG_PATH_VAR};
use search_hints_lib::{AppError, CatalogSnapshot, SearchHintsRequest, SearchService};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use utils::factories::SampleLibrary;

fn write_catalog(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write catalog");
    file
}

#[test]
fn test_search_over_catalog_loaded_from_disk() {
    let library = SampleLibrary::new();
    let file = write_catalog(&serde_json::to_string_pretty(&library.snapshot).unwrap());

    let config = SearchHintsConfig::from_lookup(|key| {
        (key == CATALOG_PATH_VAR).then(|| file.path().display().to_string())
    })
    .unwrap();
    let path = config.catalog_path.clone().unwrap();

    let snapshot = CatalogSnapshot::from_json_file(&path).unwrap();
    assert_eq!(snapshot, library.snapshot);

    let (catalog, users) = snapshot.into_repositories();
    let service = SearchService::new(Arc::new(catalog), Arc::new(users), config);

    let request = SearchHintsRequest {
        user_id: Some(library.kid.id.to_string()),
        ..SearchHintsRequest::new("shrek")
    };
    let result = tokio_test::block_on(service.get_search_hints_for_request(request)).unwrap();

    assert_eq!(result.total_record_count, 2);
    assert_eq!(result.items[0].item.name, "Shrek");
}

#[test]
fn test_items_only_catalog_file() {
    let library = SampleLibrary::new();
    let file = write_catalog(&serde_json::to_string(&library.snapshot.items).unwrap());

    let snapshot = CatalogSnapshot::from_json_file(file.path()).unwrap();

    assert_eq!(snapshot.items.len(), library.snapshot.items.len());
    assert!(snapshot.users.is_empty());
}

#[test]
fn test_corrupt_catalog_file_is_reported() {
    let file = write_catalog(r#"{"items": [{"name": "missing everything"}]}"#);

    let result = CatalogSnapshot::from_json_file(file.path());

    assert!(matches!(result, Err(AppError::SerializationError(_))));
}

#[test]
fn test_hints_serialize_for_output() {
    let library = SampleLibrary::new();
    let (catalog, users) = library.snapshot.clone().into_repositories();
    let service = SearchService::new(
        Arc::new(catalog),
        Arc::new(users),
        SearchHintsConfig::default(),
    );

    let result =
        tokio_test::block_on(service.get_search_hints_for_request(SearchHintsRequest::new("amelie")))
            .unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["total_record_count"], 1);
    assert_eq!(json["items"][0]["item"]["name"], "Amélie");
    assert_eq!(json["items"][0]["item"]["kind"], "Movie");
    assert_eq!(json["items"][0]["matched_term"], "amelie");
}
