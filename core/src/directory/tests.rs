use super::*;

#[test]
fn parses_stations_array() {
    let directory =
        StationDirectory::from_toml_str(r#"stations = ["DARTFORD", "DARTMOUTH"]"#).unwrap();
    assert_eq!(directory.stations(), ["DARTFORD", "DARTMOUTH"]);
}

#[test]
fn preserves_provisioning_order() {
    let directory =
        StationDirectory::from_toml_str(r#"stations = ["TOWER HILL", "DERBY", "DARTFORD"]"#)
            .unwrap();
    assert_eq!(directory.stations(), ["TOWER HILL", "DERBY", "DARTFORD"]);
}

#[test]
fn empty_list_is_a_valid_directory() {
    let directory = StationDirectory::from_toml_str("stations = []").unwrap();
    assert!(directory.is_empty());
    assert_eq!(directory.len(), 0);
}

#[test]
fn rejects_document_without_stations_key() {
    let result = StationDirectory::from_toml_str("platforms = 4");
    assert!(matches!(result, Err(DirectoryError::Malformed(_))));
}

#[test]
fn collects_from_str_iterator() {
    let directory: StationDirectory = ["DERBY", "DUNDEE"].into_iter().collect();
    assert_eq!(directory.stations(), ["DERBY", "DUNDEE"]);
}
