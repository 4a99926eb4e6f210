use farebox_core::{DirectoryError, StationDirectory};
use tempfile::tempdir;

#[test]
fn loads_directory_from_disk() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("stations.toml");
    std::fs::write(&path, r#"stations = ["DARTFORD", "DARTMOUTH", "DERBY"]"#).unwrap();

    let directory = StationDirectory::load(&path).unwrap();
    assert_eq!(directory.stations(), ["DARTFORD", "DARTMOUTH", "DERBY"]);
}

#[test]
fn missing_file_is_not_found() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("absent.toml");

    let result = StationDirectory::load(&path);
    assert!(matches!(result, Err(DirectoryError::NotFound(p)) if p == path));
}

#[test]
fn malformed_file_is_rejected() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("stations.toml");
    std::fs::write(&path, "stations = \"DERBY\"").unwrap();

    let result = StationDirectory::load(&path);
    assert!(matches!(result, Err(DirectoryError::Malformed(_))));
}
