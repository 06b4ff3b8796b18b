use std::fs;

use rds_inventory::config::load_profiles;
use rds_inventory::error::AppError;

#[test]
fn keeps_non_blank_lines_in_file_order() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("profiles.txt");
    fs::write(&path, "\n  prod-a  \n\n\t\nprod-b\r\n   \nsandbox\n\n").expect("write profiles");

    let profiles = load_profiles(&path).expect("profiles should load");
    assert_eq!(profiles, ["prod-a", "prod-b", "sandbox"]);
}

#[test]
fn missing_file_is_reported_as_not_found() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("absent.txt");

    match load_profiles(&path) {
        Err(AppError::ProfileFileNotFound(reported)) => assert_eq!(reported, path),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn unreadable_path_is_an_io_error() {
    let dir = tempfile::tempdir().expect("create tempdir");

    match load_profiles(dir.path()) {
        Err(AppError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}
