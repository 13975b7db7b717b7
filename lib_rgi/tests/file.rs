mod common;

use std::fs;
use std::path::PathBuf;

use common::sample_set;
use lib_rgi::iconset::file::{load_iconset, save_iconset, FileError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lib_rgi_{}_{}.rgi", std::process::id(), name))
}

#[test]
fn test_save_load_roundtrip() {
    let path = temp_path("roundtrip");
    let set = sample_set();

    save_iconset(&path, &set).unwrap();
    let loaded = load_iconset(&path).unwrap();
    assert_eq!(loaded, set);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_save_leaves_no_temporary_file() {
    let path = temp_path("tmpfile");

    save_iconset(&path, &sample_set()).unwrap();

    let mut tmp = path.clone().into_os_string();
    tmp.push(".tmp");
    assert!(!PathBuf::from(tmp).exists());

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = load_iconset(temp_path("missing"));
    assert!(matches!(result, Err(FileError::Io(_))));
}

#[test]
fn test_load_corrupt_file_is_decode_error() {
    let path = temp_path("corrupt");
    fs::write(&path, b"definitely not an icon set").unwrap();

    let result = load_iconset(&path);
    assert!(matches!(result, Err(FileError::Decode(_))));

    fs::remove_file(&path).unwrap();
}
