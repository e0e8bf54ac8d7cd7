//! Test utilities for report-sync
//!
//! Filesystem fixtures shared by the unit test modules.

#![cfg(test)]

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Write a small file, creating parent directories as needed
pub fn write_file(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"%PDF-1.4 test report").unwrap();
}

/// Backdate a file's modification time by `age`
pub fn set_age(path: &Path, age: Duration) {
    set_modified(path, SystemTime::now() - age);
}

/// Set a file's modification time
pub fn set_modified(path: &Path, modified: SystemTime) {
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(modified).unwrap();
}
