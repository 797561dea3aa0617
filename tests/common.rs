#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Scratch directory for one test, emptied before use.
pub fn test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("hourgrid_test_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// The binary, with HOME pointed at `home` so no real config is read.
pub fn hg(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("hourgrid");
    cmd.env("HOME", home);
    cmd
}

/// Create a test dir with an initialized database; returns (dir, db path).
pub fn setup_test_db(name: &str) -> (PathBuf, String) {
    let dir = test_dir(name);
    let db_path = dir.join("hourgrid.sqlite").to_string_lossy().to_string();

    hg(&dir)
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    (dir, db_path)
}
