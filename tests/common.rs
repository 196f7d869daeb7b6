#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tsc() -> Command {
    cargo_bin_cmd!("timeshortcuts")
}

/// Unique config path inside the system temp dir; any existing file is removed
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeshortcuts.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file with the given YAML body and return its path
pub fn write_config(name: &str, yaml: &str) -> String {
    let p = setup_test_config(name);
    fs::write(&p, yaml).expect("write test config");
    p
}
