use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for roomsearch, isolated from the caller's logging environment
pub fn roomsearch() -> Command {
    let mut cmd = cargo_bin_cmd!("roomsearch");
    cmd.env_remove("RUST_LOG")
        .env_remove("ROOMSEARCH_LOG")
        .env_remove("ROOMSEARCH_LOG_LEVEL");
    cmd
}

/// Empty working directory so no local config is picked up
pub fn setup_test_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Three rooms in a cycle; HALL lists NOOK before DEN
pub const TRIANGLE_GRAPH: &str = r#"
[[rooms]]
id = "HALL"
name = "Hall"
floor = 1.0
x = 0.0
y = 0.0

[[rooms]]
id = "DEN"
name = "Den"
floor = 1.0
x = 100.0
y = 0.0

[[rooms]]
id = "NOOK"
name = "Nook"
floor = 1.0
x = 50.0
y = 100.0

[adjacency]
HALL = ["NOOK", "DEN"]
DEN = ["HALL", "NOOK"]
NOOK = ["HALL", "DEN"]
"#;

/// Write `content` to `name` inside `dir`
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
