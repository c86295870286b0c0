#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::assert::Assert;
use serde_json::Value;
use tempfile::TempDir;

pub fn prepare_project(prefix: &str, manifest: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("tempdir");
    let root = temp.path().join("project");
    fs::create_dir_all(&root).expect("project dir");
    fs::write(root.join("strata.toml"), manifest).expect("write manifest");
    (temp, root)
}

pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dirs");
    }
    fs::write(path, b"").expect("write file");
}

pub fn parse_json(assert: &Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("valid json")
}

pub fn layer<'a>(payload: &'a Value, name: &str) -> &'a Value {
    payload["details"]["layers"]
        .as_array()
        .expect("layers array")
        .iter()
        .find(|layer| layer["name"] == name)
        .expect("layer present")
}

pub fn destinations(layer: &Value) -> Vec<String> {
    layer["entries"]
        .as_array()
        .expect("entries array")
        .iter()
        .map(|entry| entry["destination"].as_str().expect("destination").to_string())
        .collect()
}
