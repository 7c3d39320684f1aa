#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// Coastal dataset: a marsh road and a grassland road on the mainland, a
/// sea crossing between the mainland ends and a ferry out to the isles.
pub const COASTAL_ROUTES: &str = r#"{
    "land_routes": [
        {
            "origin": {"name": "Shadowfen", "region": "Kingdom A"},
            "destination": {"name": "Reedholm", "region": "Kingdom A"},
            "segments": [{"biome": "wetlands", "distance_km": 20.0}],
            "is_mapped": false
        },
        {
            "origin": {"name": "Reedholm", "region": "Kingdom A"},
            "destination": {"name": "Highcross", "region": "Kingdom A"},
            "segments": [{"biome": "grasslands", "distance_km": 15.0}],
            "is_mapped": true
        }
    ],
    "sea_routes": [
        {
            "origin": {"name": "Shadowfen", "region": "Kingdom A"},
            "destination": {"name": "Highcross", "region": "Kingdom A"},
            "distance_km": 60.0
        },
        {
            "origin": {"name": "Reedholm", "region": "Kingdom A"},
            "destination": {"name": "Gull Rock", "region": "Isles"},
            "distance_km": 10.0
        }
    ]
}"#;

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

pub fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("wayfarer");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("WAYFARER_ROUTES")
        .env_remove("WAYFARER_BIOMES");
    cmd
}

/// Command pointed at a temporary copy of `routes`.
pub fn prepare_command(routes: &str) -> (Command, TempDir) {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = write_file(temp_dir.path(), "routes.json", routes);
    let mut cmd = cli();
    cmd.arg("--routes").arg(path);
    (cmd, temp_dir)
}
