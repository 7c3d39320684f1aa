mod common;

use predicates::str::contains;

use common::{cli, prepare_command, write_file, COASTAL_ROUTES};

#[test]
fn shows_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("route"))
        .stdout(contains("settlements"))
        .stdout(contains("biomes"));
}

#[test]
fn lists_settlements_by_region() {
    let (mut cmd, _temp) = prepare_command(COASTAL_ROUTES);
    cmd.arg("settlements");

    let output = cmd.output().expect("run wayfarer");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    assert!(stdout.starts_with("Settlements (4):\n"));

    let isles = stdout.find("Isles").expect("isles heading");
    let kingdom = stdout.find("Kingdom A").expect("kingdom heading");
    assert!(isles < kingdom);
    assert!(stdout.contains("1 land, 1 sea"));
}

#[test]
fn settlements_as_json() {
    let (mut cmd, _temp) = prepare_command(COASTAL_ROUTES);
    cmd.args(["settlements", "--format", "json"]);

    let output = cmd.output().expect("run wayfarer");
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["name"], "Gull Rock");
}

#[test]
fn lists_default_biome_multipliers() {
    cli()
        .arg("biomes")
        .assert()
        .success()
        .stdout(contains("Biome multipliers (8):"))
        .stdout(contains("tropical-rainforest"))
        .stdout(contains("2.00"));
}

#[test]
fn biome_csv_overrides_weights() {
    let (mut cmd, temp) = prepare_command(COASTAL_ROUTES);
    let csv = write_file(temp.path(), "biomes.csv", "biome,multiplier\nwetlands,1.0\n");
    cmd.arg("--biomes")
        .arg(csv)
        .args(["route", "--from", "Shadowfen", "--to", "Highcross"]);

    // Marsh at 1.0 and doubled for being unmapped: 40 + 15 beats the 60 km crossing.
    cmd.assert()
        .success()
        .stdout(contains("(2 legs)"));
}

#[test]
fn biome_env_var_is_honoured() {
    let temp = tempfile::tempdir().expect("temp dir");
    let csv = write_file(temp.path(), "biomes.csv", "Terrain,Difficulty\nvolcanic,3\n");

    cli()
        .env("WAYFARER_BIOMES", &csv)
        .arg("biomes")
        .assert()
        .success()
        .stdout(contains("volcanic"))
        .stdout(contains("3.00"));
}

#[test]
fn invalid_biome_csv_is_reported() {
    let temp = tempfile::tempdir().expect("temp dir");
    let csv = write_file(temp.path(), "biomes.csv", "biome,multiplier\nwetlands,0.5\n");

    cli()
        .arg("--biomes")
        .arg(csv)
        .arg("biomes")
        .assert()
        .failure()
        .stderr(contains("failed to load biome table"));
}

#[test]
fn routes_env_var_is_honoured() {
    let temp = tempfile::tempdir().expect("temp dir");
    let routes = write_file(temp.path(), "routes.json", COASTAL_ROUTES);

    cli()
        .env("WAYFARER_ROUTES", &routes)
        .args(["route", "--from", "Reedholm", "--to", "Gull Rock"])
        .assert()
        .success()
        .stdout(contains("Reedholm -> Gull Rock"));
}

#[test]
fn missing_dataset_fails() {
    let temp = tempfile::tempdir().expect("temp dir");

    cli()
        .arg("--routes")
        .arg(temp.path().join("absent.json"))
        .arg("settlements")
        .assert()
        .failure()
        .stderr(contains("route dataset not found"));
}

#[test]
fn invalid_record_is_reported_with_index() {
    let routes = r#"{
        "land_routes": [
            {
                "origin": {"name": "A", "region": "R"},
                "destination": {"name": "B", "region": "R"},
                "segments": [{"biome": "taiga", "distance_km": -1.0}]
            }
        ]
    }"#;
    let (mut cmd, _temp) = prepare_command(routes);
    cmd.arg("settlements");

    cmd.assert()
        .failure()
        .stderr(contains("invalid land route at index 0"));
}
