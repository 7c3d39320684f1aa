//! Route dataset discovery and loading.
//!
//! The library never touches the filesystem, so this module owns resolving
//! the dataset location, parsing the JSON route records and the optional
//! biome CSV, and handing validated records to the graph builder.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, info};

use wayfarer_lib::{
    build_graph_with, BiomeSegment, BiomeTable, Graph, GraphBuildOptions, LandRoute, SeaRoute,
    Settlement,
};

/// Environment variable overriding the route dataset location.
pub const ROUTES_ENV: &str = "WAYFARER_ROUTES";
/// Environment variable pointing at a biome multiplier CSV.
pub const BIOMES_ENV: &str = "WAYFARER_BIOMES";
/// File name of the dataset inside the platform data directory.
pub const DEFAULT_ROUTES_FILE: &str = "routes.json";

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    land_routes: Vec<LandRouteRecord>,
    #[serde(default)]
    sea_routes: Vec<SeaRouteRecord>,
}

#[derive(Debug, Deserialize)]
struct LandRouteRecord {
    origin: Settlement,
    destination: Settlement,
    segments: Vec<BiomeSegment>,
    #[serde(default = "mapped_by_default")]
    is_mapped: bool,
}

#[derive(Debug, Deserialize)]
struct SeaRouteRecord {
    origin: Settlement,
    destination: Settlement,
    distance_km: f64,
}

fn mapped_by_default() -> bool {
    true
}

/// Validated route records read from a dataset file.
#[derive(Debug, Clone, Default)]
pub struct RouteDataset {
    pub land_routes: Vec<LandRoute>,
    pub sea_routes: Vec<SeaRoute>,
}

impl RouteDataset {
    /// Parse and validate a dataset from JSON text.
    ///
    /// Every record passes through the library constructors; the first
    /// invalid record aborts loading and is named by its index.
    pub fn from_json(text: &str) -> Result<Self> {
        let file: DatasetFile =
            serde_json::from_str(text).context("route dataset is not valid JSON")?;

        let land_routes = file
            .land_routes
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                LandRoute::from_segments(
                    record.origin,
                    record.destination,
                    record.segments,
                    record.is_mapped,
                )
                .with_context(|| format!("invalid land route at index {index}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let sea_routes = file
            .sea_routes
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                SeaRoute::new(record.origin, record.destination, record.distance_km)
                    .with_context(|| format!("invalid sea route at index {index}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            land_routes,
            sea_routes,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read route dataset {}", path.display()))?;
        let dataset = Self::from_json(&text)
            .with_context(|| format!("failed to load route dataset {}", path.display()))?;
        info!(
            path = %path.display(),
            land = dataset.land_routes.len(),
            sea = dataset.sea_routes.len(),
            "loaded route dataset"
        );
        Ok(dataset)
    }

    pub fn record_count(&self) -> usize {
        self.land_routes.len() + self.sea_routes.len()
    }
}

/// Resolve the dataset path: explicit flag, then `WAYFARER_ROUTES`, then
/// `routes.json` in the platform data directory.
pub fn resolve_routes_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(ROUTES_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let dirs = ProjectDirs::from("com", "wayfarer", "wayfarer")
        .ok_or_else(|| anyhow!("unable to determine a data directory; pass --routes"))?;
    Ok(dirs.data_dir().join(DEFAULT_ROUTES_FILE))
}

/// Resolve the optional biome CSV: explicit flag, then `WAYFARER_BIOMES`.
pub fn resolve_biomes_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(BIOMES_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

/// Load the effective biome table: built-in multipliers, overridden by the
/// CSV at `path` when given.
pub fn load_biome_table(path: Option<&Path>) -> Result<BiomeTable> {
    let Some(path) = path else {
        return Ok(BiomeTable::default());
    };

    let file = File::open(path)
        .with_context(|| format!("failed to open biome table {}", path.display()))?;
    let overrides = BiomeTable::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to load biome table {}", path.display()))?;
    debug!(path = %path.display(), entries = overrides.len(), "loaded biome overrides");
    Ok(BiomeTable::default().overlay(overrides))
}

/// Dataset location and biome overrides chosen on the command line.
#[derive(Debug, Clone, Default)]
pub struct DataSources {
    pub routes: Option<PathBuf>,
    pub biomes: Option<PathBuf>,
}

impl DataSources {
    pub fn biome_table(&self) -> Result<BiomeTable> {
        load_biome_table(resolve_biomes_path(self.biomes.as_deref()).as_deref())
    }

    /// Load the dataset and build the route graph from it.
    pub fn load_graph(&self) -> Result<Graph> {
        let path = resolve_routes_path(self.routes.as_deref())?;
        if !path.exists() {
            return Err(anyhow!(
                "route dataset not found at {}; pass --routes or set {ROUTES_ENV}",
                path.display()
            ));
        }

        let dataset = RouteDataset::load(&path)?;
        let biomes = self.biome_table()?;
        let graph = build_graph_with(
            &dataset.land_routes,
            &dataset.sea_routes,
            &GraphBuildOptions { biomes: &biomes },
        );
        debug!(
            records = dataset.record_count(),
            nodes = graph.node_count(),
            "route graph ready"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "land_routes": [
            {
                "origin": {"name": "Shadowfen", "region": "Kingdom A"},
                "destination": {"name": "Reedholm", "region": "Kingdom A"},
                "segments": [{"biome": "wetlands", "distance_km": 10.0}],
                "is_mapped": false
            },
            {
                "origin": {"name": "Reedholm", "region": "Kingdom A"},
                "destination": {"name": "Highcross", "region": "Kingdom A"},
                "segments": [{"biome": "grasslands", "distance_km": 5.0}]
            }
        ],
        "sea_routes": [
            {
                "origin": {"name": "Reedholm", "region": "Kingdom A"},
                "destination": {"name": "Gull Rock", "region": "Isles"},
                "distance_km": 12.5
            }
        ]
    }"#;

    #[test]
    fn parses_land_and_sea_records() {
        let dataset = RouteDataset::from_json(SAMPLE).expect("valid dataset");
        assert_eq!(dataset.land_routes.len(), 2);
        assert_eq!(dataset.sea_routes.len(), 1);
        assert!(!dataset.land_routes[0].is_mapped());
        assert!(dataset.land_routes[1].is_mapped());
        assert_eq!(dataset.sea_routes[0].distance_km(), 12.5);
    }

    #[test]
    fn invalid_record_names_its_index() {
        let text = r#"{
            "sea_routes": [
                {"origin": {"name": "A", "region": "R"}, "destination": {"name": "B", "region": "R"}, "distance_km": 1.0},
                {"origin": {"name": "B", "region": "R"}, "destination": {"name": "C", "region": "R"}, "distance_km": -4.0}
            ]
        }"#;
        let err = RouteDataset::from_json(text).expect_err("negative distance");
        assert!(format!("{err:#}").contains("invalid sea route at index 1"));
    }

    #[test]
    fn explicit_routes_path_wins() {
        let path = resolve_routes_path(Some(Path::new("/tmp/custom.json"))).expect("resolves");
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn biome_overrides_apply_on_top_of_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "Biome, Multiplier\nwetlands,3.5\nvolcanic,4").expect("write csv");

        let table = load_biome_table(Some(file.path())).expect("loads");
        assert_eq!(table.multiplier("wetlands"), 3.5);
        assert_eq!(table.multiplier("volcanic"), 4.0);
        assert_eq!(table.multiplier("tundra"), 2.0);
    }

    #[test]
    fn missing_dataset_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let sources = DataSources {
            routes: Some(dir.path().join("absent.json")),
            biomes: None,
        };
        let err = sources.load_graph().expect_err("missing file");
        assert!(err.to_string().contains("route dataset not found"));
    }
}
