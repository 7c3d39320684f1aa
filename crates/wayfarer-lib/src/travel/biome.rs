//! Biome difficulty multipliers.
//!
//! Multipliers scale the distance of each land segment when computing the
//! effective distance the solver minimises. Every multiplier must be at
//! least 1.0 so terrain can only lengthen a route.

use std::collections::{BTreeMap, HashMap};
use std::io::Read;

use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;

use crate::error::{Error, Result};

use super::constants::DEFAULT_BIOME_MULTIPLIER;

const STANDARD_MULTIPLIERS: &[(&str, f64)] = &[
    ("wetlands", 2.0),
    ("tundra", 2.0),
    ("taiga", 2.0),
    ("glacier", 2.0),
    ("tropical-rainforest", 2.0),
    ("grasslands", 1.0),
    ("savanna", 1.0),
    ("temperate-forest", 1.0),
];

static STANDARD_TABLE: Lazy<BiomeTable> = Lazy::new(|| BiomeTable {
    multipliers: STANDARD_MULTIPLIERS
        .iter()
        .map(|(biome, multiplier)| (biome.to_string(), *multiplier))
        .collect(),
});

/// Normalize a biome name for lookup: trimmed, lowercased, with spaces and
/// underscores folded to hyphens.
pub fn normalize_biome(name: &str) -> String {
    name.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == '_' || c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Lookup table from biome name to travel difficulty multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct BiomeTable {
    multipliers: HashMap<String, f64>,
}

impl Default for BiomeTable {
    fn default() -> Self {
        STANDARD_TABLE.clone()
    }
}

impl BiomeTable {
    /// Shared instance of the built-in table.
    pub fn standard() -> &'static BiomeTable {
        &STANDARD_TABLE
    }

    /// Table with no entries; every biome resolves to the default multiplier.
    pub fn empty() -> Self {
        Self {
            multipliers: HashMap::new(),
        }
    }

    /// Multiplier for `biome`, or [`DEFAULT_BIOME_MULTIPLIER`] when unknown.
    pub fn multiplier(&self, biome: &str) -> f64 {
        self.multipliers
            .get(&normalize_biome(biome))
            .copied()
            .unwrap_or(DEFAULT_BIOME_MULTIPLIER)
    }

    /// Add or replace a multiplier.
    ///
    /// # Errors
    /// Returns [`Error::BiomeTableValidation`] for an empty name or a
    /// multiplier below 1.0.
    pub fn insert(&mut self, biome: &str, multiplier: f64) -> Result<()> {
        let key = normalize_biome(biome);
        if key.is_empty() {
            return Err(Error::BiomeTableValidation {
                message: "biome name must not be empty".to_string(),
            });
        }
        if !multiplier.is_finite() || multiplier < 1.0 {
            return Err(Error::BiomeTableValidation {
                message: format!(
                    "multiplier for '{key}' must be a finite number >= 1.0, got {multiplier}"
                ),
            });
        }
        self.multipliers.insert(key, multiplier);
        Ok(())
    }

    /// Return this table with every entry of `other` applied on top.
    pub fn overlay(mut self, other: BiomeTable) -> Self {
        self.multipliers.extend(other.multipliers);
        self
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    /// All entries sorted by biome name.
    pub fn entries_sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .multipliers
            .iter()
            .map(|(biome, multiplier)| (biome.as_str(), *multiplier))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Load a table from CSV with `biome` and `multiplier` columns.
    ///
    /// Header matching ignores case and surrounding whitespace; `terrain`
    /// and `difficulty` are accepted as synonyms.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::BiomeTableValidation {
                message: format!("failed to read biome table headers: {err}"),
            })?
            .clone();

        let normalize = |s: &str| {
            s.to_ascii_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        };
        let normalized_headers: Vec<String> = headers.iter().map(normalize).collect();

        let synonyms: &[(&str, &[&str])] = &[
            ("biome", &["biome", "terrain", "name"]),
            ("multiplier", &["multiplier", "difficulty", "factor"]),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            if let Some(i) = alts
                .iter()
                .find_map(|alt| normalized_headers.iter().position(|h| h == alt))
            {
                index_map.insert(*canon, i);
            }
        }

        let missing: Vec<&str> = ["biome", "multiplier"]
            .into_iter()
            .filter(|c| !index_map.contains_key(c))
            .collect();
        if !missing.is_empty() {
            return Err(Error::BiomeTableValidation {
                message: format!(
                    "biome table missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut table = Self::empty();
        // Header is line 1.
        for (offset, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = offset + 2;
            let get = |field: &str| index_map.get(field).and_then(|&i| record.get(i));

            let biome = get("biome").unwrap_or_default();
            let multiplier = get("multiplier")
                .unwrap_or_default()
                .parse::<f64>()
                .map_err(|e| Error::BiomeTableValidation {
                    message: format!("invalid multiplier for biome '{biome}' at row {row}: {e}"),
                })?;

            table.insert(biome, multiplier)?;
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn normalization_folds_case_and_separators() {
        assert_eq!(normalize_biome("TROPICAL_RAINFOREST"), "tropical-rainforest");
        assert_eq!(normalize_biome(" Temperate Forest "), "temperate-forest");
    }

    #[test]
    fn standard_table_matches_reference_values() {
        let table = BiomeTable::default();
        assert_eq!(table.multiplier("Wetlands"), 2.0);
        assert_eq!(table.multiplier("tropical rainforest"), 2.0);
        assert_eq!(table.multiplier("savanna"), 1.0);
        assert_eq!(table.multiplier("volcanic-ash"), DEFAULT_BIOME_MULTIPLIER);
    }

    #[test]
    fn insert_rejects_multipliers_below_one() {
        let mut table = BiomeTable::empty();
        assert!(table.insert("desert", 0.5).is_err());
        assert!(table.insert("desert", f64::INFINITY).is_err());
        assert!(table.insert("  ", 1.5).is_err());
        table.insert("desert", 1.5).expect("valid");
        assert_eq!(table.multiplier("DESERT"), 1.5);
    }

    #[test]
    fn csv_headers_are_matched_loosely() {
        let csv = "Terrain , Difficulty\nDesert,1.5\nWetlands,3.0\n";
        let table = BiomeTable::from_reader(Cursor::new(csv)).expect("parses");
        assert_eq!(table.len(), 2);
        assert_eq!(table.multiplier("desert"), 1.5);
        assert_eq!(table.multiplier("wetlands"), 3.0);
    }

    #[test]
    fn csv_missing_column_is_reported() {
        let csv = "biome,speed\ndesert,1.5\n";
        let err = BiomeTable::from_reader(Cursor::new(csv)).expect_err("missing column");
        assert!(err.to_string().contains("multiplier"));
    }

    #[test]
    fn csv_bad_number_reports_row() {
        let csv = "biome,multiplier\ndesert,1.5\nswamp,lots\n";
        let err = BiomeTable::from_reader(Cursor::new(csv)).expect_err("bad number");
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn overlay_replaces_existing_entries() {
        let mut custom = BiomeTable::empty();
        custom.insert("wetlands", 3.0).expect("valid");
        let table = BiomeTable::default().overlay(custom);
        assert_eq!(table.multiplier("wetlands"), 3.0);
        assert_eq!(table.multiplier("tundra"), 2.0);
    }
}
