//! Region membership sets and aggregate-geography exclusions.
//!
//! Regions are independent aggregation views, not a partition: a country
//! listed in two regions contributes to both. The default set mirrors the
//! groupings published alongside the panel (ASEAN, EU27, G7); alternates can
//! be loaded from a TOML file through [`RegionConfig`].

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RegionConfigError, Result};

const ASEAN: [&str; 10] = [
    "BRN", "KHM", "IDN", "LAO", "MYS", "MMR", "PHL", "SGP", "THA", "VNM",
];

const EU27: [&str; 27] = [
    "AUT", "BEL", "BGR", "HRV", "CYP", "CZE", "DNK", "EST", "FIN", "FRA", "DEU", "GRC", "HUN",
    "IRL", "ITA", "LVA", "LTU", "LUX", "MLT", "NLD", "POL", "PRT", "ROU", "SVK", "SVN", "ESP",
    "SWE",
];

const G7: [&str; 7] = ["CAN", "FRA", "DEU", "ITA", "JPN", "GBR", "USA"];

/// A named multi-country grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDefinition {
    pub name: String,
    pub members: BTreeSet<String>,
}

impl RegionDefinition {
    /// Builds a region, trimming the name and trimming and upper-casing
    /// member codes.
    pub fn new<I, S>(name: impl AsRef<str>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.as_ref().trim().to_string(),
            members: members
                .into_iter()
                .map(|code| code.as_ref().trim().to_uppercase())
                .filter(|code| !code.is_empty())
                .collect(),
        }
    }

    /// Fixed membership size, reported as `num_members` for every year.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, iso3: &str) -> bool {
        self.members.contains(iso3)
    }
}

/// Ordered collection of regions; definition order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSet {
    regions: Vec<RegionDefinition>,
}

impl Default for RegionSet {
    fn default() -> Self {
        Self {
            regions: vec![
                RegionDefinition::new("ASEAN", ASEAN),
                RegionDefinition::new("EU27", EU27),
                RegionDefinition::new("G7", G7),
            ],
        }
    }
}

impl RegionSet {
    /// Validates and wraps a list of region definitions.
    ///
    /// # Errors
    ///
    /// Returns [`RegionConfigError::Invalid`] when the list is empty, a name is
    /// blank or repeated, or a region has no members.
    pub fn new(mut regions: Vec<RegionDefinition>) -> Result<Self> {
        if regions.is_empty() {
            return Err(RegionConfigError::invalid("at least one region is required"));
        }
        let mut names = BTreeSet::new();
        for region in &mut regions {
            region.name = region.name.trim().to_string();
            let name = region.name.as_str();
            if name.is_empty() {
                return Err(RegionConfigError::invalid("region name must not be empty"));
            }
            if !names.insert(name.to_string()) {
                return Err(RegionConfigError::invalid(format!(
                    "duplicate region name: {name}"
                )));
            }
            if region.members.is_empty() {
                return Err(RegionConfigError::invalid(format!(
                    "region {name} has no members"
                )));
            }
        }
        Ok(Self { regions })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionDefinition> {
        self.regions.iter()
    }

    pub fn get(&self, name: &str) -> Option<&RegionDefinition> {
        self.regions.iter().find(|region| region.name == name)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Geographies that are themselves aggregates and must not be summed
/// alongside their constituent countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateExclusions {
    #[serde(default)]
    pub iso3_codes: BTreeSet<String>,
    #[serde(default)]
    pub country_labels: BTreeSet<String>,
}

impl Default for AggregateExclusions {
    fn default() -> Self {
        Self {
            iso3_codes: ["WLD", "SSF"].into_iter().map(String::from).collect(),
            country_labels: ["World", "Sub-Saharan Africa"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl AggregateExclusions {
    /// True if either the code or the label names an aggregate geography.
    pub fn is_aggregate(&self, iso3: &str, country: &str) -> bool {
        self.iso3_codes.contains(iso3) || self.country_labels.contains(country)
    }
}

/// On-disk region configuration.
///
/// ```toml
/// [[regions]]
/// name = "NORDIC"
/// members = ["DNK", "FIN", "ISL", "NOR", "SWE"]
///
/// [exclusions]
/// iso3_codes = ["WLD"]
/// country_labels = ["World"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RegionConfig {
    pub regions: Vec<RegionEntry>,
    #[serde(default)]
    pub exclusions: Option<AggregateExclusions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionEntry {
    pub name: String,
    pub members: Vec<String>,
}

impl RegionConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| RegionConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| RegionConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates the document; exclusions default when the table is absent.
    pub fn into_parts(self) -> Result<(RegionSet, AggregateExclusions)> {
        let regions = self
            .regions
            .into_iter()
            .map(|entry| RegionDefinition::new(&entry.name, entry.members))
            .collect();
        let regions = RegionSet::new(regions)?;
        Ok((regions, self.exclusions.unwrap_or_default()))
    }
}

/// Loads regions and exclusions from `path`, or the built-in defaults.
pub fn load_regions(path: Option<&Path>) -> Result<(RegionSet, AggregateExclusions)> {
    match path {
        Some(path) => RegionConfig::load(path)?.into_parts(),
        None => Ok((RegionSet::default(), AggregateExclusions::default())),
    }
}
