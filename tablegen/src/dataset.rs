/// Immutable record types the emitters consume, plus the embedded datasets
/// they are built from. Records are constructed once by the parsers and
/// discarded after emission.
use std::collections::BTreeSet;

use serde::Deserialize;

use crate::parse::{self, ParseError, SubregionTable};

/// Tab-separated 32-point wind rose, North through North by west.
pub const WIND_ROSE_TSV: &str = include_str!("../data/wind_rose.tsv");
/// `<option>` list of the top-level regions, in display order.
pub const REGIONS_HTML: &str = include_str!("../data/regions.html");
/// Side table: region id -> (subregion id -> subregion name).
pub const SUBREGIONS_JSON: &str = include_str!("../data/subregions.json");
/// One forecast and one current-conditions observation sample.
pub const CONDITIONS_JSON: &str = include_str!("../data/conditions.json");

/// One compass point of the wind rose.
#[derive(Debug, Clone, PartialEq)]
pub struct BearingRecord {
    /// English compass-point name, e.g. `North by east`. Dispatch key.
    pub name: String,
    /// Short form, e.g. `NbE`. Only rendered as a comment.
    pub abbreviation: String,
    /// Degrees clockwise from north bisecting the point's range.
    pub midpoint_azimuth: f64,
}

/// A region or a subregion. Subregions carry an empty `subregions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub subregions: Vec<Region>,
}

impl Region {
    pub fn leaf(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subregions: Vec::new(),
        }
    }

    /// Levels below this node: 0 for a leaf, 1 for a region with subregions.
    pub fn depth(&self) -> usize {
        self.subregions
            .iter()
            .map(|s| s.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// The attribute keys present in one weather observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    pub label: String,
    pub keys: BTreeSet<String>,
}

impl FieldSet {
    pub fn new<I, S>(label: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Collect the top-level keys of a JSON object sample.
    pub fn from_sample(
        label: impl Into<String>,
        sample: &serde_json::Value,
    ) -> Result<Self, ParseError> {
        let label = label.into();
        let obj = sample
            .as_object()
            .ok_or_else(|| ParseError::NotAnObject(label.clone()))?;
        Ok(Self {
            label,
            keys: obj.keys().cloned().collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ConditionSamples {
    forecast: serde_json::Value,
    current: serde_json::Value,
}

/// Every dataset the generator knows about, parsed once and then only
/// borrowed by the emitters.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub bearings: Vec<BearingRecord>,
    pub regions: Vec<Region>,
    pub forecast: FieldSet,
    pub current: FieldSet,
}

impl Datasets {
    /// Parse the datasets compiled into this crate.
    pub fn embedded() -> Result<Self, ParseError> {
        Self::from_sources(
            WIND_ROSE_TSV,
            REGIONS_HTML,
            SUBREGIONS_JSON,
            CONDITIONS_JSON,
        )
    }

    pub fn from_sources(
        wind_rose: &str,
        regions_html: &str,
        subregions_json: &str,
        conditions_json: &str,
    ) -> Result<Self, ParseError> {
        let bearings = parse::parse_wind_rose(wind_rose)?;

        let table: SubregionTable = serde_json::from_str(subregions_json)?;
        let scraped = parse::scrape_options(regions_html);
        let regions = parse::resolve_regions(&scraped, &table)?;

        let samples: ConditionSamples = serde_json::from_str(conditions_json)?;
        let forecast = FieldSet::from_sample("forecast", &samples.forecast)?;
        let current = FieldSet::from_sample("current", &samples.current)?;

        tracing::debug!(
            bearings = bearings.len(),
            regions = regions.len(),
            "datasets loaded"
        );

        Ok(Self {
            bearings,
            regions,
            forecast,
            current,
        })
    }
}
