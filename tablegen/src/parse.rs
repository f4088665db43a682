/// Dataset loaders: turn the embedded source text into records.
///
/// The wind rose is a tab-separated table. Regions go through two stages:
/// `scrape_options` pulls ordered `(id, name)` keys out of an HTML option
/// list, then `resolve_regions` looks each key up in the subregion side
/// table. A key the table cannot resolve is an error, never a skip.
use std::collections::HashSet;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::dataset::{BearingRecord, Region};

/// Region id -> (subregion id -> subregion name), in source order.
pub type SubregionTable = IndexMap<String, IndexMap<String, String>>;

const NAME_COL: usize = 1;
const ABBREVIATION_COL: usize = 2;
const MIDDLE_AZIMUTH_COL: usize = 5;
const MIN_COLUMNS: usize = MIDDLE_AZIMUTH_COL + 1;

static OPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<option value="(.*?)">(.*?)</option>"#).unwrap());

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected at least {expected} tab-separated columns, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {column} is not a number: '{text}'")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        text: String,
    },
    #[error("region '{name}' ({id}) has no subregion entry")]
    UnresolvedRegion { id: String, name: String },
    #[error("region id '{0}' appears more than once")]
    DuplicateRegionId(String),
    #[error("sample '{0}' must be a JSON object")]
    NotAnObject(String),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse the wind-rose table. The first non-blank line is the header.
pub fn parse_wind_rose(text: &str) -> Result<Vec<BearingRecord>, ParseError> {
    let mut records = Vec::new();
    let mut rows = text
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty());

    // Header
    rows.next();

    for (idx, row) in rows {
        let line = idx + 1;
        let cols: Vec<&str> = row.split('\t').collect();
        if cols.len() < MIN_COLUMNS {
            return Err(ParseError::MalformedRow {
                line,
                expected: MIN_COLUMNS,
                found: cols.len(),
            });
        }
        let raw = cols[MIDDLE_AZIMUTH_COL].trim();
        let midpoint_azimuth = raw.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
            line,
            column: "middle azimuth",
            text: raw.to_string(),
        })?;
        records.push(BearingRecord {
            name: cols[NAME_COL].trim().to_string(),
            abbreviation: cols[ABBREVIATION_COL].trim().to_string(),
            midpoint_azimuth,
        });
    }

    tracing::debug!(count = records.len(), "parsed wind rose");
    Ok(records)
}

/// Extract `(value, label)` pairs from `<option>` tags in document order.
pub fn scrape_options(html: &str) -> Vec<(String, String)> {
    OPTION_RE
        .captures_iter(html)
        .map(|c| (c[1].to_string(), decode_entities(&c[2])))
        .collect()
}

/// Attach subregions to each scraped region. Subregions keep the order of
/// the side table; regions keep the order they were scraped in.
pub fn resolve_regions(
    scraped: &[(String, String)],
    table: &SubregionTable,
) -> Result<Vec<Region>, ParseError> {
    let mut seen = HashSet::new();
    let mut regions = Vec::with_capacity(scraped.len());

    for (id, name) in scraped {
        if !seen.insert(id.as_str()) {
            return Err(ParseError::DuplicateRegionId(id.clone()));
        }
        let children = table
            .get(id)
            .ok_or_else(|| ParseError::UnresolvedRegion {
                id: id.clone(),
                name: name.clone(),
            })?;
        let mut subregions = Vec::with_capacity(children.len());
        for (sub_id, sub_name) in children {
            if !seen.insert(sub_id.as_str()) {
                return Err(ParseError::DuplicateRegionId(sub_id.clone()));
            }
            subregions.push(Region::leaf(sub_id, sub_name));
        }
        regions.push(Region {
            id: id.clone(),
            name: name.clone(),
            subregions,
        });
    }

    let unused = table.keys().filter(|k| !seen.contains(k.as_str())).count();
    if unused > 0 {
        tracing::warn!(unused, "subregion table has entries for unlisted regions");
    }
    tracing::debug!(count = regions.len(), "resolved regions");
    Ok(regions)
}

fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
