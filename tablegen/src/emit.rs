/// Target-independent pieces shared by the per-language emitters: the error
/// type, the pre-emission checks, and target selection.
use std::collections::HashMap;
use std::fmt;

use crate::dataset::{BearingRecord, Region};
use crate::{emit_go, emit_rs};

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("bearing '{name}' listed twice (records {first} and {second})")]
    DuplicateCase {
        name: String,
        first: usize,
        second: usize,
    },
    #[error("bearing '{name}' has a non-finite azimuth")]
    NonFinite { name: String },
    #[error("region '{0}' nests deeper than region -> subregion")]
    TooDeep(String),
    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),
}

/// Which record field a generated lookup matches on. The other field is
/// rendered as the trailing comment of each case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchKey {
    /// Full compass-point name, e.g. `Northeast`.
    #[default]
    Name,
    /// Short form, e.g. `NE`.
    Abbreviation,
}

impl DispatchKey {
    pub fn parse(s: &str) -> Option<DispatchKey> {
        match s {
            "name" => Some(DispatchKey::Name),
            "abbreviation" | "abbr" => Some(DispatchKey::Abbreviation),
            _ => None,
        }
    }

    /// The string a case matches.
    pub fn key<'a>(&self, r: &'a BearingRecord) -> &'a str {
        match self {
            DispatchKey::Name => &r.name,
            DispatchKey::Abbreviation => &r.abbreviation,
        }
    }

    /// The string shown in the trailing comment.
    pub fn comment<'a>(&self, r: &'a BearingRecord) -> &'a str {
        match self {
            DispatchKey::Name => &r.abbreviation,
            DispatchKey::Abbreviation => &r.name,
        }
    }
}

/// Language the tables are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Go,
    Rust,
}

impl Target {
    pub fn parse(s: &str) -> Option<Target> {
        match s {
            "go" | "golang" => Some(Target::Go),
            "rust" | "rs" => Some(Target::Rust),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Go => "go",
            Target::Rust => "rust",
        }
    }

    pub fn emit_bearings(
        &self,
        records: &[BearingRecord],
        key: DispatchKey,
    ) -> Result<String, EmitError> {
        match self {
            Target::Go => emit_go::emit_bearing_dispatch(records, emit_go::DISPATCH_FN, key),
            Target::Rust => emit_rs::emit_bearing_dispatch(records, emit_rs::DISPATCH_FN, key),
        }
    }

    pub fn emit_regions(&self, regions: &[Region]) -> Result<String, EmitError> {
        match self {
            Target::Go => emit_go::emit_region_table(regions),
            Target::Rust => emit_rs::emit_region_table(regions),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reject records that would produce an unreachable or uncompilable case.
/// Uniqueness is checked on the field the cases match.
pub fn check_bearings(records: &[BearingRecord], key: DispatchKey) -> Result<(), EmitError> {
    let mut first_seen: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    for (i, r) in records.iter().enumerate() {
        if !r.midpoint_azimuth.is_finite() {
            return Err(EmitError::NonFinite {
                name: r.name.clone(),
            });
        }
        let k = key.key(r);
        if let Some(&first) = first_seen.get(k) {
            return Err(EmitError::DuplicateCase {
                name: k.to_string(),
                first,
                second: i,
            });
        }
        first_seen.insert(k, i);
    }
    Ok(())
}

/// Regions may carry subregions; subregions may not.
pub fn check_regions(regions: &[Region]) -> Result<(), EmitError> {
    match regions.iter().find(|r| r.depth() > 1) {
        Some(r) => Err(EmitError::TooDeep(r.name.clone())),
        None => Ok(()),
    }
}

/// Accept `[A-Za-z_][A-Za-z0-9_]*`, the identifiers both targets share.
pub fn check_identifier(ident: &str) -> Result<(), EmitError> {
    let mut chars = ident.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(EmitError::InvalidIdentifier(ident.to_string()))
    }
}

/// Shortest round-trip rendering of an azimuth, always with a fractional
/// part so it reads as a float literal in every target.
pub fn float_literal(v: f64) -> String {
    format!("{v:?}")
}
