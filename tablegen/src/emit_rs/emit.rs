/// Rust rendering of the bearing lookup and the region table.
///
/// The lookup returns `Result<f64, UnknownBearingError>` where the Go
/// rendering returns a `(float64, error)` pair; `unwrap_or_default()` on the
/// result recovers the zero azimuth.
use super::writer::{escape_rs, CodeWriter};
use crate::dataset::{BearingRecord, Datasets, Region};
use crate::emit::{
    check_bearings, check_identifier, check_regions, float_literal, DispatchKey, EmitError,
};

/// Name of the generated bearing lookup.
pub const DISPATCH_FN: &str = "wind_bearing";

const ERROR_TYPE: &str = "UnknownBearingError";

/// Emit the `UnknownBearingError` type and `pub fn <fn_name>(bearing: &str)`
/// with one `match` arm per record, in record order, matching on the field
/// `key` selects.
pub fn emit_bearing_dispatch(
    records: &[BearingRecord],
    fn_name: &str,
    key: DispatchKey,
) -> Result<String, EmitError> {
    check_identifier(fn_name)?;
    check_bearings(records, key)?;

    let mut w = CodeWriter::new();
    emit_error_type(&mut w, fn_name);
    w.line("");

    w.line("/// Middle azimuth, in degrees, of a named compass point.");
    w.open(&format!(
        "pub fn {fn_name}(bearing: &str) -> ::std::result::Result<f64, {ERROR_TYPE}> {{"
    ));
    w.open("match bearing {");
    for r in records {
        w.line(&format!(
            "\"{}\" => Ok({}), // {}",
            escape_rs(key.key(r)),
            float_literal(r.midpoint_azimuth),
            escape_rs(key.comment(r))
        ));
    }
    w.open(&format!("_ => Err({ERROR_TYPE} {{"));
    w.line("bearing: bearing.to_string(),");
    w.close("}),");
    w.close("}");
    w.close("}");

    let code = w.finish();
    tracing::debug!(arms = records.len(), bytes = code.len(), "emitted rust dispatch");
    Ok(code)
}

fn emit_error_type(w: &mut CodeWriter, fn_name: &str) {
    w.line(&format!(
        "/// Returned by [`{fn_name}`] for a name that is not a compass point."
    ));
    w.line("#[derive(Debug, Clone, PartialEq, Eq)]");
    w.open(&format!("pub struct {ERROR_TYPE} {{"));
    w.line("pub bearing: ::std::string::String,");
    w.close("}");
    w.line("");
    w.open(&format!("impl ::std::fmt::Display for {ERROR_TYPE} {{"));
    w.open("fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {");
    w.line("write!(f, \"unknown bearing: {}\", self.bearing)");
    w.close("}");
    w.close("}");
    w.line("");
    w.line(&format!("impl ::std::error::Error for {ERROR_TYPE} {{}}"));
}

/// Emit `pub static REGIONS: [Region; N]` with subregions as nested slices.
pub fn emit_region_table(regions: &[Region]) -> Result<String, EmitError> {
    check_regions(regions)?;

    let mut w = CodeWriter::new();
    w.open(&format!(
        "pub static REGIONS: [Region; {}] = [",
        regions.len()
    ));
    for r in regions {
        w.open("Region {");
        w.line(&format!("id: \"{}\",", escape_rs(&r.id)));
        w.line(&format!("name: \"{}\",", escape_rs(&r.name)));
        if r.subregions.is_empty() {
            w.line("subregions: &[],");
        } else {
            w.open("subregions: &[");
            for s in &r.subregions {
                w.line(&format!(
                    "Region {{ id: \"{}\", name: \"{}\", subregions: &[] }},",
                    escape_rs(&s.id),
                    escape_rs(&s.name)
                ));
            }
            w.close("],");
        }
        w.close("},");
    }
    w.close("];");

    let code = w.finish();
    tracing::debug!(regions = regions.len(), bytes = code.len(), "emitted rust regions");
    Ok(code)
}

/// The `Region` type, the bearing lookup and the region table as one file,
/// ready for `include!`.
pub fn emit_file(data: &Datasets, key: DispatchKey) -> Result<String, EmitError> {
    let dispatch = emit_bearing_dispatch(&data.bearings, DISPATCH_FN, key)?;
    let regions = emit_region_table(&data.regions)?;

    let mut w = CodeWriter::new();
    w.line("// @generated by tablegen. Do not edit.");
    w.line("");
    w.line("/// A named area. Top-level regions list their subregions.");
    w.line("#[derive(Debug, Clone, Copy, PartialEq, Eq)]");
    w.open("pub struct Region {");
    w.line("pub id: &'static str,");
    w.line("pub name: &'static str,");
    w.line("pub subregions: &'static [Region],");
    w.close("}");
    w.line("");

    let mut out = w.finish();
    out.push_str(&dispatch);
    out.push('\n');
    out.push_str(&regions);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rec(name: &str, abbr: &str, az: f64) -> BearingRecord {
        BearingRecord {
            name: name.into(),
            abbreviation: abbr.into(),
            midpoint_azimuth: az,
        }
    }

    #[test]
    fn test_match_arms_in_order() {
        let records = vec![rec("South", "S", 180.0), rec("North", "N", 0.0)];
        let code = emit_bearing_dispatch(&records, DISPATCH_FN, DispatchKey::Name).unwrap();
        let south = code.find("\"South\" => Ok(180.0), // S").unwrap();
        let north = code.find("\"North\" => Ok(0.0), // N").unwrap();
        assert!(south < north);
        assert!(code.contains(
            "pub fn wind_bearing(bearing: &str) -> ::std::result::Result<f64, UnknownBearingError> {"
        ));
    }

    #[test]
    fn test_fallback_arm() {
        let code = emit_bearing_dispatch(&[], DISPATCH_FN, DispatchKey::Name).unwrap();
        assert!(code.contains(
            "        _ => Err(UnknownBearingError {\n            bearing: bearing.to_string(),\n        }),\n"
        ));
        assert!(code.contains("write!(f, \"unknown bearing: {}\", self.bearing)"));
        assert!(code.contains("/// Returned by [`wind_bearing`]"));
    }

    #[test]
    fn test_match_arms_by_abbreviation() {
        let records = vec![rec("West", "W", 270.0)];
        let code =
            emit_bearing_dispatch(&records, DISPATCH_FN, DispatchKey::Abbreviation).unwrap();
        assert!(code.contains("        \"W\" => Ok(270.0), // West\n"));
    }

    #[test]
    fn test_rejects_bad_fn_name() {
        assert!(matches!(
            emit_bearing_dispatch(&[], "wind-bearing", DispatchKey::Name),
            Err(EmitError::InvalidIdentifier(s)) if s == "wind-bearing"
        ));
    }

    #[test]
    fn test_region_table_layout() {
        let regions = vec![
            Region {
                id: "r1".into(),
                name: "Central Cascades".into(),
                subregions: vec![Region::leaf("s1", "Blewett Pass")],
            },
            Region::leaf("r2", "Empty"),
        ];
        let code = emit_region_table(&regions).unwrap();
        assert_eq!(
            code,
            r#"pub static REGIONS: [Region; 2] = [
    Region {
        id: "r1",
        name: "Central Cascades",
        subregions: &[
            Region { id: "s1", name: "Blewett Pass", subregions: &[] },
        ],
    },
    Region {
        id: "r2",
        name: "Empty",
        subregions: &[],
    },
];
"#
        );
    }

    #[test]
    fn test_file_declares_region_type() {
        let data = Datasets::embedded().unwrap();
        let code = emit_file(&data, DispatchKey::Name).unwrap();
        assert!(code.starts_with("// @generated by tablegen. Do not edit.\n"));
        assert!(code.contains("pub subregions: &'static [Region],\n"));
        assert!(code.contains("pub static REGIONS: [Region; 11] = ["));
        assert!(code.contains("\"Northeast\" => Ok(45.0), // NE"));
    }
}
