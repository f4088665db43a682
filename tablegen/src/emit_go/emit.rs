/// Go rendering of the bearing lookup and the region table.
use super::writer::{escape_go, CodeWriter};
use crate::dataset::{BearingRecord, Datasets, Region};
use crate::emit::{
    check_bearings, check_identifier, check_regions, float_literal, DispatchKey, EmitError,
};

/// Name of the generated bearing lookup.
pub const DISPATCH_FN: &str = "WindBearing";
/// Package clause used by [`emit_file`] when none is given.
pub const DEFAULT_PACKAGE: &str = "wind";

/// Emit `func <fn_name>(bearing string) (float64, error)` with one `case`
/// per record, in record order, matching on the field `key` selects.
pub fn emit_bearing_dispatch(
    records: &[BearingRecord],
    fn_name: &str,
    key: DispatchKey,
) -> Result<String, EmitError> {
    check_identifier(fn_name)?;
    check_bearings(records, key)?;

    let mut w = CodeWriter::new();
    w.line(&format!(
        "// {fn_name} returns the middle azimuth, in degrees, of a named compass point."
    ));
    w.open(&format!("func {fn_name}(bearing string) (float64, error) {{"));
    w.open("switch bearing {");
    for r in records {
        w.label(&format!(
            "case \"{}\": // {}",
            escape_go(key.key(r)),
            escape_go(key.comment(r))
        ));
        w.line(&format!("return {}, nil", float_literal(r.midpoint_azimuth)));
    }
    w.label("default:");
    w.line("return 0.0, fmt.Errorf(\"unknown bearing: %s\", bearing)");
    w.close("}");
    w.close("}");

    let code = w.finish();
    tracing::debug!(cases = records.len(), bytes = code.len(), "emitted go dispatch");
    Ok(code)
}

/// Emit `var Regions = &[N]Region{...}` with each region's subregions as a
/// nested slice literal.
pub fn emit_region_table(regions: &[Region]) -> Result<String, EmitError> {
    check_regions(regions)?;

    let mut w = CodeWriter::new();
    w.open(&format!("var Regions = &[{}]Region{{", regions.len()));
    for r in regions {
        let head = format!(
            "Region{{ID: \"{}\", Name: \"{}\",",
            escape_go(&r.id),
            escape_go(&r.name)
        );
        if r.subregions.is_empty() {
            w.line(&format!("{head} Subregions: &[]Region{{}}}},"));
            continue;
        }
        w.open(&head);
        w.open("Subregions: &[]Region{");
        for s in &r.subregions {
            w.line(&format!(
                "Region{{ID: \"{}\", Name: \"{}\"}},",
                escape_go(&s.id),
                escape_go(&s.name)
            ));
        }
        w.close("}},");
        w.dedent();
    }
    w.close("}");

    let code = w.finish();
    tracing::debug!(regions = regions.len(), bytes = code.len(), "emitted go regions");
    Ok(code)
}

/// A complete, gofmt-clean Go file: package clause, the `Region` type, the
/// bearing lookup and the region table.
pub fn emit_file(
    data: &Datasets,
    package: &str,
    key: DispatchKey,
) -> Result<String, EmitError> {
    check_identifier(package)?;
    let dispatch = emit_bearing_dispatch(&data.bearings, DISPATCH_FN, key)?;
    let regions = emit_region_table(&data.regions)?;

    let mut w = CodeWriter::new();
    w.line("// Code generated by tablegen. DO NOT EDIT.");
    w.line("");
    w.line(&format!("package {package}"));
    w.line("");
    w.line("import \"fmt\"");
    w.line("");
    w.line("// Region is a named area. Top-level regions list their subregions.");
    w.open("type Region struct {");
    w.line("ID         string");
    w.line("Name       string");
    w.line("Subregions *[]Region");
    w.close("}");
    w.line("");

    let mut out = w.finish();
    out.push_str(&dispatch);
    out.push('\n');
    out.push_str(&regions);
    Ok(out)
}
