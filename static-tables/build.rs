/// Build script: renders the embedded tablegen datasets as Rust and writes
/// them to OUT_DIR for inclusion in lib.rs.
fn main() {
    use tablegen::DispatchKey;

    println!("cargo:rerun-if-changed=../tablegen/data");

    let data = tablegen::Datasets::embedded().expect("Cannot parse tablegen datasets");
    let rs_code = tablegen::emit_rs::emit_file(&data, DispatchKey::Name)
        .expect("Cannot emit Rust tables");
    let abbr_code = tablegen::emit_rs::emit_bearing_dispatch(
        &data.bearings,
        tablegen::emit_rs::DISPATCH_FN,
        DispatchKey::Abbreviation,
    )
    .expect("Cannot emit abbreviation lookup");

    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_dir = std::path::Path::new(&out_dir);
    std::fs::write(out_dir.join("tables.rs"), rs_code).expect("Cannot write generated tables.rs");
    std::fs::write(out_dir.join("abbreviations.rs"), abbr_code)
        .expect("Cannot write generated abbreviations.rs");
}
