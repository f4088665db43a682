/// Rust emitter: a `match`-based bearing lookup and a `'static` region table,
/// suitable for `include!` from a build script's `OUT_DIR`.
mod emit;
mod writer;

pub use emit::{emit_bearing_dispatch, emit_file, emit_region_table, DISPATCH_FN};
pub use writer::{escape_rs, CodeWriter};
