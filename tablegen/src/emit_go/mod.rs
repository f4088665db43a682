/// Go emitter: a `switch`-based bearing lookup and a `Region` array literal.
mod emit;
mod writer;

pub use emit::{emit_bearing_dispatch, emit_file, emit_region_table, DEFAULT_PACKAGE, DISPATCH_FN};
pub use writer::{escape_go, CodeWriter};
