//! Static reference-table code generator.
//!
//! Embedded datasets (a 32-point wind rose, a two-level region tree, two
//! weather-observation samples) are parsed once into [`Datasets`] and then
//! rendered by pure emitters into Go or Rust source text.
pub mod dataset;
pub mod diff;
pub mod emit;
pub mod emit_go;
pub mod emit_rs;
pub mod output;
pub mod parse;

pub use dataset::{BearingRecord, Datasets, FieldSet, Region};
pub use diff::{diff, FieldDiff};
pub use emit::{DispatchKey, EmitError, Target};
pub use parse::ParseError;

/// Any failure of a generation pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot load dataset: {0}")]
    Parse(#[from] ParseError),
    #[error("cannot emit table: {0}")]
    Emit(#[from] EmitError),
    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}
