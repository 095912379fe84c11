// File: crates/nine-slice-core/src/lib.rs
// Summary: Core library entry point; exports the nine-slice inset value type.

pub mod types;

pub use types::NineSlice;
