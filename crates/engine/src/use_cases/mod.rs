//! Use cases - batch pipeline orchestration.

pub mod convert;

pub use convert::{ConvertService, RunSummary};
