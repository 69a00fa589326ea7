//! Mobforge Engine library.
//!
//! This crate contains everything side-effectful around the pure mapping
//! core in `mobforge-domain`:
//!
//! - `infrastructure/` - configuration, the Divine-Pride HTTP client, the
//!   item-catalog adapter, the monster-document store, and flat-file output
//! - `use_cases/` - the batch conversion pipeline driver

pub mod infrastructure;
pub mod use_cases;

pub use use_cases::convert::{ConvertService, RunSummary};
