//! Testing infrastructure for quotedesk integration tests.
//!
//! - `TestWorld`: isolated data directory and CLI execution
//! - `assertions`: checks over `--format json` output
//! - `fixtures`: sample forms and pre-seeded storage

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
