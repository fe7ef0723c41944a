// Public fallible APIs in this crate share one concrete error contract (`CragError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod filter;
pub mod finder;
pub mod grade;
pub(crate) mod jsonl;
pub mod models;
pub mod search;
pub mod sort;
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::AppConfig;
pub use corpus::{Corpus, CorpusSource, JsonCorpusSource, RouteEntry};
pub use error::{CragError, ErrorPayload, Result};
pub use finder::RouteFinder;
pub use grade::{Grade, GradeParse, GradeRange, GradeScale, ScaleVariant};
pub use models::{Criterion, FilterSpec, SortKey, SortSpec};
