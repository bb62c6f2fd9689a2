//! Core domain types for the kindred triple extractor.
//!
//! These models describe single knowledge-graph statements and the fixed
//! people-relationship vocabulary. Constructors return `Result` where input
//! can be malformed so downstream components surface bad data early.

#![forbid(unsafe_code)]

mod relation;
mod statement;

pub use relation::{PEOPLE_RELATIONS, PredicateTable};
pub use statement::{Record, RecordArityError, Triple};
