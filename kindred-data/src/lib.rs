//! Dump access and extraction logic for the kindred triple extractor.
//!
//! Responsibilities:
//! - Stream gzip-compressed Wikidata dumps line by line.
//! - Tokenise the two dump layouts into statements.
//! - Route statements to aggregate or per-relation output channels.
//!
//! Boundaries:
//! - Domain types live in `kindred-core`; nothing here mutates them.
//! - No network access; dumps are local files supplied by the caller.
//!
//! Invariants:
//! - Single pass, input order preserved, no state survives a run.

#![forbid(unsafe_code)]

pub mod dump;
mod extract;
pub mod route;

pub use dump::{DumpError, SimpleTriples, TruthyRecords, simple_triples, truthy_records};
pub use extract::{
    ExtractError, ExtractReport, extract_all_triples, extract_people_relations,
};
pub use route::{AggregateWriter, FanOutReport, FanOutRouter, RouteError};
