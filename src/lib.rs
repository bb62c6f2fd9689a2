//! Facade crate for the kindred triple extractor.
//!
//! This crate re-exports the core domain types together with the dump
//! parsers, routers, and extraction passes so applications can depend on a
//! single crate.

#![forbid(unsafe_code)]

pub use kindred_core::{PEOPLE_RELATIONS, PredicateTable, Record, RecordArityError, Triple};
pub use kindred_data::{
    AggregateWriter, DumpError, ExtractError, ExtractReport, FanOutReport, FanOutRouter,
    RouteError, SimpleTriples, TruthyRecords, extract_all_triples, extract_people_relations,
    simple_triples, truthy_records,
};
