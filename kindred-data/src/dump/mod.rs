//! Streaming access to gzip-compressed Wikidata dump files.
//!
//! Two line layouts exist in the wild: the truthy N-Triples export
//! (tab-delimited, IRI-bracketed) and the simplified export
//! (space-delimited, period-terminated). Each gets its own lazy parser;
//! both stream the decompressed file without loading it into memory.

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

mod simple;
mod truthy;

pub use simple::SimpleTriples;
pub use truthy::TruthyRecords;

/// Buffered reader over the decompressed bytes of a dump file.
pub type DumpReader = BufReader<MultiGzDecoder<File>>;

/// Errors raised while opening or streaming a dump file.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The dump file could not be opened.
    #[error("failed to open dump file at {path:?}")]
    Open {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// Path that failed to open.
        path: PathBuf,
    },
    /// Reading or decompressing the dump failed mid-stream.
    #[error("failed to read dump data at line {line}")]
    Read {
        /// Underlying I/O or gzip failure.
        #[source]
        source: io::Error,
        /// One-based line number where the failure surfaced.
        line: usize,
    },
}

/// Open a gzip-compressed dump for streaming.
///
/// Decompression is lazy: a corrupt archive surfaces as a
/// [`DumpError::Read`] from the first read, not from this call.
pub fn open_dump(path: &Path) -> Result<DumpReader, DumpError> {
    let file = File::open(path).map_err(|source| DumpError::Open {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(BufReader::new(MultiGzDecoder::new(file)))
}

/// Stream a truthy (tab-delimited) dump as unvalidated records.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use kindred_data::truthy_records;
///
/// # fn main() -> Result<(), kindred_data::DumpError> {
/// for record in truthy_records(Path::new("latest-truthy.nt.gz"))? {
///     let record = record?;
///     println!("{} fields", record.len());
/// }
/// # Ok(())
/// # }
/// ```
pub fn truthy_records(path: &Path) -> Result<TruthyRecords<DumpReader>, DumpError> {
    open_dump(path).map(TruthyRecords::new)
}

/// Stream a simplified (space-delimited) dump as validated triples.
///
/// Malformed lines are reported through `log::warn!` and skipped; the
/// iterator only yields three-field statements.
pub fn simple_triples(path: &Path) -> Result<SimpleTriples<DumpReader>, DumpError> {
    open_dump(path).map(SimpleTriples::new)
}
