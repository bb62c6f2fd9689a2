//! Routing of parsed statements to output channels.
//!
//! Two sinks exist: [`AggregateWriter`] writes every statement to a single
//! tab-separated file, and [`FanOutRouter`] distributes subject/object pairs
//! across one file per relationship name. Channels are opened before
//! iteration starts and stay open for the whole pass.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use kindred_core::{PredicateTable, Record, RecordArityError, Triple};
use thiserror::Error;

/// Errors raised while opening or writing output channels.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path:?}")]
    CreateDir {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// Directory that failed to be created.
        path: PathBuf,
    },
    /// A per-relation output channel could not be opened.
    #[error("failed to open output channel {path:?}")]
    OpenChannel {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// File backing the channel.
        path: PathBuf,
    },
    /// Writing to a per-relation channel failed.
    #[error("failed to write to the {relation} channel")]
    WriteChannel {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// Relationship name identifying the channel.
        relation: String,
    },
    /// Writing to the aggregate output failed.
    #[error("failed to write aggregate output")]
    WriteAggregate(#[source] io::Error),
    /// A mapped relation had no registered channel.
    ///
    /// Channels are opened from the table passed at construction, so this
    /// only fires if the router and table fall out of step.
    #[error("no output channel registered for relation {relation}")]
    MissingChannel {
        /// Relationship name that had no backing channel.
        relation: String,
    },
    /// A record could not be destructured into a three-field statement.
    #[error("cannot route a statement with irregular arity")]
    MalformedRecord(#[from] RecordArityError),
}

/// Writer for aggregate mode: every statement on one line, tab-separated.
///
/// # Examples
/// ```
/// use kindred_core::Triple;
/// use kindred_data::AggregateWriter;
///
/// let mut writer = AggregateWriter::new(Vec::new());
/// writer.write_triple(&Triple::new("Q1", "P19", "Q3"))?;
/// let (buffer, lines) = writer.finish()?;
/// assert_eq!(buffer, b"Q1\tP19\tQ3\n");
/// assert_eq!(lines, 1);
/// # Ok::<(), kindred_data::RouteError>(())
/// ```
#[derive(Debug)]
pub struct AggregateWriter<W: Write> {
    writer: W,
    lines: u64,
}

impl AggregateWriter<BufWriter<File>> {
    /// Create (or truncate) the aggregate output file at `path`.
    pub fn create(path: &Path) -> Result<Self, RouteError> {
        let file = File::create(path).map_err(|source| RouteError::OpenChannel {
            source,
            path: path.to_path_buf(),
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> AggregateWriter<W> {
    /// Wrap an arbitrary sink.
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Write a validated triple as `subject\tpredicate\tobject\n`.
    pub fn write_triple(&mut self, triple: &Triple) -> Result<(), RouteError> {
        writeln!(
            self.writer,
            "{}\t{}\t{}",
            triple.subject, triple.predicate, triple.object
        )
        .map_err(RouteError::WriteAggregate)?;
        self.lines += 1;
        Ok(())
    }

    /// Write a raw record, joining however many fields it carries with tabs.
    ///
    /// Irregular records are written as-is; the aggregate output makes no
    /// arity promise for the truthy layout.
    pub fn write_record(&mut self, record: &Record) -> Result<(), RouteError> {
        writeln!(self.writer, "{record}").map_err(RouteError::WriteAggregate)?;
        self.lines += 1;
        Ok(())
    }

    /// Flush the sink and return it together with the line count.
    pub fn finish(mut self) -> Result<(W, u64), RouteError> {
        self.writer.flush().map_err(RouteError::WriteAggregate)?;
        Ok((self.writer, self.lines))
    }
}

/// Per-relation line counts produced by a fan-out pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FanOutReport {
    /// Lines written per relationship name, in stable name order.
    pub written: BTreeMap<String, u64>,
    /// Statements whose predicate was absent from the table.
    pub discarded: u64,
}

impl FanOutReport {
    /// Total lines written across all channels.
    #[must_use]
    pub fn total_written(&self) -> u64 {
        self.written.values().sum()
    }
}

struct Channel {
    writer: BufWriter<File>,
    written: u64,
}

/// Router for filtered mode: one output channel per relationship name.
///
/// All channels open when the router is constructed and accumulate matching
/// statements in input order until [`FanOutRouter::finish`] flushes them.
pub struct FanOutRouter {
    table: PredicateTable,
    channels: BTreeMap<String, Channel>,
    discarded: u64,
}

impl FanOutRouter {
    /// Open one channel per distinct relationship name under `output_dir`.
    ///
    /// The directory is created if missing; existing channel files are
    /// truncated.
    pub fn open(table: PredicateTable, output_dir: &Path) -> Result<Self, RouteError> {
        fs::create_dir_all(output_dir).map_err(|source| RouteError::CreateDir {
            source,
            path: output_dir.to_path_buf(),
        })?;
        let mut channels = BTreeMap::new();
        for name in table.relation_names() {
            let path = output_dir.join(name);
            let file = File::create(&path).map_err(|source| RouteError::OpenChannel {
                source,
                path: path.clone(),
            })?;
            channels.insert(
                name.to_owned(),
                Channel {
                    writer: BufWriter::new(file),
                    written: 0,
                },
            );
        }
        Ok(Self {
            table,
            channels,
            discarded: 0,
        })
    }

    /// Route one triple, returning whether its predicate was mapped.
    ///
    /// A mapped triple appends `subject\tobject\n` to its relation's channel;
    /// an unmapped one is counted and dropped without error.
    pub fn route(&mut self, triple: &Triple) -> Result<bool, RouteError> {
        let Some(relation) = self.table.lookup(&triple.predicate) else {
            self.discarded += 1;
            return Ok(false);
        };
        let channel =
            self.channels
                .get_mut(relation)
                .ok_or_else(|| RouteError::MissingChannel {
                    relation: relation.to_owned(),
                })?;
        writeln!(channel.writer, "{}\t{}", triple.subject, triple.object).map_err(|source| {
            RouteError::WriteChannel {
                source,
                relation: relation.to_owned(),
            }
        })?;
        channel.written += 1;
        Ok(true)
    }

    /// Route a raw truthy record, failing on irregular arity.
    pub fn route_record(&mut self, record: Record) -> Result<bool, RouteError> {
        let triple = record.into_triple()?;
        self.route(&triple)
    }

    /// Flush every channel and summarise the pass.
    pub fn finish(self) -> Result<FanOutReport, RouteError> {
        let mut written = BTreeMap::new();
        for (relation, mut channel) in self.channels {
            channel
                .writer
                .flush()
                .map_err(|source| RouteError::WriteChannel {
                    source,
                    relation: relation.clone(),
                })?;
            written.insert(relation, channel.written);
        }
        Ok(FanOutReport {
            written,
            discarded: self.discarded,
        })
    }
}
