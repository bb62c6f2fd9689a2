//! Statement types produced by the dump parsers.

use std::fmt;

use thiserror::Error;

/// A single subject-predicate-object statement.
///
/// Each triple is independent: no uniqueness or ordering invariant holds
/// across a stream of them, and a triple is immutable once produced.
///
/// # Examples
///
/// ```
/// use kindred_core::Triple;
///
/// let triple = Triple::new("Q1", "P17", "Q2");
/// assert_eq!(triple.subject, "Q1");
/// assert_eq!(triple.to_string(), "Q1\tP17\tQ2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    /// Entity the statement is about.
    pub subject: String,
    /// Compact property identifier (e.g. `P17`).
    pub predicate: String,
    /// Target entity or literal value.
    pub object: String,
}

impl Triple {
    /// Construct a triple from its three components.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.subject, self.predicate, self.object)
    }
}

/// An unvalidated field list tokenised from one truthy-dump line.
///
/// The truthy parser performs no arity check, so a record may carry fewer or
/// more than three fields. Callers that need a [`Triple`] convert explicitly
/// via [`Record::into_triple`] and decide how to treat irregular records.
///
/// # Examples
///
/// ```
/// use kindred_core::Record;
///
/// let record = Record::new(vec!["Q1".into(), "P17".into(), "Q2".into()]);
/// let triple = record.into_triple()?;
/// assert_eq!(triple.predicate, "P17");
/// # Ok::<(), kindred_core::RecordArityError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record(Vec<String>);

impl Record {
    /// Wrap a tokenised field list.
    pub fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// Borrow the underlying fields in input order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// Number of fields tokenised from the source line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into a [`Triple`], failing when the arity is not three.
    pub fn into_triple(self) -> Result<Triple, RecordArityError> {
        match <[String; 3]>::try_from(self.0) {
            Ok([subject, predicate, object]) => Ok(Triple {
                subject,
                predicate,
                object,
            }),
            Err(fields) => Err(RecordArityError {
                found: fields.len(),
            }),
        }
    }
}

impl From<Triple> for Record {
    fn from(triple: Triple) -> Self {
        Self(vec![triple.subject, triple.predicate, triple.object])
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("\t"))
    }
}

/// Error returned when a [`Record`] does not hold exactly three fields.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected a 3-field statement, found {found} fields")]
pub struct RecordArityError {
    /// Number of fields the record actually carried.
    pub found: usize,
}
