//! Parser for the truthy N-Triples dump layout.

use std::io::BufRead;

use kindred_core::Record;

use super::DumpError;

const DIRECT_PROP_PREFIX: &str = "http://www.wikidata.org/prop/direct/";
const ENTITY_PREFIX: &str = "http://www.wikidata.org/entity/";

/// Lazy iterator over the records of a truthy dump.
///
/// One record is yielded per input line, in input order. The layout performs
/// no arity validation: a line tokenising to fewer or more than three fields
/// is yielded as-is, and it is the consumer's decision how to treat it.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use kindred_data::TruthyRecords;
///
/// let line = "<http://www.wikidata.org/entity/Q1>\t\
///             <http://www.wikidata.org/prop/direct/P17>\t\
///             <http://www.wikidata.org/entity/Q2>\n";
/// let mut records = TruthyRecords::new(Cursor::new(line));
/// let record = records.next().expect("one record")?;
/// assert_eq!(record.fields(), ["Q1", "P17", "Q2"]);
/// # Ok::<(), kindred_data::DumpError>(())
/// ```
#[derive(Debug)]
pub struct TruthyRecords<R> {
    reader: R,
    line: String,
    line_number: usize,
    done: bool,
}

impl<R: BufRead> TruthyRecords<R> {
    /// Wrap a buffered reader over decompressed dump text.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for TruthyRecords<R> {
    type Item = Result<Record, DumpError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line_number += 1;
                Some(Ok(parse_truthy_line(&self.line)))
            }
            Err(source) => {
                self.done = true;
                Some(Err(DumpError::Read {
                    source,
                    line: self.line_number + 1,
                }))
            }
        }
    }
}

/// Tokenise one truthy dump line into an unvalidated record.
///
/// Surrounding whitespace, carriage returns, and the statement-terminating
/// period are stripped from the line; each tab-separated field loses its
/// angle brackets and at most one occurrence of each known IRI prefix.
fn parse_truthy_line(line: &str) -> Record {
    let statement = line.trim_matches([' ', '\r', '\n', '.']);
    let fields = statement
        .split('\t')
        .map(|field| {
            let field = field.trim_matches([' ', '\r', '<', '>']);
            let field = field.strip_prefix(DIRECT_PROP_PREFIX).unwrap_or(field);
            let field = field.strip_prefix(ENTITY_PREFIX).unwrap_or(field);
            field.to_owned()
        })
        .collect();
    Record::new(fields)
}
