//! Parser for the simplified space-delimited dump layout.

use std::io::BufRead;

use kindred_core::Triple;
use log::warn;

use super::DumpError;

/// Lazy iterator over the well-formed triples of a simplified dump.
///
/// Each line splits on its first two spaces only, so objects keep their
/// internal spaces. A line that does not tokenise to exactly three parts is
/// reported through `log::warn!` and skipped; [`SimpleTriples::skipped`]
/// exposes how many lines were dropped that way.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use kindred_data::SimpleTriples;
///
/// let mut triples = SimpleTriples::new(Cursor::new("Q1 P19 Q3 .\n"));
/// let triple = triples.next().expect("one triple")?;
/// assert_eq!(triple.to_string(), "Q1\tP19\tQ3");
/// # Ok::<(), kindred_data::DumpError>(())
/// ```
#[derive(Debug)]
pub struct SimpleTriples<R> {
    reader: R,
    line: String,
    line_number: usize,
    skipped: u64,
    done: bool,
}

impl<R: BufRead> SimpleTriples<R> {
    /// Wrap a buffered reader over decompressed dump text.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
            skipped: 0,
            done: false,
        }
    }

    /// Number of malformed lines skipped so far.
    #[must_use]
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl<R: BufRead> Iterator for SimpleTriples<R> {
    type Item = Result<Triple, DumpError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    self.line_number += 1;
                    match parse_simple_line(&self.line) {
                        Some(triple) => return Some(Ok(triple)),
                        None => self.skipped += 1,
                    }
                }
                Err(source) => {
                    self.done = true;
                    return Some(Err(DumpError::Read {
                        source,
                        line: self.line_number + 1,
                    }));
                }
            }
        }
    }
}

/// Tokenise one simplified dump line, skipping it when malformed.
fn parse_simple_line(line: &str) -> Option<Triple> {
    let statement = line.trim_matches([' ', '\t', '\r', '\n', '.']);
    let parts: Vec<String> = statement
        .splitn(3, ' ')
        .map(|part| part.trim_matches([' ', '\r']).to_owned())
        .collect();
    match <[String; 3]>::try_from(parts) {
        Ok([subject, predicate, object]) => Some(Triple {
            subject,
            predicate,
            object,
        }),
        Err(parts) => {
            warn!("skipping malformed dump line: {parts:?}");
            None
        }
    }
}
