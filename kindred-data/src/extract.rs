//! High-level extraction passes tying a parser to a router.

use std::{fs, path::Path};

use kindred_core::PredicateTable;
use thiserror::Error;

use crate::{
    dump::{self, DumpError},
    route::{AggregateWriter, FanOutReport, FanOutRouter, RouteError},
};

/// Errors raised by an extraction pass.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Reading the dump failed.
    #[error(transparent)]
    Dump(#[from] DumpError),
    /// Writing the output failed.
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Outcome of an aggregate extraction pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractReport {
    /// Triples written to the aggregate output.
    pub triples_written: u64,
    /// Malformed lines skipped by the parser.
    pub lines_skipped: u64,
}

/// Extract every well-formed triple of a simplified dump into one file.
///
/// Streams the gzip-compressed dump at `input` through the space-delimited
/// parser and writes `subject\tpredicate\tobject\n` lines to `output` in
/// input order. Malformed lines are warned about and counted, not fatal.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use kindred_data::extract_all_triples;
///
/// # fn main() -> Result<(), kindred_data::ExtractError> {
/// let report = extract_all_triples(
///     Path::new("simple-dump.txt.gz"),
///     Path::new("all-triples.txt"),
/// )?;
/// println!("wrote {} triples", report.triples_written);
/// # Ok(())
/// # }
/// ```
pub fn extract_all_triples(input: &Path, output: &Path) -> Result<ExtractReport, ExtractError> {
    let mut triples = dump::simple_triples(input)?;
    ensure_parent_dir(output)?;
    let mut writer = AggregateWriter::create(output)?;
    for triple in &mut triples {
        writer.write_triple(&triple?)?;
    }
    let (_, triples_written) = writer.finish()?;
    Ok(ExtractReport {
        triples_written,
        lines_skipped: triples.skipped(),
    })
}

/// Extract people-relationship pairs of a truthy dump into per-relation files.
///
/// Streams the gzip-compressed dump at `input` through the tab-delimited
/// parser and fans matching statements out to one file per relationship name
/// under `output_dir`. Statements with unmapped predicates are discarded;
/// records with irregular arity abort the pass.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use kindred_core::PredicateTable;
/// use kindred_data::extract_people_relations;
///
/// # fn main() -> Result<(), kindred_data::ExtractError> {
/// let report = extract_people_relations(
///     Path::new("latest-truthy.nt.gz"),
///     Path::new("people"),
///     &PredicateTable::people(),
/// )?;
/// println!("routed {} statements", report.total_written());
/// # Ok(())
/// # }
/// ```
pub fn extract_people_relations(
    input: &Path,
    output_dir: &Path,
    table: &PredicateTable,
) -> Result<FanOutReport, ExtractError> {
    let records = dump::truthy_records(input)?;
    let mut router = FanOutRouter::open(table.clone(), output_dir)?;
    for record in records {
        router.route_record(record?)?;
    }
    Ok(router.finish()?)
}

fn ensure_parent_dir(path: &Path) -> Result<(), RouteError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| RouteError::CreateDir {
            source,
            path: parent.to_path_buf(),
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{Compression, write::GzEncoder};
    use rstest::{fixture, rstest};
    use std::{fs, io::Write, path::PathBuf};
    use tempfile::TempDir;

    #[fixture]
    fn working_dir() -> TempDir {
        TempDir::new().expect("failed to create temporary directory")
    }

    fn write_gzip(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let file = fs::File::create(&path).expect("failed to create fixture file");
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(contents.as_bytes())
            .expect("failed to write fixture data");
        encoder.finish().expect("failed to finish gzip stream");
        path
    }

    #[rstest]
    fn aggregate_pass_round_trips_triples(working_dir: TempDir) -> Result<(), ExtractError> {
        let input = write_gzip(
            working_dir.path(),
            "dump.txt.gz",
            "Q1 P19 Q3 .\nmalformed\nQ4 P17 Q5 .\n",
        );
        let output = working_dir.path().join("all-triples.txt");
        let report = extract_all_triples(&input, &output)?;
        assert_eq!(report.triples_written, 2);
        assert_eq!(report.lines_skipped, 1);

        let contents = fs::read_to_string(&output).expect("aggregate output should exist");
        assert_eq!(contents, "Q1\tP19\tQ3\nQ4\tP17\tQ5\n");
        let reparsed: Vec<Vec<&str>> = contents
            .lines()
            .map(|line| line.split('\t').collect())
            .collect();
        assert_eq!(
            reparsed,
            vec![vec!["Q1", "P19", "Q3"], vec!["Q4", "P17", "Q5"]]
        );
        Ok(())
    }

    #[rstest]
    fn aggregate_pass_creates_missing_output_dirs(working_dir: TempDir) -> Result<(), ExtractError> {
        let input = write_gzip(working_dir.path(), "dump.txt.gz", "Q1 P19 Q3 .\n");
        let output = working_dir.path().join("nested/out/all-triples.txt");
        extract_all_triples(&input, &output)?;
        assert!(output.is_file());
        Ok(())
    }

    #[rstest]
    fn people_pass_routes_only_mapped_predicates(working_dir: TempDir) -> Result<(), ExtractError> {
        let input = write_gzip(
            working_dir.path(),
            "truthy.nt.gz",
            concat!(
                "<http://www.wikidata.org/entity/Q1>\t<http://www.wikidata.org/prop/direct/P17>\t<http://www.wikidata.org/entity/Q2> .\n",
                "<http://www.wikidata.org/entity/Q1>\t<http://www.wikidata.org/prop/direct/P999>\t<http://www.wikidata.org/entity/Q9> .\n",
            ),
        );
        let out_dir = working_dir.path().join("people");
        let report = extract_people_relations(&input, &out_dir, &PredicateTable::people())?;
        assert_eq!(report.written.get("hasCountry"), Some(&1));
        assert_eq!(report.discarded, 1);

        let country =
            fs::read_to_string(out_dir.join("hasCountry")).expect("hasCountry channel");
        assert_eq!(country, "Q1\tQ2\n");
        Ok(())
    }

    #[rstest]
    fn truthy_records_can_feed_the_aggregate_writer(
        working_dir: TempDir,
    ) -> Result<(), ExtractError> {
        let input = write_gzip(
            working_dir.path(),
            "truthy.nt.gz",
            "Q1\tP17\tQ2 .\nshort\tline .\n",
        );
        let mut writer = AggregateWriter::new(Vec::new());
        let mut yielded = 0u64;
        for record in dump::truthy_records(&input)? {
            writer.write_record(&record?)?;
            yielded += 1;
        }
        let (buffer, lines) = writer.finish()?;
        assert_eq!(lines, yielded, "every yielded record becomes one line");
        assert_eq!(buffer, b"Q1\tP17\tQ2\nshort\tline\n");
        Ok(())
    }

    #[rstest]
    fn missing_input_is_fatal(working_dir: TempDir) {
        let missing = working_dir.path().join("absent.gz");
        let err = extract_all_triples(&missing, &working_dir.path().join("out.txt"))
            .expect_err("missing dump should fail");
        match err {
            ExtractError::Dump(DumpError::Open { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected open error, got {other:?}"),
        }
    }

    #[rstest]
    fn corrupt_gzip_is_fatal(working_dir: TempDir) {
        let input = working_dir.path().join("corrupt.gz");
        fs::write(&input, b"this is not gzip data").expect("failed to write corrupt fixture");
        let err = extract_all_triples(&input, &working_dir.path().join("out.txt"))
            .expect_err("corrupt dump should fail");
        assert!(matches!(err, ExtractError::Dump(DumpError::Read { .. })));
    }
}
