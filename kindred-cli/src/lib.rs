//! Command-line interface for the kindred triple extractor.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::{io::Write, sync::Arc};
use thiserror::Error;

mod people;

use people::{PeopleArgs, run_people_with};

const ARG_ALL_DUMP: &str = "dump";
const ARG_ALL_OUTPUT: &str = "output";
const ENV_ALL_DUMP: &str = "KINDRED_CMDS_ALL_DUMP";
const ARG_PEOPLE_DUMP: &str = "dump";
const ARG_PEOPLE_OUTPUT_DIR: &str = "output-dir";
const ENV_PEOPLE_DUMP: &str = "KINDRED_CMDS_PEOPLE_DUMP";
const DEFAULT_ALL_OUTPUT: &str = "all-triples.txt";
const DEFAULT_PEOPLE_DIR: &str = "people";

/// Run the kindred CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::All(args) => run_all_with(args, &mut stdout),
        Command::People(args) => run_people_with(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "kindred",
    about = "Extract subject-predicate-object triples from compressed Wikidata dumps",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write every triple of a simplified dump to one aggregate file.
    All(AllArgs),
    /// Route people-relationship statements of a truthy dump to per-relation files.
    People(PeopleArgs),
}

/// CLI arguments for the `all` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Stream a gzip-compressed space-delimited dump and write every \
                 well-formed triple to a single tab-separated file. Paths can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Extract every triple into one aggregate file"
)]
#[ortho_config(prefix = "KINDRED")]
struct AllArgs {
    /// Path to the gzip-compressed simplified dump.
    #[arg(value_name = "path")]
    #[serde(default)]
    dump: Option<Utf8PathBuf>,
    /// Destination for the aggregate triples file.
    #[arg(long = ARG_ALL_OUTPUT, value_name = "path")]
    #[serde(default)]
    output: Option<Utf8PathBuf>,
}

impl AllArgs {
    fn into_config(self) -> Result<AllConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AllConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AllConfig {
    dump: Utf8PathBuf,
    output: Utf8PathBuf,
}

impl AllConfig {
    fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.dump, ARG_ALL_DUMP)
    }
}

impl TryFrom<AllArgs> for AllConfig {
    type Error = CliError;

    fn try_from(args: AllArgs) -> Result<Self, Self::Error> {
        let dump = args.dump.ok_or(CliError::MissingArgument {
            field: ARG_ALL_DUMP,
            env: ENV_ALL_DUMP,
        })?;
        let output = args
            .output
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_ALL_OUTPUT));
        Ok(Self { dump, output })
    }
}

fn run_all_with(args: AllArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report =
        kindred_data::extract_all_triples(config.dump.as_std_path(), config.output.as_std_path())?;
    writeln!(
        writer,
        "Wrote {} triples to {} ({} malformed lines skipped)",
        report.triples_written, config.output, report.lines_skipped
    )
    .map_err(CliError::WriteSummary)
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        })
    }
}

/// Errors emitted by the kindred CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Argument name the user should supply.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument name the path came from.
        field: &'static str,
        /// Path that failed validation.
        path: Utf8PathBuf,
    },
    /// The extraction pass itself failed.
    #[error(transparent)]
    Extraction(#[from] kindred_data::ExtractError),
    /// Writing the run summary failed.
    #[error("failed to write summary output")]
    WriteSummary(#[source] std::io::Error),
}

#[cfg(test)]
mod tests;
