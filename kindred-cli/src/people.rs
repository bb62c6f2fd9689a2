//! People command implementation for the kindred CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use kindred_core::PredicateTable;
use kindred_data::extract_people_relations;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_PEOPLE_DUMP, ARG_PEOPLE_OUTPUT_DIR, CliError, DEFAULT_PEOPLE_DIR, ENV_PEOPLE_DUMP,
    require_existing,
};

/// CLI arguments for the `people` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Stream a gzip-compressed truthy dump and append matching \
                 subject/object pairs to one file per people relationship. \
                 Paths can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Route people relationships to per-relation files"
)]
#[ortho_config(prefix = "KINDRED")]
pub(crate) struct PeopleArgs {
    /// Path to the gzip-compressed truthy dump.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) dump: Option<Utf8PathBuf>,
    /// Directory receiving one file per relationship name.
    #[arg(long = ARG_PEOPLE_OUTPUT_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) output_dir: Option<Utf8PathBuf>,
}

impl PeopleArgs {
    fn into_config(self) -> Result<PeopleConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PeopleConfig::try_from(merged)
    }
}

/// Resolved `people` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PeopleConfig {
    pub(crate) dump: Utf8PathBuf,
    pub(crate) output_dir: Utf8PathBuf,
}

impl PeopleConfig {
    fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.dump, ARG_PEOPLE_DUMP)
    }
}

impl TryFrom<PeopleArgs> for PeopleConfig {
    type Error = CliError;

    fn try_from(args: PeopleArgs) -> Result<Self, Self::Error> {
        let dump = args.dump.ok_or(CliError::MissingArgument {
            field: ARG_PEOPLE_DUMP,
            env: ENV_PEOPLE_DUMP,
        })?;
        let output_dir = args
            .output_dir
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_PEOPLE_DIR));
        Ok(Self { dump, output_dir })
    }
}

pub(crate) fn run_people_with(args: PeopleArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = extract_people_relations(
        config.dump.as_std_path(),
        config.output_dir.as_std_path(),
        &PredicateTable::people(),
    )?;
    writeln!(
        writer,
        "Routed {} people statements into {} ({} discarded)",
        report.total_written(),
        config.output_dir,
        report.discarded
    )
    .map_err(CliError::WriteSummary)?;
    for (relation, count) in &report.written {
        if *count > 0 {
            writeln!(writer, "  {relation}: {count}").map_err(CliError::WriteSummary)?;
        }
    }
    Ok(())
}
