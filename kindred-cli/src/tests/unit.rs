//! Focused unit tests covering CLI argument and configuration handling.

use super::*;
use camino::Utf8PathBuf;
use clap::Parser as _;
use rstest::rstest;
use tempfile::TempDir;

use crate::people::{PeopleArgs, PeopleConfig};
use crate::tests::helpers::utf8_workspace;

#[rstest]
fn all_subcommand_parses_minimum_arguments() {
    let cli = Cli::try_parse_from(["kindred", "all", "dump.txt.gz"])
        .expect("arguments should parse");
    let Command::All(args) = cli.command else {
        panic!("expected the all subcommand");
    };
    assert_eq!(args.dump.as_deref(), Some(Utf8PathBuf::from("dump.txt.gz").as_path()));
    assert_eq!(args.output, None);
}

#[rstest]
fn all_subcommand_parses_output_override() {
    let cli = Cli::try_parse_from(["kindred", "all", "dump.txt.gz", "--output", "out.tsv"])
        .expect("arguments should parse");
    let Command::All(args) = cli.command else {
        panic!("expected the all subcommand");
    };
    assert_eq!(args.output.as_deref(), Some(Utf8PathBuf::from("out.tsv").as_path()));
}

#[rstest]
fn people_subcommand_parses_output_dir_override() {
    let cli = Cli::try_parse_from([
        "kindred",
        "people",
        "truthy.nt.gz",
        "--output-dir",
        "relations",
    ])
    .expect("arguments should parse");
    let Command::People(args) = cli.command else {
        panic!("expected the people subcommand");
    };
    assert_eq!(args.dump.as_deref(), Some(Utf8PathBuf::from("truthy.nt.gz").as_path()));
    assert_eq!(
        args.output_dir.as_deref(),
        Some(Utf8PathBuf::from("relations").as_path())
    );
}

#[rstest]
fn rejects_missing_subcommand() {
    let outcome = Cli::try_parse_from(["kindred"]);
    assert!(outcome.is_err(), "parser should require a subcommand");
}

#[rstest]
fn all_config_requires_the_dump_path() {
    let err = AllConfig::try_from(AllArgs::default()).expect_err("missing dump should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_ALL_DUMP);
            assert_eq!(env, ENV_ALL_DUMP);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn people_config_requires_the_dump_path() {
    let err = PeopleConfig::try_from(PeopleArgs::default()).expect_err("missing dump should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PEOPLE_DUMP);
            assert_eq!(env, ENV_PEOPLE_DUMP);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn all_config_defaults_the_output_path() {
    let config = AllConfig::try_from(AllArgs {
        dump: Some(Utf8PathBuf::from("dump.txt.gz")),
        output: None,
    })
    .expect("conversion should succeed");
    assert_eq!(config.output, Utf8PathBuf::from(DEFAULT_ALL_OUTPUT));
}

#[rstest]
fn people_config_defaults_the_output_dir() {
    let config = PeopleConfig::try_from(PeopleArgs {
        dump: Some(Utf8PathBuf::from("truthy.nt.gz")),
        output_dir: None,
    })
    .expect("conversion should succeed");
    assert_eq!(config.output_dir, Utf8PathBuf::from(DEFAULT_PEOPLE_DIR));
}

#[rstest]
fn validate_sources_reports_missing_dump() {
    let tmp = TempDir::new().expect("tempdir");
    let workspace = utf8_workspace(&tmp);
    let config = AllConfig {
        dump: workspace.join("absent.gz"),
        output: workspace.join("out.txt"),
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_ALL_DUMP);
            assert_eq!(path, workspace.join("absent.gz"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let tmp = TempDir::new().expect("tempdir");
    let workspace = utf8_workspace(&tmp);
    let config = AllConfig {
        dump: workspace.clone(),
        output: workspace.join("out.txt"),
    };
    let err = config.validate_sources().expect_err("expected failure");
    assert!(matches!(err, CliError::MissingSourceFile { .. }));
}
