//! Hospital Management Console.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser};

mod cli;
mod commands;
mod logging;
mod tables;

use crate::cli::{Cli, LogFormatArg};
use crate::logging::{LogConfig, LogFormat, init_logging};
use hms_persistence::{DEFAULT_STATE_FILE, FileSlot};
use hms_store::Store;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let state_file = cli
        .state_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE));
    let mut store = Store::open(FileSlot::new(state_file));

    let exit_code = match commands::run(cli.command, &mut store) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Command, HospitalCommand};
    use tempfile::tempdir;

    #[test]
    fn full_round_trip_through_the_state_file() {
        let dir = tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path());

        let mut store = Store::open(slot.clone());
        commands::run(
            Command::Hospital {
                command: HospitalCommand::Add {
                    name: "Rajshahi Medical".to_string(),
                    address: "Laxmipur, Rajshahi".to_string(),
                    phone: "01500000000".to_string(),
                },
            },
            &mut store,
        )
        .unwrap();

        let reopened = Store::open(slot);
        assert!(
            reopened
                .state()
                .hospitals
                .iter()
                .any(|h| h.name == "Rajshahi Medical")
        );
    }

    #[test]
    fn update_of_unknown_id_leaves_state_unchanged() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(FileSlot::in_dir(dir.path()));
        let before = store.state().clone();

        commands::run(
            Command::Hospital {
                command: HospitalCommand::Update {
                    id: "no-such-id".to_string(),
                    name: Some("Renamed".to_string()),
                    address: None,
                    phone: None,
                },
            },
            &mut store,
        )
        .unwrap();

        assert_eq!(store.state(), &before);
    }

    #[test]
    fn delete_of_unknown_id_is_a_noop() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(FileSlot::in_dir(dir.path()));
        let before = store.state().clone();

        commands::run(
            Command::Hospital {
                command: HospitalCommand::Delete {
                    id: "no-such-id".to_string(),
                },
            },
            &mut store,
        )
        .unwrap();

        assert_eq!(store.state(), &before);
    }
}
