use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::config::Config;
use crate::logging::{LogTarget, init_logging};
use crate::query::{SeverityFilter, SortOrder};

/// Valid `--severity` values
const VALID_FILTERS: &[&str] = &["all", "low", "medium", "high"];

#[derive(Parser)]
#[command(name = "incident-board")]
#[command(about = "Terminal dashboard for AI-safety incident reports")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive dashboard (default)
    #[command(visible_alias = "v")]
    View,

    /// Print incidents as a table
    Ls {
        /// Only show this severity: all, low, medium, high
        #[arg(short, long, value_parser = parse_filter)]
        severity: Option<SeverityFilter>,

        /// Report-date order: asc (oldest first) or desc (newest first)
        #[arg(short, long, value_parser = parse_order)]
        order: Option<SortOrder>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub fn run(self) -> crate::error::Result<()> {
        use crate::commands::{LsOptions, cmd_config_show, cmd_ls, cmd_view};

        if let Commands::Completions { shell } = self {
            generate_completions(shell);
            return Ok(());
        }

        let config = Config::load()?;
        let target = match self {
            Commands::View => LogTarget::Tui,
            _ => LogTarget::Stderr,
        };
        init_logging(&config.log, target)?;

        match self {
            Commands::View => cmd_view(&config),
            Commands::Ls {
                severity,
                order,
                json,
            } => cmd_ls(
                &config,
                LsOptions {
                    severity,
                    order,
                    json,
                },
            ),
            Commands::Config { json } => cmd_config_show(&config, json),
            Commands::Completions { .. } => Ok(()),
        }
    }
}

fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_filter(s: &str) -> Result<SeverityFilter, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "severity",
        VALID_FILTERS,
    )
}

fn parse_order(s: &str) -> Result<SortOrder, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "order",
        SortOrder::ALL_STRINGS,
    )
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "incident-board", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_view() {
        let cli = Cli::try_parse_from(["incident-board"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_ls_flags() {
        let cli = Cli::try_parse_from([
            "incident-board",
            "ls",
            "--severity",
            "HIGH",
            "--order",
            "oldest",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Ls {
                severity,
                order,
                json,
            }) => {
                assert_eq!(severity, Some(SeverityFilter::Only(Severity::High)));
                assert_eq!(order, Some(SortOrder::Asc));
                assert!(json);
            }
            _ => panic!("expected ls"),
        }
    }

    #[test]
    fn test_parse_filter_rejects_unknown() {
        let err = parse_filter("critical").unwrap_err();
        assert_eq!(err, "Invalid severity. Must be one of: all, low, medium, high");
    }

    #[test]
    fn test_parse_order_rejects_unknown() {
        assert!(parse_order("sideways").is_err());
    }
}
