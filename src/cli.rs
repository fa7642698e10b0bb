//! Command-line surface.
//!
//! Usage:
//!   figma-layers `<FIGMA_URL>` `<PAGE_NAME>` [--output `<PATH>`]

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{error::ErrorKind, Arg, Command};

use crate::core::errors::{AppError, AppResult};

pub const USAGE: &str = "usage: figma-layers <FIGMA_URL> <PAGE_NAME> [--output <PATH>]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub figma_url: String,
    pub page_name: String,
    pub output: Option<PathBuf>,
}

/// Outcome of argument parsing that is not an export run.
#[derive(Debug)]
pub enum CliExit {
    /// `--help` or `--version` text, printed with a zero exit status.
    Info(String),
    Error(AppError),
}

impl From<AppError> for CliExit {
    fn from(value: AppError) -> Self {
        Self::Error(value)
    }
}

fn command() -> Command {
    Command::new("figma-layers")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Flatten the layers of a Figma page into a JSON file")
        .override_usage("figma-layers <FIGMA_URL> <PAGE_NAME> [--output <PATH>]")
        .arg(
            Arg::new("figma_url")
                .value_name("FIGMA_URL")
                .help("URL of the Figma file (/file/<id>/... or /design/<id>/...)")
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("page_name")
                .value_name("PAGE_NAME")
                .help("Exact name of the page to export")
                .required(true)
                .allow_hyphen_values(true)
                .index(2),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Where to write the layer list (default: layers.json)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

pub fn parse_args<I, T>(args: I) -> Result<CliArgs, CliExit>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => {
            return Err(match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    CliExit::Info(err.render().to_string())
                }
                _ => CliExit::Error(AppError::Usage(USAGE.to_string())),
            })
        }
    };

    let required = |name: &str| -> AppResult<String> {
        matches
            .get_one::<String>(name)
            .cloned()
            .ok_or_else(|| AppError::Usage(USAGE.to_string()))
    };

    Ok(CliArgs {
        figma_url: required("figma_url")?,
        page_name: required("page_name")?,
        output: matches.get_one::<PathBuf>("output").cloned(),
    })
}
