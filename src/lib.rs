pub mod cli;
pub mod commands;
pub mod core;
pub mod extract;
pub mod providers;
pub mod security;

use std::ffi::OsString;

use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use crate::cli::CliExit;
use crate::core::{config::Config, errors::AppResult, types::ExportSummary};
use crate::providers::figma::FigmaClient;

const HTTP_CRATES_QUIET: &str = "reqwest=warn,hyper=warn,hyper_util=warn";

fn log_level_from(raw: Option<String>) -> LevelFilter {
    match raw
        .unwrap_or_else(|| "info".to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    }
}

fn http_debug_enabled() -> bool {
    matches!(
        std::env::var("FIGMA_LAYERS_HTTP_DEBUG")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Installs the stderr subscriber; stdout is left to user-facing messages.
pub fn init_tracing() {
    let level = log_level_from(std::env::var("FIGMA_LAYERS_LOG").ok());
    let extra = if http_debug_enabled() { "" } else { HTTP_CRATES_QUIET };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(extra);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn export_from_args(args: cli::CliArgs) -> AppResult<ExportSummary> {
    let config = Config::from_env(args.figma_url, args.page_name, args.output)?;
    let client = FigmaClient::with_api_base(config.api_base.clone())?;
    commands::export::run_export(&config, &client).await
}

/// Runs the tool end to end and returns the process exit status.
pub async fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    init_tracing();

    let args = match cli::parse_args(args) {
        Ok(args) => args,
        Err(CliExit::Info(text)) => {
            print!("{text}");
            return 0;
        }
        Err(CliExit::Error(err)) => {
            println!("{err}");
            return err.exit_code();
        }
    };

    match export_from_args(args).await {
        Ok(summary) => {
            println!("layer information written to {}", summary.output_path);
            0
        }
        Err(err) => {
            tracing::error!(code = err.code(), "export failed");
            println!("{err}");
            err.exit_code()
        }
    }
}
