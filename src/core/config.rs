use std::path::PathBuf;

use crate::core::errors::AppResult;
use crate::security::token;

pub const DEFAULT_API_BASE: &str = "https://api.figma.com/v1";
pub const DEFAULT_OUTPUT_FILE: &str = "layers.json";
pub const API_BASE_VAR: &str = "FIGMA_API_BASE";

/// Everything one export run needs, resolved from arguments and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub figma_url: String,
    pub page_name: String,
    pub output_path: PathBuf,
    pub api_base: String,
    pub api_token: String,
}

impl Config {
    pub fn from_env(
        figma_url: String,
        page_name: String,
        output_path: Option<PathBuf>,
    ) -> AppResult<Self> {
        let api_token = token::get_api_token()?;
        let api_base = normalize_api_base(std::env::var(API_BASE_VAR).ok());
        Ok(Self {
            figma_url,
            page_name,
            output_path: output_path.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            api_base,
            api_token,
        })
    }
}

pub fn normalize_api_base(raw: Option<String>) -> String {
    match raw {
        Some(base) if !base.trim().is_empty() => base.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}
