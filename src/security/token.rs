use crate::core::errors::{AppError, AppResult};

pub const API_TOKEN_VAR: &str = "FIGMA_API_TOKEN";

pub fn get_api_token() -> AppResult<String> {
    api_token_from(std::env::var(API_TOKEN_VAR).ok())
}

/// Accepts the raw variable value; blank tokens count as missing.
pub fn api_token_from(raw: Option<String>) -> AppResult<String> {
    match raw {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AppError::Config(format!(
            "the {API_TOKEN_VAR} environment variable is not set"
        ))),
    }
}
