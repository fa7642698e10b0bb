use reqwest::header::HeaderValue;
use serde::Deserialize;

use crate::core::config::DEFAULT_API_BASE;
use crate::core::errors::{AppError, AppResult};
use crate::core::types::FigmaFile;

pub const TOKEN_HEADER: &str = "X-Figma-Token";

/// Source of Figma file documents.
#[allow(async_fn_in_trait)]
pub trait FileFetcher {
    async fn fetch_file(&self, file_id: &str, api_token: &str) -> AppResult<FigmaFile>;
}

#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: reqwest::Client,
    api_base: String,
}

impl FigmaClient {
    pub fn new() -> AppResult<Self> {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    pub fn with_api_base(api_base: impl Into<String>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("figma-layers/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| AppError::RequestConstruction(err.to_string()))?;
        Ok(Self {
            http,
            api_base: api_base.into(),
        })
    }

    pub fn file_endpoint(&self, file_id: &str) -> String {
        format!("{}/files/{}", self.api_base, file_id)
    }
}

impl FileFetcher for FigmaClient {
    async fn fetch_file(&self, file_id: &str, api_token: &str) -> AppResult<FigmaFile> {
        let endpoint = self.file_endpoint(file_id);
        let token = HeaderValue::from_str(api_token)
            .map_err(|err| AppError::RequestConstruction(format!("invalid API token: {err}")))?;
        let request = self
            .http
            .get(&endpoint)
            .header(TOKEN_HEADER, token)
            .build()
            .map_err(|err| AppError::RequestConstruction(err.to_string()))?;

        tracing::debug!(%endpoint, "requesting Figma file");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|err| AppError::Network(err.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Figma API responded");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::HttpStatus {
                status: status.to_string(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| AppError::Network(err.to_string()))?;
        decode_file(&body)
    }
}

/// Decodes a file body of any nesting depth.
pub fn decode_file(body: &[u8]) -> AppResult<FigmaFile> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    deserializer.disable_recursion_limit();
    let file = FigmaFile::deserialize(&mut deserializer)
        .map_err(|err| AppError::Decode(err.to_string()))?;
    deserializer
        .end()
        .map_err(|err| AppError::Decode(err.to_string()))?;
    Ok(file)
}
