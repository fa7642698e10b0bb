use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::Regex;
use url::{ParseError, Url};

use crate::core::errors::{AppError, AppResult};

const SUPPORTED_PREFIXES: &[&str] = &["file", "design"];

/// Base used only to resolve scheme-less input such as `/file/abc/Title`.
const RELATIVE_BASE: &str = "https://relative.invalid/";

static FILE_ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Returns the decoded path of `raw`, which may be absolute or relative.
///
/// A relative reference without a leading `/` keeps its first segment, so
/// `www.figma.com/file/abc` yields `www.figma.com/file/abc`.
fn url_path(raw: &str) -> AppResult<String> {
    let encoded = match Url::parse(raw) {
        Ok(parsed) => parsed.path().to_string(),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let resolved = Url::parse(RELATIVE_BASE)?.join(raw)?;
            let path = resolved.path();
            if raw.starts_with('/') {
                path.to_string()
            } else {
                path.trim_start_matches('/').to_string()
            }
        }
        Err(err) => return Err(err.into()),
    };
    Ok(percent_decode_str(&encoded).decode_utf8_lossy().into_owned())
}

/// Pulls the file key out of a `https://www.figma.com/{file|design}/{key}/...` URL.
///
/// The key is returned exactly as it appears in the decoded path.
pub fn extract_file_id(figma_url: &str) -> AppResult<String> {
    let path = url_path(figma_url)?;

    // "/design/abc/Title" splits into ["", "design", "abc", "Title"].
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 3 {
        return Err(AppError::MalformedPath);
    }

    let prefix = segments[1];
    let id = segments[2];

    if !SUPPORTED_PREFIXES.contains(&prefix) {
        return Err(AppError::UnsupportedPathPrefix(prefix.to_string()));
    }
    if !FILE_ID_PATTERN.is_match(id) {
        return Err(AppError::InvalidIdentifierFormat(id.to_string()));
    }

    Ok(id.to_string())
}
