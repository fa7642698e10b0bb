use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("failed to parse URL: {0}")]
    InvalidUrl(String),
    #[error("URL path does not contain enough segments")]
    MalformedPath,
    #[error("URL path must start with '/file/' or '/design/' (found '/{0}/')")]
    UnsupportedPathPrefix(String),
    #[error("file id extracted from URL has an invalid format: '{0}'")]
    InvalidIdentifierFormat(String),
    #[error("failed to build HTTP request: {0}")]
    RequestConstruction(String),
    #[error("failed to execute HTTP request: {0}")]
    Network(String),
    #[error("HTTP error: {status}\nresponse body: {body}")]
    HttpStatus { status: String, body: String },
    #[error("failed to decode JSON response: {0}")]
    Decode(String),
    #[error("page '{0}' was not found")]
    PageNotFound(String),
    #[error("failed to serialize layer information: {0}")]
    Serialize(String),
    #[error("failed to write {path}: {message}")]
    FileWrite { path: String, message: String },
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "USAGE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::MalformedPath => "MALFORMED_PATH",
            Self::UnsupportedPathPrefix(_) => "UNSUPPORTED_PATH_PREFIX",
            Self::InvalidIdentifierFormat(_) => "INVALID_IDENTIFIER_FORMAT",
            Self::RequestConstruction(_) => "REQUEST_CONSTRUCTION_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::HttpStatus { .. } => "HTTP_STATUS_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::PageNotFound(_) => "PAGE_NOT_FOUND",
            Self::Serialize(_) => "SERIALIZE_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
        }
    }

    /// Process exit status reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(value: url::ParseError) -> Self {
        Self::InvalidUrl(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
