use thiserror::Error;

/// Machine-readable classification of a pagination failure.
///
/// The first three are client errors; `Unexpected` carries the underlying
/// fault as its source and needs inspection to decide 4xx vs 5xx.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidToken,
    InvalidSort,
    InvalidLimit,
    Unexpected,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidToken => "INVALID_TOKEN",
            ErrorCode::InvalidSort => "INVALID_SORT",
            ErrorCode::InvalidLimit => "INVALID_LIMIT",
            ErrorCode::Unexpected => "UNEXPECTED_ERROR",
        }
    }
}

/// The single error type surfaced by the pagination engine.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PaginationError {
    pub code: ErrorCode,
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PaginationError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        PaginationError {
            code,
            message: message.into(),
            source: None,
        }
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        PaginationError::new(ErrorCode::InvalidToken, message)
    }

    pub fn invalid_sort(message: impl Into<String>) -> Self {
        PaginationError::new(ErrorCode::InvalidSort, message)
    }

    pub fn invalid_limit(message: impl Into<String>) -> Self {
        PaginationError::new(ErrorCode::InvalidLimit, message)
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        PaginationError::new(ErrorCode::Unexpected, message)
    }

    pub fn with_source(
        mut self,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}
