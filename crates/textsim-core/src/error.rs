//! Error types and exit codes for textsim
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (empty document, unreadable file, limit exceeded)

use thiserror::Error;

/// Exit codes for the textsim CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - empty document, unreadable file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Which document of a comparison an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocSide {
    /// The first document (`file_a` / `textA`)
    A,
    /// The second document (`file_b` / `textB`)
    B,
}

impl std::fmt::Display for DocSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocSide::A => write!(f, "A"),
            DocSide::B => write!(f, "B"),
        }
    }
}

/// Errors that can occur during textsim operations
#[derive(Error, Debug)]
pub enum TextsimError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("invalid {name}: {value} ({reason})")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("document {side} has no usable chunks: {reason}")]
    EmptyDocument { side: DocSide, reason: String },

    #[error("unsupported format: {extension} (supported: {supported})")]
    UnsupportedFormat {
        extension: String,
        supported: String,
    },

    #[error("unreadable {source_name}: {reason}")]
    CorruptFile { source_name: String, reason: String },

    #[error("comparison too large: {chunks_a}x{chunks_b} chunk pairs exceeds limit {limit}")]
    ResourceLimit {
        chunks_a: usize,
        chunks_b: usize,
        limit: usize,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl TextsimError {
    /// Create an error for an invalid request parameter
    pub fn invalid_parameter(
        name: &str,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        TextsimError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an error for a document with no usable chunks
    pub fn empty_document(side: DocSide, reason: impl Into<String>) -> Self {
        TextsimError::EmptyDocument {
            side,
            reason: reason.into(),
        }
    }

    /// Create an error for an unsupported file format
    pub fn unsupported_format(extension: impl Into<String>, supported: &str) -> Self {
        TextsimError::UnsupportedFormat {
            extension: extension.into(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for an unreadable or undecodable file
    pub fn corrupt_file(source_name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        TextsimError::CorruptFile {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TextsimError::UnknownFormat(_)
            | TextsimError::InvalidParameter { .. }
            | TextsimError::UsageError(_) => ExitCode::Usage,

            TextsimError::EmptyDocument { .. }
            | TextsimError::UnsupportedFormat { .. }
            | TextsimError::CorruptFile { .. }
            | TextsimError::ResourceLimit { .. } => ExitCode::Data,

            TextsimError::Io(_)
            | TextsimError::Json(_)
            | TextsimError::Toml(_)
            | TextsimError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TextsimError::UnknownFormat(_) => "unknown_format",
            TextsimError::InvalidParameter { .. } => "invalid_parameter",
            TextsimError::UsageError(_) => "usage_error",
            TextsimError::EmptyDocument { .. } => "empty_document",
            TextsimError::UnsupportedFormat { .. } => "unsupported_format",
            TextsimError::CorruptFile { .. } => "corrupt_file",
            TextsimError::ResourceLimit { .. } => "resource_limit",
            TextsimError::Io(_) => "io_error",
            TextsimError::Json(_) => "json_error",
            TextsimError::Toml(_) => "toml_error",
            TextsimError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for textsim operations
pub type Result<T> = std::result::Result<T, TextsimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        let usage = TextsimError::invalid_parameter("n", 0, "must be >= 1");
        assert_eq!(usage.exit_code(), ExitCode::Usage);

        let data = TextsimError::empty_document(DocSide::A, "no chunks");
        assert_eq!(data.exit_code(), ExitCode::Data);

        let limit = TextsimError::ResourceLimit {
            chunks_a: 1000,
            chunks_b: 1000,
            limit: 250_000,
        };
        assert_eq!(limit.exit_code(), ExitCode::Data);

        let generic = TextsimError::Other("boom".to_string());
        assert_eq!(generic.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_error_json_envelope() {
        let err = TextsimError::empty_document(DocSide::B, "no paragraph met the minimum length");
        let json = err.to_json();

        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "empty_document");
        let message = json["error"]["message"].as_str().unwrap();
        assert!(message.contains("document B"));
    }

    #[test]
    fn test_invalid_parameter_message() {
        let err = TextsimError::invalid_parameter("top_n", 0, "must be >= 1");
        assert_eq!(err.to_string(), "invalid top_n: 0 (must be >= 1)");
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = TextsimError::unsupported_format("pdf", "txt, text, md, markdown");
        assert!(err.to_string().contains("pdf"));
        assert!(err.to_string().contains("txt"));
    }
}
