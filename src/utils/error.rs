use http::StatusCode;
use thiserror::Error;

/// How an error is reported back through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input from the caller. Reported with a specific status, nothing logged at error level.
    Client,
    /// The requested record does not exist.
    NotFound,
    /// Backend or internal failure. Logged with detail, reported as a bare 500.
    Server,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Method not allowed: {method}")]
    MethodNotAllowed { method: String },

    #[error("Invalid identifier for {field}: {value:?}")]
    InvalidIdentifier { field: String, value: String },

    #[error("Required field is empty: {field}")]
    EmptyField { field: String },

    #[error("Unsupported content type: {content_type:?}")]
    NotAcceptable { content_type: Option<String> },

    #[error("Request body could not be parsed: {reason}")]
    UnprocessableBody { reason: String },

    #[error("Operation not implemented: {operation}")]
    NotImplemented { operation: String },

    #[error("No record in {table} for key {key}")]
    NotFound { table: String, key: String },

    #[error("Store operation failed: {message}")]
    Store { message: String },

    #[error("Item in {table} is missing attribute {attribute}")]
    MissingAttribute { table: String, attribute: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::MethodNotAllowed { .. }
            | ApiError::InvalidIdentifier { .. }
            | ApiError::EmptyField { .. }
            | ApiError::NotAcceptable { .. }
            | ApiError::UnprocessableBody { .. }
            | ApiError::NotImplemented { .. } => ErrorKind::Client,
            ApiError::NotFound { .. } => ErrorKind::NotFound,
            ApiError::Store { .. }
            | ApiError::MissingAttribute { .. }
            | ApiError::Serialization(_)
            | ApiError::Io(_)
            | ApiError::ConfigFile(_)
            | ApiError::InvalidConfigValue { .. } => ErrorKind::Server,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidIdentifier { .. } | ApiError::EmptyField { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
            ApiError::UnprocessableBody { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid_identifier(field: &str, value: &str) -> Self {
        ApiError::InvalidIdentifier {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        ApiError::Store {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_4xx() {
        let err = ApiError::invalid_identifier("employeeid", "12-34");
        assert_eq!(err.kind(), ErrorKind::Client);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::NotAcceptable {
            content_type: Some("text/plain".to_string()),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_ACCEPTABLE);

        let err = ApiError::MethodNotAllowed {
            method: "PUT".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_not_found_is_distinct_from_server_error() {
        let err = ApiError::NotFound {
            table: "Employees".to_string(),
            key: "123-0000000001".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = ApiError::store("connection reset");
        assert_eq!(err.kind(), ErrorKind::Server);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
