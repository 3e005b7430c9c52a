use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DonorDriveError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("Could not parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP client could not be built: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown endpoint: {name}")]
    UnknownEndpoint { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Http,
    Parse,
    Configuration,
}

impl DonorDriveError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DonorDriveError::Transport { .. } => ErrorCategory::Network,
            DonorDriveError::Status { .. } => ErrorCategory::Http,
            DonorDriveError::Parse { .. } | DonorDriveError::SerializationError(_) => {
                ErrorCategory::Parse
            }
            DonorDriveError::ClientBuild(_)
            | DonorDriveError::InvalidUrl(_)
            | DonorDriveError::IoError(_)
            | DonorDriveError::ConfigError { .. }
            | DonorDriveError::InvalidConfigValueError { .. }
            | DonorDriveError::MissingConfigError { .. }
            | DonorDriveError::UnknownEndpoint { .. } => ErrorCategory::Configuration,
        }
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DonorDriveError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DonorDriveError::Transport { source, .. } if source.is_timeout() => {
                "The API did not answer in time; raise the timeout or try again later".to_string()
            }
            DonorDriveError::Transport { .. } => {
                "Check the network connection and the configured base URL".to_string()
            }
            DonorDriveError::Status { status, .. } if *status == StatusCode::NOT_FOUND => {
                "Check the participant, team or group identifier".to_string()
            }
            DonorDriveError::Status { status, .. } if *status == StatusCode::TOO_MANY_REQUESTS => {
                "The API is rate limiting requests; wait before polling again".to_string()
            }
            DonorDriveError::Status { status, .. } if status.is_server_error() => {
                "The DonorDrive instance is having trouble; try again later".to_string()
            }
            DonorDriveError::Status { .. } => {
                "Check the request parameters and any configured headers".to_string()
            }
            DonorDriveError::Parse { .. } => {
                "The response did not match the expected schema; check the API version".to_string()
            }
            DonorDriveError::UnknownEndpoint { .. } => {
                "Run `donordrive endpoints` to list the known endpoint names".to_string()
            }
            DonorDriveError::MissingConfigError { field } => {
                format!("Pass the value on the command line or set {field} in the config file")
            }
            _ => "Check the configuration file and command line flags".to_string(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Http => 3,
            ErrorCategory::Parse => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, DonorDriveError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(code: u16) -> DonorDriveError {
        DonorDriveError::Status {
            status: StatusCode::from_u16(code).unwrap(),
            url: "https://example.com/api/teams/1".to_string(),
            body: String::new(),
        }
    }

    #[test]
    fn test_status_errors_are_http_category() {
        let error = status_error(404);
        assert_eq!(error.category(), ErrorCategory::Http);
        assert!(error.is_not_found());
        assert_eq!(error.exit_code(), 3);
        assert!(error.recovery_suggestion().contains("identifier"));
    }

    #[test]
    fn test_server_errors_are_not_not_found() {
        let error = status_error(503);
        assert!(!error.is_not_found());
        assert_eq!(error.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
        assert!(error.recovery_suggestion().contains("try again later"));
    }

    #[test]
    fn test_parse_errors_are_parse_category() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = DonorDriveError::Parse {
            url: "https://example.com".to_string(),
            source,
        };
        assert_eq!(error.category(), ErrorCategory::Parse);
        assert_eq!(error.status(), None);
        assert_eq!(error.exit_code(), 4);
    }

    #[test]
    fn test_missing_config_mentions_field() {
        let error = DonorDriveError::MissingConfigError {
            field: "defaults.team_id".to_string(),
        };
        assert_eq!(error.category(), ErrorCategory::Configuration);
        assert!(error.recovery_suggestion().contains("defaults.team_id"));
        assert_eq!(
            error.to_string(),
            "Missing required configuration: defaults.team_id"
        );
    }
}
