use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine the platform config directory")]
    NoConfigDir,
}

#[derive(Debug, thiserror::Error)]
pub enum DuckChatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("chat error: {0}")]
    Chat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("chat.default_model must not be empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: chat.default_model must not be empty"
        );
    }

    #[test]
    fn config_io_error_names_the_file() {
        let err = ConfigError::Io {
            path: PathBuf::from("/etc/duckchat.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "config file /etc/duckchat.toml: denied");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn duckchat_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: DuckChatError = config_err.into();
        assert!(matches!(err, DuckChatError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn duckchat_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed");
        let err: DuckChatError = io_err.into();
        assert!(matches!(err, DuckChatError::Io(_)));
        assert!(err.to_string().contains("stdin closed"));
    }

    #[test]
    fn duckchat_error_chat_display() {
        let err = DuckChatError::Chat("Error: 429 Too Many Requests".into());
        assert_eq!(err.to_string(), "chat error: Error: 429 Too Many Requests");
    }
}
