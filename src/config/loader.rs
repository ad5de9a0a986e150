//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), routes = config.routes.len(), "Configuration loaded");
    Ok(config)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;

    const SAMPLE: &str = r#"
[matching]
strict = true

[history]
base = "/app"

[observability]
log_level = "debug"
log_format = "json"

[[routes]]
path = "/"
name = "Login"
view = "LoginView"

[[routes]]
path = "/rooms"
name = "Rooms"
view = "RoomsView"
"#;

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE).unwrap();
        assert!(config.matching.strict);
        assert!(!config.matching.sensitive);
        assert_eq!(config.history.base, "/app");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[1].view, "RoomsView");
    }

    #[test]
    fn test_defaults_for_empty_input() {
        let config = parse_config("").unwrap();
        assert!(config.routes.is_empty());
        assert_eq!(config.history.base, "/");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[[routes]]\npath = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error() {
        let err = parse_config(
            "[[routes]]\npath = \"/\"\nname = \"A\"\nview = \"V\"\n\
             [[routes]]\npath = \"/b\"\nname = \"A\"\nview = \"V\"\n",
        )
        .unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("spa_router_loader_test.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.routes[0].name, "Login");
        std::fs::remove_file(&path).unwrap_or_default();

        let missing = load_config(Path::new("/nonexistent/spa_router.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }
}
