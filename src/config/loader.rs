//! Configuration loading from disk.
//!
//! Reads the dashboard config from its fixed relative path and runs
//! semantic validation. The three failure classes mirror the three ways
//! a launch can fail before the dashboard starts: the file is missing
//! or unreadable (Io), its contents do not parse (Parse), or the parsed
//! values are semantically wrong (Validation).

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::DashboardConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate the dashboard configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: DashboardConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    fn scratch_file(name: &str, content: Option<&str>) -> PathBuf {
        let path = std::env::temp_dir().join(format!("trends-dashboard-loader-{name}"));
        match content {
            Some(body) => fs::write(&path, body).unwrap(),
            None => {
                let _ = fs::remove_file(&path);
            }
        }
        path
    }

    #[test]
    fn missing_file_is_a_not_found_io_error() {
        let path = scratch_file("missing.toml", None);
        match load_config(&path) {
            Err(ConfigError::Io(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("expected Io(NotFound), got {other:?}"),
        }
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let path = scratch_file("garbage.toml", Some("this is not toml ==="));
        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn semantic_problems_are_validation_errors() {
        let path = scratch_file(
            "badaddr.toml",
            Some("[server]\nbind_address = \"nowhere\"\n"),
        );
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Validation(_))
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn valid_file_round_trips() {
        let path = scratch_file(
            "good.toml",
            Some(
                "[server]\nbind_address = \"127.0.0.1:8051\"\ntitle = \"Trends\"\n\n\
                 [[features]]\nname = \"Overview\"\ndescription = \"top level\"\n",
            ),
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:8051");
        assert_eq!(config.features.len(), 1);
        assert_eq!(config.features[0].name, "Overview");
        let _ = fs::remove_file(&path);
    }
}
