//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::SecurityConfig;
use crate::config::validation::{reject_request_like_toml, MisuseError};

/// Error type for configuration ingestion.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("parse error: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error(transparent)]
    Misuse(#[from] MisuseError),
}

/// Load a configuration from a TOML file, running the misuse guard on the
/// raw document before typed deserialization.
pub fn load_config(path: &Path) -> Result<SecurityConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let raw: toml::Value = toml::from_str(&content)?;
    reject_request_like_toml(&raw)?;
    let config = raw.try_into()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Toggle;
    use std::io::Write;

    fn write_temp(content: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("secure-headers-test-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_and_guards() {
        let path = write_temp("[hsts]\nmax_age = 1\n");
        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(matches!(config.hsts, Some(Toggle::Options(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
