use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error reading punchlist.toml.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration. An explicitly given path must be readable;
/// otherwise `punchlist.toml` in the current directory is used when
/// present, and built-in defaults apply when it is not.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from("punchlist.toml");
            if !default.exists() {
                return Ok(Config::default());
            }
            default
        }
    };
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("punchlist.toml");
        fs::write(
            &path,
            r##"
[api]
url = "http://localhost:9090/todos"
limit = 5

[dates]
start = "2023-01-01"
end = "2023-02-01"

[ui.colors]
highlight = "#FF00FF"
"##,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.api.url, "http://localhost:9090/todos");
        assert_eq!(config.api.limit, 5);
        assert_eq!(config.dates.start, "2023-01-01");
        assert_eq!(
            config.ui.colors.get("highlight").map(String::as_str),
            Some("#FF00FF")
        );
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("punchlist.toml");
        fs::write(&path, "not [valid toml").unwrap();
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Parse(_))
        ));
    }
}
