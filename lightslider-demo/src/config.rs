//! Slider options for the demo.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lightslider::{ConfigError, SliderConfig};
use thiserror::Error;

/// Demo error type.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid slider options in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
    #[error("failed to create log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Options of the sample page: every feature on, one card per page.
pub fn default_config() -> SliderConfig {
    SliderConfig::new()
        .buttons(true)
        .progress(true)
        .hide_scroll(true)
        .dots(true)
        .per_page(1)
}

/// Load and validate options from a JSON file.
pub fn load(path: &Path) -> Result<SliderConfig, DemoError> {
    let text = fs::read_to_string(path).map_err(|source| DemoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: SliderConfig = serde_json::from_str(&text).map_err(|source| DemoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate().map_err(|source| DemoError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config)
}

/// Pick the options to run with.
///
/// An explicit path must load. The default file is used when it exists;
/// otherwise the built-in defaults apply.
pub fn resolve(
    explicit: Option<&Path>,
    default_file: Option<&Path>,
) -> Result<SliderConfig, DemoError> {
    if let Some(path) = explicit {
        log::info!("Loading slider options from {}", path.display());
        return load(path);
    }

    match default_file {
        Some(path) if path.exists() => {
            log::info!("Loading slider options from {}", path.display());
            load(path)
        }
        _ => {
            log::info!("Using built-in slider options");
            Ok(default_config())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_camel_case_options() {
        let file = write_config(r#"{ "buttons": true, "perPage": 3, "leftArrow": "◀" }"#);
        let config = load(file.path()).unwrap();

        assert!(config.buttons);
        assert!(!config.dots);
        assert_eq!(config.per_page, Some(3));
        assert_eq!(config.left_label(), "◀");
    }

    #[test]
    fn test_load_rejects_zero_per_page() {
        let file = write_config(r#"{ "perPage": 0 }"#);
        let err = load(file.path()).unwrap_err();

        assert!(matches!(
            err,
            DemoError::Invalid {
                source: ConfigError::ZeroPerPage,
                ..
            }
        ));
        assert!(err.to_string().contains("perPage"));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let file = write_config("{ not json");
        assert!(matches!(load(file.path()), Err(DemoError::Parse { .. })));
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        assert!(matches!(
            resolve(Some(missing.as_path()), None),
            Err(DemoError::Read { .. })
        ));
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("slider.json");

        assert_eq!(resolve(None, Some(missing.as_path())).unwrap(), default_config());
        assert_eq!(resolve(None, None).unwrap(), default_config());
    }

    #[test]
    fn test_existing_default_file_is_loaded() {
        let file = write_config(r#"{ "dots": true }"#);
        let config = resolve(None, Some(file.path())).unwrap();

        assert_eq!(config, SliderConfig::new().dots(true));
    }
}
