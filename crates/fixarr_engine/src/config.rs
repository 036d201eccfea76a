use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use fixarr_base::{ErrorKind, FixarrError, FixarrResult};

/// Name of the config file the CLI looks for in the current directory.
pub const CONFIG_FILE_NAME: &str = "fixarr.toml";

/// Runtime configuration, read from `fixarr.toml`. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Largest array size accepted from standard input.
    #[serde(default = "default_max_size")]
    pub max_size: usize,
    /// How the report is printed.
    #[serde(default)]
    pub format: OutputFormat,
    /// Stepped traversal included in the report.
    #[serde(default)]
    pub stride: StrideConfig,
    /// Multiplying traversal included in the report.
    #[serde(default)]
    pub geometric: GeometricConfig,
    /// Number of times the array is repeated in the report's row grid.
    #[serde(default = "default_rows")]
    pub rows: usize,
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Start offset and step of the stepped traversal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrideConfig {
    #[serde(default)]
    pub start: usize,
    #[serde(default = "default_stride_step")]
    pub step: usize,
}

/// 1-based start position and multiplier of the geometric traversal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeometricConfig {
    #[serde(default = "default_geometric_start")]
    pub start: usize,
    #[serde(default = "default_geometric_factor")]
    pub factor: usize,
}

fn default_max_size() -> usize {
    10_000
}

fn default_stride_step() -> usize {
    2
}

fn default_geometric_start() -> usize {
    1
}

fn default_geometric_factor() -> usize {
    2
}

fn default_rows() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            format: OutputFormat::default(),
            stride: StrideConfig::default(),
            geometric: GeometricConfig::default(),
            rows: default_rows(),
        }
    }
}

impl Default for StrideConfig {
    fn default() -> Self {
        Self {
            start: 0,
            step: default_stride_step(),
        }
    }
}

impl Default for GeometricConfig {
    fn default() -> Self {
        Self {
            start: default_geometric_start(),
            factor: default_geometric_factor(),
        }
    }
}

fn invalid(message: &str) -> Box<FixarrError> {
    ErrorKind::InvalidInput {
        message: message.to_string(),
    }
    .into()
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> FixarrResult<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Box::new(FixarrError::message(format!("Invalid configuration: {}", e))))?;
        if config.max_size == 0 {
            return Err(invalid("max_size must be greater than zero"));
        }
        if config.stride.step == 0 {
            return Err(invalid("stride step must be non-zero"));
        }
        if config.geometric.start == 0 {
            return Err(invalid("geometric start position must be at least 1"));
        }
        if config.geometric.factor < 2 {
            return Err(invalid("geometric factor must be at least 2"));
        }
        Ok(config)
    }
}

fn parse_config_file(path: &Path, content: &str) -> FixarrResult<Config> {
    Config::from_toml_str(content)
        .map_err(|e| Box::new(e.context(format!("while loading {}", path.display()))))
}

fn file_error(path: &Path, source: io::Error) -> Box<FixarrError> {
    Box::new(FixarrError::new(ErrorKind::FileError {
        path: path.to_path_buf(),
        source,
    }))
}

/// Read and parse the configuration file at `path`.
pub fn load_config(path: &Path) -> FixarrResult<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
    parse_config_file(path, &content)
}

/// Like [`load_config`], but a file that does not exist yields the default configuration.
///
/// Any other I/O failure (permissions, path is a directory) is still a `FileError`.
pub fn load_config_or_default(path: &Path) -> FixarrResult<Config> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config_file(path, &content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(file_error(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_size, 10_000);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.stride, StrideConfig { start: 0, step: 2 });
        assert_eq!(config.geometric, GeometricConfig { start: 1, factor: 2 });
        assert_eq!(config.rows, 3);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml_str(
            r#"
            max_size = 50
            format = "json"
            rows = 2

            [stride]
            start = 1
            step = 3

            [geometric]
            start = 2
            factor = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.max_size, 50);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.stride, StrideConfig { start: 1, step: 3 });
        assert_eq!(config.geometric, GeometricConfig { start: 2, factor: 3 });
        assert_eq!(config.rows, 2);
    }

    #[test]
    fn test_partial_stride_section() {
        let config = Config::from_toml_str("[stride]\nstart = 1\n").unwrap();
        assert_eq!(config.stride, StrideConfig { start: 1, step: 2 });
    }

    #[test]
    fn test_zero_step_rejected() {
        let err = Config::from_toml_str("[stride]\nstep = 0\n").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidInput { .. }));
    }

    #[test]
    fn test_bad_geometric_rejected() {
        for content in ["[geometric]\nfactor = 1\n", "[geometric]\nstart = 0\n"] {
            let err = Config::from_toml_str(content).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_zero_max_size_rejected() {
        let err = Config::from_toml_str("max_size = 0").unwrap_err();
        expect![[r#"Invalid input: max_size must be greater than zero"#]].assert_eq(&err.to_string());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Config::from_toml_str("format = \"yaml\"").unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration:"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_toml_str("max_sise = 3").is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "format = \"json\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_config_missing_file_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::FileError { .. }));
        assert!(load_config_or_default(&path).unwrap() == Config::default());
    }

    #[test]
    fn test_load_config_parse_error_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "max_size = \"many\"\n").unwrap();

        let err = load_config_or_default(&path).unwrap_err();
        assert_eq!(err.get_context().len(), 1);
        assert!(err.get_context()[0].starts_with("while loading "));
    }

    #[test]
    fn test_load_config_or_default_reports_unreadable_path() {
        // A directory exists but cannot be read as a file: not the same as a missing config
        let dir = tempfile::tempdir().unwrap();

        let err = load_config_or_default(dir.path()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::FileError { .. }));
    }
}
