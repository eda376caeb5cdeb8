//! Builder configuration and the `Sigtree.toml` file format.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sigtree_document::DEFAULT_DELIMITER;
use sigtree_document::name::validate_name;

/// The standard configuration filename.
pub const CONFIG_FILENAME: &str = "Sigtree.toml";

/// Root element name used when none is configured.
pub const DEFAULT_ROOT_ELEMENT: &str = "Root";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid delimiter {0:?}: expected a single character other than space, `=` or quotes")]
    InvalidDelimiter(String),
    #[error("Invalid root element name {name:?}: {reason}")]
    InvalidRootElement { name: String, reason: String },
}

/// Settings fixed for the lifetime of a builder.
///
/// Only validated configurations can be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    root_element: String,
    delimiter: char,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            root_element: DEFAULT_ROOT_ELEMENT.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl BuilderConfig {
    pub fn new(root_element: impl Into<String>, delimiter: char) -> Result<Self, ConfigError> {
        let config = Self {
            root_element: root_element.into(),
            delimiter,
        };
        config.validate()?;
        Ok(config)
    }

    /// Name of the single top-level element.
    pub fn root_element(&self) -> &str {
        &self.root_element
    }

    /// Separator between path segments.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_name(&self.root_element).map_err(|e| ConfigError::InvalidRootElement {
            name: self.root_element.clone(),
            reason: e.to_string(),
        })?;
        if matches!(self.delimiter, ' ' | '=' | '"' | '\'') {
            return Err(ConfigError::InvalidDelimiter(self.delimiter.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    root_element: Option<String>,
    delimiter: Option<String>,
    output: Option<PathBuf>,
}

/// Contents of a `Sigtree.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigtreeConfig {
    pub builder: BuilderConfig,
    /// Default document location. Relative paths are resolved against the
    /// directory of the config file.
    pub output: Option<PathBuf>,
}

impl SigtreeConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse_str(&content)?;
        if let (Some(output), Some(base)) = (config.output.as_mut(), path.parent())
            && output.is_relative()
        {
            *output = base.join(&*output);
        }
        Ok(config)
    }

    /// Parse configuration from a string.
    pub fn parse_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let delimiter = match raw.delimiter {
            Some(delimiter) => {
                let mut chars = delimiter.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err(ConfigError::InvalidDelimiter(delimiter)),
                }
            }
            None => DEFAULT_DELIMITER,
        };
        let root_element = raw
            .root_element
            .unwrap_or_else(|| DEFAULT_ROOT_ELEMENT.to_string());
        let builder = BuilderConfig::new(root_element, delimiter)?;
        Ok(Self {
            builder,
            output: raw.output,
        })
    }

    /// Find the configuration file by searching upward from the given directory.
    pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SigtreeConfig::parse_str("").unwrap();
        assert_eq!(config.builder, BuilderConfig::default());
        assert_eq!(config.builder.delimiter(), '/');
        assert_eq!(config.builder.root_element(), "Root");
        assert_eq!(config.output, None);
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        for delimiter in [' ', '=', '"', '\''] {
            assert!(matches!(
                BuilderConfig::new("Root", delimiter),
                Err(ConfigError::InvalidDelimiter(_))
            ));
        }
        assert!(matches!(
            BuilderConfig::new("", '/'),
            Err(ConfigError::InvalidRootElement { .. })
        ));
        let config = BuilderConfig::new("Settings", '.').unwrap();
        assert_eq!(config.root_element(), "Settings");
        assert_eq!(config.delimiter(), '.');
    }

    #[test]
    fn test_parse_full() {
        let config = SigtreeConfig::parse_str(
            r#"
root-element = "Settings"
delimiter = "|"
output = "settings.xml"
"#,
        )
        .unwrap();
        assert_eq!(config.builder, BuilderConfig::new("Settings", '|').unwrap());
        assert_eq!(config.output, Some(PathBuf::from("settings.xml")));
    }

    #[test]
    fn test_invalid_delimiter() {
        assert!(matches!(
            SigtreeConfig::parse_str(r#"delimiter = "//""#),
            Err(ConfigError::InvalidDelimiter(d)) if d == "//"
        ));
        assert!(matches!(
            SigtreeConfig::parse_str(r#"delimiter = "=""#),
            Err(ConfigError::InvalidDelimiter(_))
        ));
    }

    #[test]
    fn test_invalid_root_element() {
        assert!(matches!(
            SigtreeConfig::parse_str(r#"root-element = "1root""#),
            Err(ConfigError::InvalidRootElement { .. })
        ));
    }

    #[test]
    fn test_unknown_field() {
        assert!(matches!(
            SigtreeConfig::parse_str("colour = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_and_find() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&config_path, "output = \"out/doc.xml\"\n").unwrap();

        let found = SigtreeConfig::find_config_file(&nested).unwrap();
        assert_eq!(found, config_path);

        let config = SigtreeConfig::load(&found).unwrap();
        assert_eq!(config.output, Some(dir.path().join("out/doc.xml")));
    }
}
