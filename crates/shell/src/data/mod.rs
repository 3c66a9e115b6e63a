//! File formats supported in the CLI.

mod npy;

use std::path::Path;
use std::str::FromStr;

use serde::{Serialize, de::DeserializeOwned};

pub use npy::write_positions;

/// Formats for configuration files and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("Unknown format: '{s}'. Use 'json' or 'yaml'.")),
        }
    }
}

impl Format {
    /// Determines the format from the extension of the given path.
    ///
    /// # Errors
    ///
    /// - If the path has no extension, or an extension other than `json`, `yaml` or `yml`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        path.extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| format!("Could not determine format without extension for path: {}", path.display()))?
            .parse()
    }

    /// The file extension for this format.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Parses a value from a string in this format.
    ///
    /// # Errors
    ///
    /// - If the string is not a valid document for `T`.
    pub fn parse_str<T: DeserializeOwned>(self, s: &str) -> Result<T, String> {
        match self {
            Self::Json => serde_json::from_str(s).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(s).map_err(|e| e.to_string()),
        }
    }

    /// Serializes a value to a string in this format.
    ///
    /// # Errors
    ///
    /// - If the value could not be serialized.
    pub fn serialize<T: Serialize>(self, value: &T) -> Result<String, String> {
        match self {
            Self::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        }
    }
}

/// Reads a value from the file at `path`, in the format given by its extension.
///
/// # Errors
///
/// - If the format could not be determined from the extension.
/// - If the file could not be read or parsed.
pub fn read<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, String> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    format.parse_str(&contents)
}

/// Writes a value to the file at `path`, in the format given by its extension.
///
/// # Errors
///
/// - If the format could not be determined from the extension.
/// - If the value could not be serialized or the file could not be written.
pub fn write<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<(), String> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let contents = format.serialize(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| format!("Failed to create parent directory: {e}"))?;
    }
    std::fs::write(path, contents).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::Format;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path("config.json"), Ok(Format::Json));
        assert_eq!(Format::from_path("a/b/config.yaml"), Ok(Format::Yaml));
        assert_eq!(Format::from_path("config.yml"), Ok(Format::Yaml));
        assert!(Format::from_path("config.toml").is_err());
        assert!(Format::from_path("config").is_err());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<Format>(), Ok(Format::Json));
        assert_eq!("yaml".parse::<Format>(), Ok(Format::Yaml));
        assert!("npy".parse::<Format>().is_err());
    }
}
