use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::fs;

pub const KEYS: [&str; 4] = ["log_lines", "log_capacity", "undo_limit", "log_file"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_lines: usize,
    pub log_capacity: Option<usize>,
    pub undo_limit: Option<usize>,
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_lines: 10,
            log_capacity: None,
            undo_limit: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads the config file, falling back to defaults when none exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = get_config_file_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, limit) in [("log_capacity", self.log_capacity), ("undo_limit", self.undo_limit)] {
            if limit == Some(0) {
                return Err(ConfigError::InvalidValue(key.to_string(), "0".to_string()));
            }
        }
        Ok(())
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = get_config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = toml::to_string(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(&config_path, content)
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "log_lines" => self.log_lines = parse_count(key, value)?,
            "log_capacity" => self.log_capacity = parse_optional_limit(key, value)?,
            "undo_limit" => self.undo_limit = parse_optional_limit(key, value)?,
            "log_file" => {
                self.log_file = if is_unset(value) { None } else { Some(value.to_string()) };
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "log_lines" => self.log_lines.to_string(),
            "log_capacity" => display_optional(self.log_capacity),
            "undo_limit" => display_optional(self.undo_limit),
            "log_file" => self.log_file.clone().unwrap_or_else(|| "none".to_string()),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        Ok(value)
    }
}

fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join("gradebook").join("config.toml"))
}

fn is_unset(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("none")
}

fn parse_count(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidValue(key.to_string(), value.to_string()))
}

// Limits of zero would silently disable undo or the log, so they are rejected
fn parse_optional_limit(key: &str, value: &str) -> Result<Option<usize>, ConfigError> {
    if is_unset(value) {
        return Ok(None);
    }
    match parse_count(key, value)? {
        0 => Err(ConfigError::InvalidValue(key.to_string(), value.to_string())),
        limit => Ok(Some(limit)),
    }
}

fn display_optional(value: Option<usize>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    ConfigDirNotFound,
    UnknownKey(String),
    InvalidValue(String, String),
    ReadError(String),
    WriteError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigDirNotFound => {
                write!(f, "Could not find config directory")
            }
            ConfigError::UnknownKey(key) => {
                write!(f, "Unknown configuration key '{}'. Supported keys: {}", key, KEYS.join(", "))
            }
            ConfigError::InvalidValue(key, value) => {
                write!(f, "Invalid value '{}' for '{}'", value, key)
            }
            ConfigError::ReadError(msg) => {
                write!(f, "Failed to read config file: {}", msg)
            }
            ConfigError::WriteError(msg) => {
                write!(f, "Failed to write config file: {}", msg)
            }
            ConfigError::ParseError(msg) => {
                write!(f, "Failed to parse config file: {}", msg)
            }
            ConfigError::SerializeError(msg) => {
                write!(f, "Failed to serialize config: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml("undo_limit = 5\n").unwrap();
        assert_eq!(config.undo_limit, Some(5));
        assert_eq!(config.log_lines, 10);
        assert_eq!(config.log_capacity, None);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_file() {
        let result = Config::from_toml("log_lines = \"lots\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_zero_limits_in_file_are_rejected() {
        assert_eq!(
            Config::from_toml("undo_limit = 0\n"),
            Err(ConfigError::InvalidValue("undo_limit".to_string(), "0".to_string()))
        );
        assert_eq!(
            Config::from_toml("log_capacity = 0\nundo_limit = 3\n"),
            Err(ConfigError::InvalidValue("log_capacity".to_string(), "0".to_string()))
        );
    }

    #[test]
    fn test_loaded_limits_keep_undo_working() {
        let config = Config::from_toml("undo_limit = 1\nlog_capacity = 1\n").unwrap();
        let mut book = crate::gradebook::Gradebook::bounded(config.log_capacity, config.undo_limit);
        book.add_student("Sara");
        book.add_grade("Sara", 90);

        assert_eq!(book.recent_log(10), vec!["Added grade 90 for Sara"]);
        assert!(book.undo());
        assert_eq!(book.find_student_grades("Sara"), Some(&[][..]));
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let mut config = Config::default();
        config.set("log_capacity", "100").unwrap();
        config.set("log_file", "/tmp/gradebook.log").unwrap();

        let content = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml(&content).unwrap(), config);
    }

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();

        config.set("log_lines", "25").unwrap();
        config.set("undo_limit", "20").unwrap();
        assert_eq!(config.get("log_lines").unwrap(), "25");
        assert_eq!(config.get("undo_limit").unwrap(), "20");
        assert_eq!(config.get("log_capacity").unwrap(), "none");

        config.set("undo_limit", "none").unwrap();
        assert_eq!(config.undo_limit, None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();

        assert_eq!(
            config.set("log_lines", "-1"),
            Err(ConfigError::InvalidValue("log_lines".to_string(), "-1".to_string()))
        );
        assert_eq!(
            config.set("log_capacity", "0"),
            Err(ConfigError::InvalidValue("log_capacity".to_string(), "0".to_string()))
        );
        assert_eq!(
            config.set("colour", "blue"),
            Err(ConfigError::UnknownKey("colour".to_string()))
        );
        assert_eq!(config, Config::default());
    }
}
