use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the user config directory and the working
/// directory.
pub const CONFIG_FILE_NAME: &str = "base62.toml";

/// Verbosity of diagnostic output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Returns the level `steps` notches more verbose, saturating at `Trace`.
    pub fn raised(self, steps: u8) -> Self {
        const ORDER: [LogLevel; 5] = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let idx = (self as usize + steps as usize).min(ORDER.len() - 1);
        ORDER[idx]
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Effective settings after all configuration layers are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Continue past items that fail to encode or decode
    pub keep_going: bool,
    /// Default log level before `-v` flags
    pub log_level: LogLevel,
}

/// A single configuration layer. Absent keys leave the lower layer alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsLayer {
    #[serde(default)]
    pub keep_going: Option<bool>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub settings: SettingsLayer,
}

/// Settings plus the files they were read from.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: Settings,
    /// Override files that were applied, in order
    pub sources: Vec<PathBuf>,
}

impl ConfigFile {
    /// Parses a configuration layer from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads a configuration layer from a file.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }
}

impl Config {
    /// Loads the built-in defaults.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../base62.toml");
        let mut config = Config::default();
        config.merge(ConfigFile::from_toml(content)?);
        Ok(config)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults
    /// 2. `~/.config/base62/base62.toml` (user overrides)
    /// 3. `./base62.toml` (project-local overrides)
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let user_dir = dirs::config_dir().map(|dir| dir.join("base62"));
        Self::load_from_dirs(user_dir.as_deref(), Path::new("."))
    }

    /// Same as [`Config::load_with_overrides`] with explicit directories.
    pub fn load_from_dirs(
        user_dir: Option<&Path>,
        local_dir: &Path,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        let candidates = user_dir
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .into_iter()
            .chain(std::iter::once(local_dir.join(CONFIG_FILE_NAME)));

        for path in candidates {
            if !path.exists() {
                tracing::trace!(path = %path.display(), "no config file");
                continue;
            }
            match ConfigFile::load_from_file(&path) {
                Ok(layer) => {
                    tracing::debug!(path = %path.display(), "applying config file");
                    config.merge(layer);
                    config.sources.push(path);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to load config file");
                }
            }
        }

        Ok(config)
    }

    /// Applies a layer on top of the current settings.
    pub fn merge(&mut self, layer: ConfigFile) {
        let SettingsLayer {
            keep_going,
            log_level,
        } = layer.settings;
        if let Some(keep_going) = keep_going {
            self.settings.keep_going = keep_going;
        }
        if let Some(log_level) = log_level {
            self.settings.log_level = log_level;
        }
    }

    /// Renders the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        #[derive(Serialize)]
        struct View<'a> {
            settings: &'a Settings,
        }
        toml::to_string(&View {
            settings: &self.settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = Config::load_default().unwrap();
        assert_eq!(config.settings, Settings::default());
        assert!(config.sources.is_empty());
    }

    #[test]
    fn test_merge_is_field_by_field() {
        let mut config = Config::default();
        config.merge(ConfigFile::from_toml("[settings]\nkeep_going = true\n").unwrap());
        config.merge(ConfigFile::from_toml("[settings]\nlog_level = \"debug\"\n").unwrap());

        assert!(config.settings.keep_going);
        assert_eq!(config.settings.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(ConfigFile::from_toml("[settings]\nalphabet = \"abc\"\n").is_err());
        assert!(ConfigFile::from_toml("[other]\n").is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(ConfigFile::from_toml("[settings]\nlog_level = \"loud\"\n").is_err());
    }

    #[test]
    fn test_empty_file_is_valid_layer() {
        let mut config = Config::default();
        config.merge(ConfigFile::from_toml("").unwrap());
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn test_log_level_raised() {
        assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised(1), LogLevel::Info);
        assert_eq!(LogLevel::Warn.raised(2), LogLevel::Debug);
        assert_eq!(LogLevel::Error.raised(200), LogLevel::Trace);
    }

    #[test]
    fn test_load_from_dirs_layers_in_order() {
        let user = tempfile::tempdir().unwrap();
        let local = tempfile::tempdir().unwrap();
        std::fs::write(
            user.path().join(CONFIG_FILE_NAME),
            "[settings]\nkeep_going = true\nlog_level = \"info\"\n",
        )
        .unwrap();
        std::fs::write(
            local.path().join(CONFIG_FILE_NAME),
            "[settings]\nlog_level = \"trace\"\n",
        )
        .unwrap();

        let config = Config::load_from_dirs(Some(user.path()), local.path()).unwrap();
        assert!(config.settings.keep_going);
        assert_eq!(config.settings.log_level, LogLevel::Trace);
        assert_eq!(config.sources.len(), 2);
    }

    #[test]
    fn test_broken_layer_is_skipped() {
        let local = tempfile::tempdir().unwrap();
        std::fs::write(local.path().join(CONFIG_FILE_NAME), "not = [toml").unwrap();

        let config = Config::load_from_dirs(None, local.path()).unwrap();
        assert_eq!(config.settings, Settings::default());
        assert!(config.sources.is_empty());
    }

    #[test]
    fn test_to_toml() {
        let config = Config::load_default().unwrap();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[settings]"));
        assert!(rendered.contains("keep_going = false"));
        assert!(rendered.contains("log_level = \"warn\""));
    }
}
