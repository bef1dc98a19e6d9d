//! Device selection
use serde::{Deserialize, Serialize};
use spindle_core::{CdError, Result};
use std::path::{Path, PathBuf};

/// Device opened when nothing overrides it
pub const DEFAULT_DEVICE: &str = "/dev/cdrom";

/// Environment variable naming the device (highest-precedence override)
pub const DEVICE_ENV: &str = "CDAUDIO";

/// Which drive a session opens
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceConfig {
    /// Device path override; `None` means [`DEFAULT_DEVICE`]
    #[serde(default)]
    pub device: Option<PathBuf>,
}

impl DeviceConfig {
    /// Configuration naming `device` explicitly
    pub fn new(device: impl Into<PathBuf>) -> Self {
        Self {
            device: Some(device.into()),
        }
    }

    /// Load configuration from an optional file and the environment
    ///
    /// Later sources win:
    /// 1. `file` (TOML, key `device`), if given
    /// 2. `SPINDLE_DEVICE`
    /// 3. `CDAUDIO`
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_with_env(file, std::env::vars().collect())
    }

    fn load_with_env(file: Option<&Path>, env: config::Map<String, String>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = file {
            settings = settings.add_source(config::File::from(path.to_path_buf()));
        }

        let cdaudio = env.get(DEVICE_ENV).filter(|v| !v.is_empty()).cloned();

        // Override with environment variables (prefixed with SPINDLE_)
        settings = settings
            .add_source(
                config::Environment::with_prefix("SPINDLE")
                    .ignore_empty(true)
                    .source(Some(env)),
            )
            .set_override_option("device", cdaudio)
            .map_err(|e| CdError::config(e.to_string()))?;

        let config = settings
            .build()
            .map_err(|e| CdError::config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CdError::config(e.to_string()))
    }

    /// Replace the device if `device` is set (command line `--device`)
    #[must_use]
    pub fn with_device_override(mut self, device: Option<PathBuf>) -> Self {
        if device.is_some() {
            self.device = device;
        }
        self
    }

    /// Resolve the device path: the override, else [`DEFAULT_DEVICE`]
    pub fn device_path(&self) -> PathBuf {
        self.device
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEVICE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_to_dev_cdrom() {
        let config = DeviceConfig::load_with_env(None, env(&[])).unwrap();
        assert_eq!(config.device, None);
        assert_eq!(config.device_path(), PathBuf::from("/dev/cdrom"));
    }

    #[test]
    fn cdaudio_overrides_default() {
        let config = DeviceConfig::load_with_env(None, env(&[("CDAUDIO", "/dev/sr1")])).unwrap();
        assert_eq!(config.device_path(), PathBuf::from("/dev/sr1"));
    }

    #[test]
    fn empty_cdaudio_is_ignored() {
        let config = DeviceConfig::load_with_env(None, env(&[("CDAUDIO", "")])).unwrap();
        assert_eq!(config.device_path(), PathBuf::from(DEFAULT_DEVICE));
    }

    #[test]
    fn prefixed_env_is_read() {
        let config =
            DeviceConfig::load_with_env(None, env(&[("SPINDLE_DEVICE", "/dev/sr2")])).unwrap();
        assert_eq!(config.device_path(), PathBuf::from("/dev/sr2"));
    }

    #[test]
    fn precedence_file_then_prefixed_env_then_cdaudio() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "device = \"/dev/from-file\"").unwrap();

        let from_file = DeviceConfig::load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(from_file.device_path(), PathBuf::from("/dev/from-file"));

        let from_prefixed = DeviceConfig::load_with_env(
            Some(file.path()),
            env(&[("SPINDLE_DEVICE", "/dev/from-env")]),
        )
        .unwrap();
        assert_eq!(from_prefixed.device_path(), PathBuf::from("/dev/from-env"));

        let from_cdaudio = DeviceConfig::load_with_env(
            Some(file.path()),
            env(&[("SPINDLE_DEVICE", "/dev/from-env"), ("CDAUDIO", "/dev/sr0")]),
        )
        .unwrap();
        assert_eq!(from_cdaudio.device_path(), PathBuf::from("/dev/sr0"));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = DeviceConfig::load_with_env(
            Some(Path::new("/nonexistent/spindle.toml")),
            env(&[]),
        )
        .unwrap_err();
        assert!(matches!(err, CdError::Config(_)));
    }

    #[test]
    fn command_line_override_wins() {
        let config = DeviceConfig::new("/dev/sr0").with_device_override(Some("/dev/sr3".into()));
        assert_eq!(config.device_path(), PathBuf::from("/dev/sr3"));

        let unchanged = DeviceConfig::new("/dev/sr0").with_device_override(None);
        assert_eq!(unchanged.device_path(), PathBuf::from("/dev/sr0"));
    }
}
