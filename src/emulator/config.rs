// Configuration management
//
// Ambient settings for the emulator core itself: logging verbosity and
// which debug traces to enable. Persisted as TOML, the same way the rest of
// this project's settings are handled.

use crate::debug::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Default configuration file path
const CONFIG_FILE: &str = "emulator_config.toml";

/// Emulator configuration
///
/// Stores the debug/logging settings for a headless run of the core. There
/// is deliberately nothing here about video, audio, or input: those are
/// host concerns that live outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Minimum severity of log message to emit.
    pub log_level: LogLevel,

    /// Record a CPU trace line (nestest format) for every instruction.
    pub cpu_trace: bool,

    /// Record a PPU trace line for every frame boundary.
    pub ppu_trace: bool,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            log_level: LogLevel::Info,
            cpu_trace: false,
            ppu_trace: false,
        }
    }
}

impl EmulatorConfig {
    /// Load configuration from file or create default.
    ///
    /// If the configuration file doesn't exist, creates a default
    /// configuration and saves it to the file.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| {
            let config = Self::default();
            let _ = config.save();
            config
        })
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self, io::Error> {
        let contents = fs::read_to_string(CONFIG_FILE)?;
        toml::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(CONFIG_FILE, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EmulatorConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(!config.cpu_trace);
        assert!(!config.ppu_trace);
    }

    #[test]
    fn test_config_round_trip() {
        let config = EmulatorConfig {
            log_level: LogLevel::Trace,
            cpu_trace: true,
            ppu_trace: false,
        };
        let toml_str = toml::to_string(&config).expect("failed to serialize");
        let deserialized: EmulatorConfig =
            toml::from_str(&toml_str).expect("failed to deserialize");

        assert_eq!(config.log_level, deserialized.log_level);
        assert_eq!(config.cpu_trace, deserialized.cpu_trace);
    }
}
