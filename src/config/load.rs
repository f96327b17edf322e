use std::{env, path::PathBuf};

use thiserror::Error;

use super::schema::Settings;

/// Reasons a loaded configuration is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidSettings {
    #[error("controls.step_seconds must be >= 1")]
    ZeroStep,
    #[error("controls.step_seconds must be at most {}", i64::MAX)]
    StepTooLarge,
    #[error("controls.seek_bar_step must be between 1 and 100")]
    SeekBarStep,
    #[error("jukebox.scenes must not be empty")]
    NoScenes,
    #[error("jukebox.landing_scene {0:?} is not listed in jukebox.scenes")]
    UnknownLanding(String),
}

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `GROOVE__`) on top, and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("GROOVE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), InvalidSettings> {
        if self.controls.step_seconds == 0 {
            return Err(InvalidSettings::ZeroStep);
        }
        if i64::try_from(self.controls.step_seconds).is_err() {
            return Err(InvalidSettings::StepTooLarge);
        }
        if !(1..=100).contains(&self.controls.seek_bar_step) {
            return Err(InvalidSettings::SeekBarStep);
        }
        if self.jukebox.scenes.is_empty() {
            return Err(InvalidSettings::NoScenes);
        }
        if !self.jukebox.scenes.contains(&self.jukebox.landing_scene) {
            return Err(InvalidSettings::UnknownLanding(
                self.jukebox.landing_scene.clone(),
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `GROOVE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("GROOVE_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/groove/config.toml`
/// or `~/.config/groove/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("groove").join("config.toml"))
}
