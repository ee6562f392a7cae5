use std::path::PathBuf;
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::model::TimerFormat;
use crate::presentation::config::{KeyBindings, Styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Presenter behaviour.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeynoteConfig {
    /// Directory holding the `.md` files of the deck
    pub slides_dir: PathBuf,
    /// Quiet period before a key press moves the deck
    pub debounce_ms: u64,
    /// syntect theme used for fenced code blocks
    pub code_theme: String,
    /// Maximum width of the slide article, in columns
    pub max_width: u16,
    pub timer_format: TimerFormat,
}

impl KeynoteConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for KeynoteConfig {
    fn default() -> Self {
        Self {
            slides_dir: PathBuf::from("slides"),
            debounce_ms: 100,
            code_theme: String::from("base16-ocean.dark"),
            max_width: 100,
            timer_format: TimerFormat::default(),
        }
    }
}

/// Texts of the screen shown before the first slide.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WelcomeConfig {
    pub title: String,
    pub subtitle: String,
    pub link: String,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            title: String::from("Keynote"),
            subtitle: String::from("Press → or space to start, ← to go back, q to quit."),
            link: String::from("Slides are read from markdown files; r reloads them."),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub keynote: KeynoteConfig,
    #[serde(default)]
    pub welcome: WelcomeConfig,
}

impl Config {
    /// Built-in configuration without any user file.
    pub fn builtin() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads user configuration from the config directory and merges the
    /// built-in keybindings and styles underneath it.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::builtin()?;
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder();

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        Ok(cfg.merged_with(default_config))
    }

    /// Fills keybindings and styles missing from `self` with `defaults`.
    pub fn merged_with(mut self, defaults: Config) -> Self {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| action.clone());
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
        self
    }
}
