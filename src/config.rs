use std::fs;
use std::path::Path;
use std::time::Duration;
use iced::Theme;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "config.json";

fn default_theme_name() -> String {
    "Light".to_string()
}

fn default_submit_delay_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    /// Simulated round trip for sign-in and form submits.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: default_theme_name(),
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

impl Config {
    pub fn theme(&self) -> Theme {
        theme_from_str(&self.theme_name).unwrap_or(Theme::Light)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn write_config(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads `config.json`; a missing or malformed file yields the defaults.
pub fn load_config() -> Config {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return Config::default();
    }
    read_config(path).unwrap_or_else(|e| {
        warn!(error = %e, "falling back to default config");
        Config::default()
    })
}

pub fn save_config(config: &Config) -> Result<(), ConfigError> {
    write_config(Path::new(CONFIG_FILE), config)
}

pub fn theme_from_str(name: &str) -> Option<Theme> {
    Theme::ALL
        .iter()
        .find(|t| theme_to_str(t).eq_ignore_ascii_case(name))
        .cloned()
}

pub fn theme_to_str(theme: &Theme) -> &'static str {
    match theme {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
        Theme::Dracula => "Dracula",
        Theme::Nord => "Nord",
        Theme::SolarizedLight => "SolarizedLight",
        Theme::SolarizedDark => "SolarizedDark",
        Theme::GruvboxLight => "GruvboxLight",
        Theme::GruvboxDark => "GruvboxDark",
        Theme::CatppuccinLatte => "CatppuccinLatte",
        Theme::CatppuccinFrappe => "CatppuccinFrappe",
        Theme::CatppuccinMacchiato => "CatppuccinMacchiato",
        Theme::CatppuccinMocha => "CatppuccinMocha",
        Theme::TokyoNight => "TokyoNight",
        Theme::TokyoNightStorm => "TokyoNightStorm",
        Theme::TokyoNightLight => "TokyoNightLight",
        Theme::KanagawaWave => "KanagawaWave",
        Theme::KanagawaDragon => "KanagawaDragon",
        Theme::KanagawaLotus => "KanagawaLotus",
        Theme::Moonfly => "Moonfly",
        Theme::Nightfly => "Nightfly",
        Theme::Oxocarbon => "Oxocarbon",
        Theme::Ferra => "Ferra",
        _ => "Unknown",
    }
}

pub fn theme_names() -> Vec<&'static str> {
    Theme::ALL.iter().map(theme_to_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("school_portal_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config: Config = serde_json::from_str(r#"{"theme_name":"Nord"}"#).unwrap();
        assert_eq!(config.submit_delay_ms, 1000);
        assert_eq!(config.theme(), Theme::Nord);
        assert_eq!(config.latency(), Duration::from_secs(1));
    }

    #[test]
    fn unknown_theme_falls_back_to_light() {
        let config = Config { theme_name: "Sepia".to_string(), ..Config::default() };
        assert_eq!(config.theme(), Theme::Light);
    }

    #[test]
    fn theme_names_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(theme_from_str(theme_to_str(theme)).as_ref(), Some(theme));
        }
        assert_eq!(theme_from_str("tokyonight"), Some(Theme::TokyoNight));
    }

    #[test]
    fn write_then_read() {
        let path = scratch_file("rw");
        let config = Config { theme_name: "Dracula".to_string(), submit_delay_ms: 0 };
        write_config(&path, &config).unwrap();
        assert_eq!(read_config(&path).unwrap(), config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_a_json_error() {
        let path = scratch_file("bad");
        fs::write(&path, "{ theme").unwrap();
        assert!(matches!(read_config(&path), Err(ConfigError::Json(_))));
        let _ = fs::remove_file(&path);
    }
}
