use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::crop::raster::{DEFAULT_JPEG_QUALITY, DEFAULT_MAX_SURFACE_DIMENSION};
use crate::crop::{OutputFormat, RasterOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "folio-editor";
const APP_CONFIG_FILE: &str = "config.json";

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Maximum undo snapshots kept; unset keeps every snapshot.
    pub history_limit: Option<usize>,
    pub output_format: OutputFormat,
    pub jpeg_quality: u8,
    pub max_surface_dimension: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: None,
            output_format: OutputFormat::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            max_surface_dimension: DEFAULT_MAX_SURFACE_DIMENSION,
        }
    }
}

impl AppConfig {
    pub fn raster_options(&self) -> RasterOptions {
        RasterOptions {
            format: self.output_format,
            jpeg_quality: self.jpeg_quality.clamp(1, 100),
            max_surface_dimension: self.max_surface_dimension,
        }
    }
}

pub fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return AppConfig::default(),
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => parse_app_config(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

fn parse_app_config(contents: &str) -> serde_json::Result<AppConfig> {
    serde_json::from_str(contents)
}

pub fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "folio-editor",
            "config.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(
            path,
            PathBuf::from("/tmp/config-root/folio-editor/config.json")
        );
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path(
            "folio-editor",
            "config.json",
            Some(Path::new("")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(
            path,
            PathBuf::from("/tmp/home/.config/folio-editor/config.json")
        );
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("folio-editor", "config.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let config = parse_app_config(r#"{"history_limit": 50, "output_format": "png"}"#)
            .expect("parse config");
        assert_eq!(config.history_limit, Some(50));
        assert_eq!(config.output_format, OutputFormat::Png);
        assert_eq!(config.jpeg_quality, DEFAULT_JPEG_QUALITY);
        assert_eq!(config.max_surface_dimension, DEFAULT_MAX_SURFACE_DIMENSION);
    }

    #[test]
    fn raster_options_clamp_quality() {
        let config = AppConfig {
            jpeg_quality: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.raster_options().jpeg_quality, 1);
    }

    #[test]
    fn missing_or_invalid_config_file_falls_back_to_defaults() {
        let root = std::env::temp_dir().join(format!("folio-editor-config-{}", std::process::id()));
        let dir = root.join(APP_DIR);
        std::fs::create_dir_all(&dir).expect("create config dir");

        assert_eq!(load_app_config_with(Some(root.as_path()), None), AppConfig::default());

        std::fs::write(dir.join(APP_CONFIG_FILE), "{ not json").expect("write config");
        assert_eq!(load_app_config_with(Some(root.as_path()), None), AppConfig::default());

        std::fs::write(dir.join(APP_CONFIG_FILE), r#"{"jpeg_quality": 80}"#)
            .expect("write config");
        assert_eq!(load_app_config_with(Some(root.as_path()), None).jpeg_quality, 80);

        std::fs::remove_dir_all(&root).expect("clean up");
    }
}
