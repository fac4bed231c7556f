//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the resolved
//! [`Toolchain`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config FILE` (an explicitly named file must exist and parse)
//! 2. The platform config location, then `.stencil.toml` in the current
//!    directory (each used only if present)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use stencil_core::application::Toolchain;

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Template engine settings.
    pub generator: GeneratorConfig,
    /// External tool program names.
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Engine config file for the simple variant.
    pub simple_config: PathBuf,
    /// Engine config file for the advanced variant.
    pub advanced_config: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            simple_config: PathBuf::from("configs/simple_config.yaml"),
            advanced_config: PathBuf::from("configs/advanced_config.yaml"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub cookiecutter: String,
    pub uv: String,
    pub act: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            cookiecutter: "cookiecutter".into(),
            uv: "uv".into(),
            act: "act".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; when given,
    /// the file must exist and parse.  Otherwise the default locations are
    /// tried and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path);
        }

        for candidate in [Self::config_path(), PathBuf::from(".stencil.toml")] {
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(e)),
        })?;

        toml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("cannot parse {}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stencil.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stencil.toml"))
    }

    /// The resolved toolchain handed to `TaskService`.
    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            cookiecutter: self.tools.cookiecutter.clone(),
            uv: self.tools.uv.clone(),
            act: self.tools.act.clone(),
            simple_config: self.generator.simple_config.clone(),
            advanced_config: self.generator.advanced_config.clone(),
        }
    }
}
