//! # sov-config
//!
//! Layered configuration loading for the Sovyonok validator using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SOVYONOK_*` prefix, `__` as separator)
//! 2. Project-level `<root>/.sovyonok/config.toml`
//! 3. User-level `~/.config/sovyonok/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SOVYONOK_PATHS__SPEECH_DIR` -> `paths.speech_dir`,
//! `SOVYONOK_CHECK__AUDIO_EXTENSION` -> `check.audio_extension`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use sov_config::SovConfig;
//!
//! let root = Path::new(".");
//! SovConfig::load_dotenv(root);
//! let config = SovConfig::load(root).expect("config");
//! println!("tasks live in {}", config.paths.tasks_dir);
//! ```

mod check;
mod error;
mod paths;

pub use check::CheckConfig;
pub use error::ConfigError;
pub use paths::PathsConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Directory holding project-local validator files.
pub const PROJECT_DIR: &str = ".sovyonok";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SOVYONOK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SovConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

impl SovConfig {
    /// Load configuration for the project at `project_root`.
    ///
    /// Does NOT read `.env` -- call [`Self::load_dotenv`] first for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        Self::extract(&Self::figment(project_root))
    }

    /// Load `<root>/.env` into the process environment.
    ///
    /// Variables already set in the environment are kept. Returns whether a
    /// `.env` file was read; a missing file is not an error.
    #[must_use]
    pub fn load_dotenv(project_root: &Path) -> bool {
        let env_path = project_root.join(".env");
        env_path.exists() && dotenvy::from_path(&env_path).is_ok()
    }

    /// Build the full provider chain, including the user-global file.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        Self::figment_from(project_root, Self::global_config_path().as_deref())
    }

    /// Build the provider chain with an explicit user-global file.
    ///
    /// Public so tests can skip the real user config.
    #[must_use]
    pub fn figment_from(project_root: &Path, global_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract, normalize, and validate a config from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn extract(figment: &Figment) -> Result<Self, ConfigError> {
        let mut config: Self = figment.extract()?;
        config.check.normalize();
        config.check.validate()?;
        Ok(config)
    }

    /// Path to the project-local config file.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sovyonok").join("config.toml"))
    }
}
