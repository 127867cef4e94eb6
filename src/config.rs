use crate::core::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub const CONFIG_FILE_NAME: &str = ".typeshim.toml";

/// Shim generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchSettings {
    /// Identifier used for the shared placeholder binding
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for PatchSettings {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

/// Walker exclusion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnoreSettings {
    /// Glob patterns excluded from source walks
    #[serde(default = "default_ignore_patterns")]
    pub patterns: Vec<String>,
}

impl Default for IgnoreSettings {
    fn default() -> Self {
        Self {
            patterns: default_ignore_patterns(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeshimConfig {
    #[serde(default)]
    pub patch: PatchSettings,

    #[serde(default)]
    pub ignore: IgnoreSettings,
}

fn default_placeholder() -> String {
    "_typeshimPlaceholder".to_string()
}

fn default_ignore_patterns() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

impl TypeshimConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Configuration(e.to_string()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::file_system_source("failed to read config", path, e))?;
        Self::from_toml_str(&content)
    }

    /// Load `.typeshim.toml` from the working directory, falling back to
    /// defaults when absent. A present-but-invalid file is an error.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }
}

static CONFIG: OnceLock<TypeshimConfig> = OnceLock::new();

/// Process-wide configuration, loaded once on first access. Invalid config
/// files degrade to defaults here; commands that care about config errors
/// call `TypeshimConfig::load` directly.
pub fn get_config() -> &'static TypeshimConfig {
    CONFIG.get_or_init(|| {
        TypeshimConfig::load().unwrap_or_else(|e| {
            log::warn!("ignoring invalid {CONFIG_FILE_NAME}: {e}");
            TypeshimConfig::default()
        })
    })
}
