use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use depcalc_util::errors::{DepcalcError, DepcalcResult};

/// Name of the optional per-root configuration file.
pub const CONFIG_FILE: &str = "depcalc.toml";

/// Root configuration loaded from `<root>/depcalc.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RootConfig {
    /// Path of the module map document, relative to the root.
    #[serde(default = "default_module_map")]
    pub module_map: String,

    /// Glob (relative to the root) selecting component descriptors.
    #[serde(default = "default_components")]
    pub components: String,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            module_map: default_module_map(),
            components: default_components(),
        }
    }
}

fn default_module_map() -> String {
    "src/loader/js/yui3.json".to_string()
}

fn default_components() -> String {
    "src/*/build.json".to_string()
}

impl RootConfig {
    /// Load `depcalc.toml` from `root`, or return defaults if the file doesn't exist.
    pub fn load(root: &Path) -> DepcalcResult<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| DepcalcError::Generic {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            DepcalcError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Absolute path of the module map for `root`.
    pub fn module_map_path(&self, root: &Path) -> PathBuf {
        root.join(&self.module_map)
    }
}

/// Locate the module-map root.
///
/// An explicit path (from `--root` or `DEPCALC_ROOT`) wins; otherwise the
/// nearest ancestor of `cwd` holding a `depcalc.toml` is used.
pub fn discover_root(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf, DepcalcError> {
    if let Some(root) = explicit {
        if root.is_dir() {
            return Ok(root.to_path_buf());
        }
        return Err(DepcalcError::ConfigurationMissing {
            message: format!("root {} is not a directory", root.display()),
        });
    }

    depcalc_util::fs::find_ancestor_with(cwd, CONFIG_FILE).ok_or_else(|| {
        DepcalcError::ConfigurationMissing {
            message: "Unable to determine the module-map root".to_string(),
        }
    })
}
