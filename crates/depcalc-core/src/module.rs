//! Module map data model and loader.
//!
//! A module map is a JSON object keyed by module id. Each value may carry
//! `requires`, `optional` and `use` lists and a `condition` object; every
//! other key in the document (paths, skins, language packs) is ignored.

use std::collections::BTreeMap;
use std::path::Path;

use depcalc_util::errors::{DepcalcError, DepcalcResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Mapping of module id to its definition.
pub type ModuleMap = BTreeMap<String, ModuleDefinition>;

/// Dependency metadata for a single module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    /// Hard upstream dependencies.
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub requires: Vec<String>,

    /// Soft upstream dependencies, walked exactly like `requires`.
    #[serde(
        default,
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub optional: Vec<String>,

    /// Modules aliased by this one. A non-empty list makes this module a rollup.
    #[serde(
        default,
        rename = "use",
        deserialize_with = "string_or_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub uses: Vec<String>,

    /// Pulls `condition.name` in whenever `condition.trigger` is walked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl ModuleDefinition {
    /// Whether this module only aliases other modules.
    pub fn is_rollup(&self) -> bool {
        !self.uses.is_empty()
    }
}

/// A conditional load: `name` is included whenever `trigger` is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub name: String,
    pub trigger: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accept `"b"`, `["b", "c"]` or `null` for list-valued fields.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
        None => Vec::new(),
    })
}

/// Parse a module map from a JSON string.
pub fn parse_module_map(content: &str) -> Result<ModuleMap, DepcalcError> {
    serde_json::from_str(content).map_err(|e| DepcalcError::Parse {
        path: "module map".to_string(),
        message: e.to_string(),
    })
}

/// Read and parse a module map document from disk.
pub fn load_module_map(path: &Path) -> DepcalcResult<ModuleMap> {
    let content = std::fs::read_to_string(path).map_err(|e| DepcalcError::Generic {
        message: format!("Failed to read module map {}: {e}", path.display()),
    })?;

    let map = serde_json::from_str::<ModuleMap>(&content).map_err(|e| DepcalcError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!("Loaded {} modules from {}", map.len(), path.display());
    Ok(map)
}
