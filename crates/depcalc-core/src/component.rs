//! Component map data model and descriptor discovery.
//!
//! Components are packaging units. Each one is described on disk by a
//! descriptor (`build.json` in a YUI checkout) naming the component and the
//! modules it builds; the resolver only needs the reduced
//! `component -> [module]` form.

use std::collections::BTreeMap;
use std::path::Path;

use depcalc_util::errors::{DepcalcError, DepcalcResult};
use globset::{GlobBuilder, GlobSetBuilder};
use serde::de::IgnoredAny;
use serde::Deserialize;

/// Mapping of component id to the modules shipped in it.
pub type ComponentMap = BTreeMap<String, Vec<String>>;

/// A single per-component descriptor file.
#[derive(Debug, Deserialize)]
pub struct ComponentDescriptor {
    pub name: String,
    #[serde(default)]
    pub builds: BTreeMap<String, IgnoredAny>,
}

impl ComponentDescriptor {
    /// Read and parse a descriptor from disk.
    pub fn from_path(path: &Path) -> DepcalcResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DepcalcError::Generic {
            message: format!("Failed to read component descriptor {}: {e}", path.display()),
        })?;
        serde_json::from_str(&content).map_err(|e| {
            DepcalcError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

/// Reduce descriptors into a component map.
///
/// Descriptors sharing a name are merged, and each module list is sorted.
pub fn build_component_map<I>(descriptors: I) -> ComponentMap
where
    I: IntoIterator<Item = ComponentDescriptor>,
{
    let mut components = ComponentMap::new();
    for descriptor in descriptors {
        components
            .entry(descriptor.name)
            .or_default()
            .extend(descriptor.builds.into_keys());
    }
    for modules in components.values_mut() {
        modules.sort();
    }
    components
}

/// Find every descriptor under `root` whose root-relative path matches
/// `pattern` (e.g. `src/*/build.json`) and reduce them into a component map.
pub fn discover_component_map(root: &Path, pattern: &str) -> DepcalcResult<ComponentMap> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| DepcalcError::Generic {
            message: format!("Invalid component pattern `{pattern}`: {e}"),
        })?;
    let matcher = GlobSetBuilder::new()
        .add(glob)
        .build()
        .map_err(|e| DepcalcError::Generic {
            message: format!("Invalid component pattern `{pattern}`: {e}"),
        })?;

    let mut descriptors = Vec::new();
    for path in depcalc_util::fs::collect_files(root) {
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if matcher.is_match(relative) {
            descriptors.push(ComponentDescriptor::from_path(&path)?);
        }
    }

    tracing::debug!(
        "Found {} component descriptors under {} matching `{pattern}`",
        descriptors.len(),
        root.display()
    );
    Ok(build_component_map(descriptors))
}
