//! Module → component membership.

use std::collections::{BTreeSet, HashMap};

use depcalc_core::component::ComponentMap;

/// Resolves module sets to the components that ship them.
#[derive(Debug, Default)]
pub struct ComponentIndex {
    components: ComponentMap,
    /// Reverse of `components`: module id to every component listing it.
    membership: HashMap<String, BTreeSet<String>>,
}

impl ComponentIndex {
    pub fn new(components: ComponentMap) -> Self {
        let mut membership: HashMap<String, BTreeSet<String>> = HashMap::new();
        for (component, modules) in &components {
            for module in modules {
                membership
                    .entry(module.clone())
                    .or_default()
                    .insert(component.clone());
            }
        }
        Self {
            components,
            membership,
        }
    }

    /// Modules listed by `component`, or `None` if it is not in the map.
    pub fn modules_of(&self, component: &str) -> Option<&[String]> {
        self.components.get(component).map(Vec::as_slice)
    }

    /// Components containing at least one of `modules`, sorted and deduplicated.
    pub fn lookup<'a, I>(&self, modules: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        modules
            .into_iter()
            .filter_map(|m| self.membership.get(m))
            .flatten()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> ComponentIndex {
        let mut map = ComponentMap::new();
        map.insert("x".into(), vec!["a".into(), "b".into()]);
        map.insert("y".into(), vec!["c".into(), "c".into()]);
        map.insert("z".into(), vec!["b".into()]);
        ComponentIndex::new(map)
    }

    #[test]
    fn lookup_collects_every_owning_component() {
        let idx = index();
        let found: Vec<String> = idx.lookup(["b"]).into_iter().collect();
        assert_eq!(found, vec!["x", "z"]);
    }

    #[test]
    fn lookup_dedupes_and_sorts() {
        let idx = index();
        let found: Vec<String> = idx.lookup(["c", "a", "b", "c"]).into_iter().collect();
        assert_eq!(found, vec!["x", "y", "z"]);
    }

    #[test]
    fn unknown_modules_match_nothing() {
        let idx = index();
        assert!(idx.lookup(["nope"]).is_empty());
        assert!(ComponentIndex::default().lookup(["a"]).is_empty());
    }

    #[test]
    fn modules_of_component() {
        let idx = index();
        assert_eq!(idx.modules_of("x"), Some(&["a".to_string(), "b".to_string()][..]));
        assert!(idx.modules_of("missing").is_none());
    }
}
