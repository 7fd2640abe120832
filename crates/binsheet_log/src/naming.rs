//! Bin key to display-name resolution.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::conf::C_FALLBACK_PREFIX_DEFAULT;
use crate::parse::extract_keys;

////////////////////////////////////////////////////////////////////////////////
// #region Resolution

/// Resolve `key` against `mapping`, falling back to `fallback_prefix + key`.
///
/// An explicit empty name in `mapping` is honored as-is.
pub fn resolve_display_name(
    key: &str,
    mapping: &BTreeMap<String, String>,
    fallback_prefix: &str,
) -> String {
    match mapping.get(key) {
        Some(name) => name.clone(),
        None => format!("{fallback_prefix}{key}"),
    }
}

/// Union the keys-only scan over several log texts, sorted as strings.
pub fn extract_unique_keys<'a, I>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut set_keys = BTreeSet::new();
    for text in texts {
        set_keys.extend(extract_keys(text));
    }
    set_keys.into_iter().collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region NamingSnapshot

/// User mapping plus fallback prefix, as read by the report builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecNaming {
    mapping: BTreeMap<String, String>,
    fallback_prefix: String,
}

impl Default for SpecNaming {
    fn default() -> Self {
        Self {
            mapping: BTreeMap::new(),
            fallback_prefix: C_FALLBACK_PREFIX_DEFAULT.to_string(),
        }
    }
}

impl SpecNaming {
    /// Create naming from an explicit mapping and prefix.
    pub fn new(mapping: BTreeMap<String, String>, fallback_prefix: impl Into<String>) -> Self {
        Self {
            mapping,
            fallback_prefix: fallback_prefix.into(),
        }
    }

    /// Display name for `key`.
    pub fn resolve(&self, key: &str) -> String {
        resolve_display_name(key, &self.mapping, &self.fallback_prefix)
    }

    /// Current fallback prefix.
    pub fn fallback_prefix(&self) -> &str {
        &self.fallback_prefix
    }

    /// User-assigned names.
    pub fn mapping(&self) -> &BTreeMap<String, String> {
        &self.mapping
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region NamingStore

/// Run-scoped naming state, replaced wholesale on every edit.
///
/// Readers take an [`Arc`] snapshot; edits made afterwards never show up in a
/// snapshot that is already being rendered.
#[derive(Debug)]
pub struct NamingStore {
    inner: ArcSwap<SpecNaming>,
}

impl Default for NamingStore {
    fn default() -> Self {
        Self::new(SpecNaming::default())
    }
}

impl NamingStore {
    /// Create a store seeded with `naming`.
    pub fn new(naming: SpecNaming) -> Self {
        Self {
            inner: ArcSwap::from_pointee(naming),
        }
    }

    /// Consistent view for one report generation pass.
    pub fn snapshot(&self) -> Arc<SpecNaming> {
        self.inner.load_full()
    }

    /// Replace the whole naming state.
    pub fn replace(&self, naming: SpecNaming) {
        self.inner.store(Arc::new(naming));
    }

    /// Assign `name` to `key`; an empty name is a valid override.
    pub fn set_name(&self, key: impl Into<String>, name: impl Into<String>) {
        let c_key = key.into();
        let c_name = name.into();
        self.inner.rcu(|current| {
            let mut naming = SpecNaming::clone(current);
            naming.mapping.insert(c_key.clone(), c_name.clone());
            naming
        });
        tracing::debug!(key = %c_key, name = %c_name, "naming entry set");
    }

    /// Change the prefix used for keys without an assigned name.
    pub fn set_fallback_prefix(&self, prefix: impl Into<String>) {
        let c_prefix = prefix.into();
        self.inner.rcu(|current| {
            let mut naming = SpecNaming::clone(current);
            naming.fallback_prefix = c_prefix.clone();
            naming
        });
        tracing::debug!(prefix = %c_prefix, "fallback prefix set");
    }

    /// Pin `prefix + key` as the name of every key not named yet.
    ///
    /// Returns how many entries were added.
    pub fn seed_fallback_names<'a, I>(&self, keys: I) -> usize
    where
        I: IntoIterator<Item = &'a String>,
    {
        let l_keys: Vec<&String> = keys.into_iter().collect();
        let mut n_added = 0usize;
        self.inner.rcu(|current| {
            let mut naming = SpecNaming::clone(current);
            n_added = 0;
            for key in &l_keys {
                if !naming.mapping.contains_key(*key) {
                    let c_name = format!("{}{key}", naming.fallback_prefix);
                    naming.mapping.insert((*key).clone(), c_name);
                    n_added += 1;
                }
            }
            naming
        });
        n_added
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_resolve_display_name_falls_back_to_prefix() {
        let mapping = BTreeMap::new();

        assert_eq!(resolve_display_name("001", &mapping, "BIN"), "BIN001");
        assert_eq!(resolve_display_name("7", &mapping, ""), "7");
    }

    #[test]
    fn test_resolve_display_name_honors_empty_override() {
        let mapping = BTreeMap::from([("001".to_string(), String::new())]);

        assert_eq!(resolve_display_name("001", &mapping, "BIN"), "");
        assert_eq!(resolve_display_name("002", &mapping, "BIN"), "BIN002");
    }

    #[test]
    fn test_extract_unique_keys_unions_and_sorts() {
        let l_keys = extract_unique_keys([
            "RowData: 2 10 ___\n",
            "RowData: 10 ... 1\nLOT: x\n",
            "WAFER: none\n",
        ]);

        assert_eq!(l_keys, vec!["...", "1", "10", "2"]);
    }

    #[test]
    fn test_naming_default_prefix_is_bin() {
        let naming = SpecNaming::default();

        assert_eq!(naming.fallback_prefix(), "BIN");
        assert_eq!(naming.resolve("003"), "BIN003");
    }

    #[test]
    fn test_naming_store_snapshot_is_isolated_from_later_edits() {
        let store = NamingStore::default();
        store.set_name("001", "PASS");
        let snapshot = store.snapshot();

        store.set_fallback_prefix("HB");
        store.set_name("001", "FAIL");

        assert_eq!(snapshot.resolve("001"), "PASS");
        assert_eq!(snapshot.resolve("002"), "BIN002");
        assert_eq!(store.snapshot().resolve("001"), "FAIL");
        assert_eq!(store.snapshot().resolve("002"), "HB002");
    }

    #[test]
    fn test_naming_store_seed_fallback_names_keeps_existing() {
        let store = NamingStore::default();
        store.set_name("002", "OPEN");
        let l_keys = vec!["001".to_string(), "002".to_string()];

        let n_added = store.seed_fallback_names(&l_keys);
        store.set_fallback_prefix("SB");
        let snapshot = store.snapshot();

        assert_eq!(n_added, 1);
        assert_eq!(snapshot.resolve("001"), "BIN001");
        assert_eq!(snapshot.resolve("002"), "OPEN");
        assert_eq!(snapshot.resolve("003"), "SB003");
    }

    #[test]
    fn test_naming_store_replace() {
        let store = NamingStore::default();
        store.replace(SpecNaming::new(
            BTreeMap::from([("1".to_string(), "GOOD".to_string())]),
            "X",
        ));

        assert_eq!(store.snapshot().resolve("1"), "GOOD");
        assert_eq!(store.snapshot().resolve("2"), "X2");
    }
}
