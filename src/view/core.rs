use super::error::{ImmutableViewError, ViewOperation};
use crate::value::{self, RawValue};
use std::collections::HashMap;
use std::ops::Index;
use tracing::{debug, warn};

static NULL: RawValue = RawValue::Null;

/// Uniform key/value table protocol.
///
/// Implemented by plain `HashMap`s, so generic table code can run against a
/// mutable map, and by [`EnvView`], which answers every lookup but refuses
/// every mutation with [`ImmutableViewError`].
pub trait EnvTable {
    /// Stored value for `key`, `None` if the key is missing
    fn lookup(&self, key: &str) -> Option<&RawValue>;

    /// Whether `key` is present, whatever its value
    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Store `value` under `key`, returning the previous value
    ///
    /// # Errors
    ///
    /// Returns [`ImmutableViewError`] if the table is read-only.
    fn assign(
        &mut self,
        key: &str,
        value: RawValue,
    ) -> Result<Option<RawValue>, ImmutableViewError>;

    /// Remove `key`, returning the removed value
    ///
    /// # Errors
    ///
    /// Returns [`ImmutableViewError`] if the table is read-only.
    fn unset(&mut self, key: &str) -> Result<Option<RawValue>, ImmutableViewError>;
}

impl EnvTable for HashMap<String, RawValue> {
    fn lookup(&self, key: &str) -> Option<&RawValue> {
        self.get(key)
    }

    fn assign(
        &mut self,
        key: &str,
        value: RawValue,
    ) -> Result<Option<RawValue>, ImmutableViewError> {
        Ok(self.insert(key.to_string(), value))
    }

    fn unset(&mut self, key: &str) -> Result<Option<RawValue>, ImmutableViewError> {
        Ok(self.remove(key))
    }
}

/// Immutable snapshot of a server environment map with typed getters.
///
/// The map is captured once at construction and never refreshed. Typed
/// getters treat a missing key and a stored `null` the same way: `None` for
/// scalar targets, an empty list for [`get_list`](Self::get_list) and `false`
/// for [`get_bool`](Self::get_bool). [`has`](Self::has) and
/// [`get_raw`](Self::get_raw) still report a stored `null` as present.
///
/// There is no `IndexMut` and no `&mut` accessor; the only mutation entry
/// points are those of [`EnvTable`], and they always fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvView {
    entries: HashMap<String, RawValue>,
}

impl EnvView {
    /// Capture a snapshot from any iterator of key/value pairs.
    #[must_use]
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RawValue>,
    {
        Self::from_map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    fn from_map(entries: HashMap<String, RawValue>) -> Self {
        debug!(entries = entries.len(), "Environment snapshot captured");
        Self { entries }
    }

    fn present(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key).filter(|v| !v.is_null())
    }

    /// `true` iff `key` is in the map, regardless of its value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stored value for `key` without coercion.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    /// Textual form of the value, `None` when absent.
    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.present(key).map(value::to_text)
    }

    /// Integer form of the value, `None` when absent.
    ///
    /// Non-numeric strings yield `Some(0)`, not `None`.
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.present(key).map(value::to_int)
    }

    /// Float form of the value, `None` when absent.
    #[must_use]
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.present(key).map(value::to_float)
    }

    /// List form of the value; empty when absent, scalars wrapped.
    #[must_use]
    pub fn get_list(&self, key: &str) -> Vec<RawValue> {
        self.present(key).map(value::to_list).unwrap_or_default()
    }

    /// Truthiness of the value; `false` when absent.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> bool {
        self.present(key).is_some_and(value::to_flag)
    }

    /// Number of keys in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in arbitrary order.
    #[must_use]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in arbitrary order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Owned copy of the underlying map, e.g. to derive a modified snapshot.
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, RawValue> {
        self.entries.clone()
    }
}

impl Index<&str> for EnvView {
    type Output = RawValue;

    /// Same lookup as [`EnvView::get_raw`]; missing keys read as `null`.
    fn index(&self, key: &str) -> &RawValue {
        self.entries.get(key).unwrap_or(&NULL)
    }
}

impl EnvTable for EnvView {
    fn lookup(&self, key: &str) -> Option<&RawValue> {
        self.get_raw(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.has(key)
    }

    fn assign(
        &mut self,
        key: &str,
        _value: RawValue,
    ) -> Result<Option<RawValue>, ImmutableViewError> {
        warn!(
            key = %key,
            operation = "write",
            "Rejected mutation of read-only environment view"
        );
        Err(ImmutableViewError::new(key, ViewOperation::Write))
    }

    fn unset(&mut self, key: &str) -> Result<Option<RawValue>, ImmutableViewError> {
        warn!(
            key = %key,
            operation = "delete",
            "Rejected mutation of read-only environment view"
        );
        Err(ImmutableViewError::new(key, ViewOperation::Delete))
    }
}

impl From<HashMap<String, RawValue>> for EnvView {
    fn from(entries: HashMap<String, RawValue>) -> Self {
        Self::from_map(entries)
    }
}

impl From<serde_json::Map<String, RawValue>> for EnvView {
    fn from(entries: serde_json::Map<String, RawValue>) -> Self {
        Self::new(entries)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvView
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_present_but_absent_for_typed_getters() {
        let view = EnvView::new([("KEY", RawValue::Null)]);
        assert!(view.has("KEY"));
        assert_eq!(view.get_raw("KEY"), Some(&RawValue::Null));
        assert_eq!(view.get_string("KEY"), None);
        assert_eq!(view.get_int("KEY"), None);
        assert_eq!(view.get_float("KEY"), None);
        assert!(view.get_list("KEY").is_empty());
        assert!(!view.get_bool("KEY"));
    }

    #[test]
    fn test_hashmap_table_is_mutable() {
        let mut map: HashMap<String, RawValue> = HashMap::new();
        assert_eq!(map.assign("A", json!("1")).unwrap(), None);
        assert_eq!(map.assign("A", json!("2")).unwrap(), Some(json!("1")));
        assert!(map.contains("A"));
        assert_eq!(map.unset("A").unwrap(), Some(json!("2")));
        assert!(!map.contains("A"));
    }

    #[test]
    fn test_index_missing_key_reads_null() {
        let view = EnvView::default();
        assert!(view["MISSING"].is_null());
    }
}
