use std::collections::btree_map::{self, BTreeMap};

use super::error::BencodexError;
use super::key::Key;
use super::value::Value;

/// A Bencodex dictionary.
///
/// Entries are kept in canonical key order at all times (byte string keys
/// first, then text keys, each ascending by bytes) and keys are unique, so a
/// dictionary never needs sorting before it is encoded.
///
/// # Examples
///
/// ```
/// use bencodex::codec::{Dictionary, Key, Value};
///
/// let mut dict = Dictionary::new();
/// dict.insert(Key::text("b"), Value::Null);
/// dict.insert(Key::bytes(b"a".as_slice()), Value::from(1i64));
///
/// let keys: Vec<_> = dict.keys().cloned().collect();
/// assert_eq!(keys, vec![Key::bytes(b"a".as_slice()), Key::text("b")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dictionary {
    entries: BTreeMap<Key, Value>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the value previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Appends an entry whose key must sort strictly after every existing key.
    ///
    /// This is how the decoder builds dictionaries: input with misordered or
    /// duplicate keys is rejected instead of being silently normalized.
    ///
    /// # Errors
    ///
    /// Returns [`BencodexError::OutOfOrderKey`] if `key` is not greater than
    /// the current last key. The dictionary is left unchanged.
    pub fn push(&mut self, key: Key, value: Value) -> Result<(), BencodexError> {
        if !self.accepts(&key) {
            return Err(BencodexError::OutOfOrderKey { key });
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Returns `true` if `key` sorts strictly after every existing key, i.e.
    /// whether [`push`](Self::push) would accept it.
    pub fn accepts(&self, key: &Key) -> bool {
        self.entries
            .last_key_value()
            .map_or(true, |(last, _)| key > last)
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if the dictionary contains `key`.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes an entry, returning its value.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in canonical order.
    pub fn iter(&self) -> btree_map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    pub fn values(&self) -> btree_map::Values<'_, Key, Value> {
        self.entries.values()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Dictionary {
    type Item = (Key, Value);
    type IntoIter = btree_map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a Key, &'a Value);
    type IntoIter = btree_map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
