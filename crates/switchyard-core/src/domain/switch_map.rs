//! SwitchMap - predicate → transformer の順序付きマッピング
//!
//! 反復順序がそのまま評価の優先順位になります（挿入順）。
//! キー `None` のエントリは default transformer を表します。
//!
//! # キーの同一性
//! - `Some(p)` 同士は `Arc::ptr_eq` で比較する（同じ predicate インスタンスなら同じキー）
//! - `None` は 1 つだけ存在できる

use std::sync::Arc;

use crate::ports::{PredicateRef, TransformerRef};

type Entry<I, O> = (Option<PredicateRef<I>>, Option<TransformerRef<I, O>>);

/// Insertion-ordered map from predicate to transformer.
///
/// Values are optional so that an absent transformer can be represented and
/// rejected when the map is turned into a dispatcher.
pub struct SwitchMap<I, O> {
    entries: Vec<Entry<I, O>>,
}

fn same_key<I>(a: Option<&PredicateRef<I>>, b: Option<&PredicateRef<I>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

impl<I, O> SwitchMap<I, O> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the value for `key`.
    ///
    /// A replaced entry keeps its original position. Returns the previous
    /// value when the key was already present.
    pub fn insert(
        &mut self,
        key: Option<PredicateRef<I>>,
        value: Option<TransformerRef<I, O>>,
    ) -> Option<Option<TransformerRef<I, O>>> {
        if let Some(position) = self.position(key.as_ref()) {
            let previous = std::mem::replace(&mut self.entries[position].1, value);
            return Some(previous);
        }
        self.entries.push((key, value));
        None
    }

    /// Remove the entry for `key`, preserving the order of the others.
    pub fn remove(&mut self, key: Option<&PredicateRef<I>>) -> Option<Option<TransformerRef<I, O>>> {
        let position = self.position(key)?;
        let (_, value) = self.entries.remove(position);
        Some(value)
    }

    pub fn get(&self, key: Option<&PredicateRef<I>>) -> Option<&Option<TransformerRef<I, O>>> {
        self.position(key).map(|position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: Option<&PredicateRef<I>>) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&PredicateRef<I>>, Option<&TransformerRef<I, O>>)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    fn position(&self, key: Option<&PredicateRef<I>>) -> Option<usize> {
        self.entries.iter().position(|(k, _)| same_key(k.as_ref(), key))
    }
}

impl<I, O> IntoIterator for SwitchMap<I, O> {
    type Item = Entry<I, O>;
    type IntoIter = std::vec::IntoIter<Entry<I, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<I, O> FromIterator<Entry<I, O>> for SwitchMap<I, O> {
    fn from_iter<T: IntoIterator<Item = Entry<I, O>>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<I, O> Default for SwitchMap<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> std::fmt::Debug for SwitchMap<I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchMap")
            .field("len", &self.entries.len())
            .field("has_default", &self.contains_key(None))
            .finish()
    }
}
