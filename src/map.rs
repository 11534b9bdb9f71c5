//! Map targets for mapping literals.
//!
//! Mapping literals never overwrite: a key that appears twice fails the parse.
//! [`UniqueInsert`] is the one operation the mapping builder needs from a map
//! type, an insert that refuses keys already present.
//!
//! ## Why IndexMap?
//!
//! [`Parser::mapping`](crate::Parser::mapping) returns an [`IndexMap`] so entries
//! iterate in the order the literal lists them. `HashMap` and `BTreeMap` are
//! available through [`Parser::mapping_into`](crate::Parser::mapping_into) and
//! [`FromLiteral`](crate::FromLiteral).
//!
//! ## Examples
//!
//! ```rust
//! use rawlit::UniqueInsert;
//! use std::collections::BTreeMap;
//!
//! let mut map = BTreeMap::new();
//! assert!(map.insert_unique(1, "one").is_ok());
//! assert_eq!(map.insert_unique(1, "uno"), Err((1, "uno")));
//! assert_eq!(map[&1], "one");
//! ```

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A map that can be filled from a mapping literal.
pub trait UniqueInsert<K, V>: Default {
    /// Inserts `key` only if it is absent. A present key leaves the map unchanged
    /// and hands the rejected pair back.
    fn insert_unique(&mut self, key: K, value: V) -> Result<(), (K, V)>;

    /// Creates an empty map with room for `capacity` entries where the map supports it.
    fn with_expected_len(_capacity: usize) -> Self {
        Self::default()
    }
}

impl<K, V, S> UniqueInsert<K, V> for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn insert_unique(&mut self, key: K, value: V) -> Result<(), (K, V)> {
        if self.contains_key(&key) {
            return Err((key, value));
        }
        self.insert(key, value);
        Ok(())
    }

    fn with_expected_len(capacity: usize) -> Self {
        IndexMap::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<K, V, S> UniqueInsert<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn insert_unique(&mut self, key: K, value: V) -> Result<(), (K, V)> {
        if self.contains_key(&key) {
            return Err((key, value));
        }
        self.insert(key, value);
        Ok(())
    }

    fn with_expected_len(capacity: usize) -> Self {
        HashMap::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<K: Ord, V> UniqueInsert<K, V> for BTreeMap<K, V> {
    fn insert_unique(&mut self, key: K, value: V) -> Result<(), (K, V)> {
        if self.contains_key(&key) {
            return Err((key, value));
        }
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Pairs = [(&'static str, i32)];

    fn fill<M: UniqueInsert<&'static str, i32>>(pairs: &Pairs) -> Result<M, &'static str> {
        let mut map = M::with_expected_len(pairs.len());
        for &(key, value) in pairs {
            map.insert_unique(key, value).map_err(|(key, _)| key)?;
        }
        Ok(map)
    }

    #[test]
    fn test_index_map_keeps_first_value_and_order() {
        let map: IndexMap<&str, i32> = fill(&[("b", 1), ("a", 2)]).unwrap();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "a"]);

        let mut map = map;
        assert_eq!(map.insert_unique("b", 9), Err(("b", 9)));
        assert_eq!(map["b"], 1);
    }

    #[test]
    fn test_duplicate_rejected_for_every_map() {
        let pairs = [("k", 1), ("k", 2)];
        assert_eq!(fill::<IndexMap<&str, i32>>(&pairs), Err("k"));
        assert_eq!(fill::<HashMap<&str, i32>>(&pairs), Err("k"));
        assert_eq!(fill::<BTreeMap<&str, i32>>(&pairs), Err("k"));
    }
}
