//! Compact immutable metadata collections
//!
//! Descriptors attach arbitrary string key/value metadata. Almost every
//! collection in practice holds at most three entries, so those counts are
//! stored as inline fields with no backing allocation beyond the strings
//! themselves. Four or more entries fall back to two parallel key-sorted
//! arrays with binary-search lookup.
//!
//! Equality and hashing are order-independent: two collections with the same
//! key/value pairs are equal and hash identically no matter the insertion
//! order. Canonicalization uses ordinal key comparison, never the storage
//! order of the inline variants.

use std::hash::{Hash, Hasher};

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WeftError;
use crate::result::Result;

/// An immutable string key/value map with inline storage for 0–3 entries
#[derive(Debug, Clone)]
pub struct MetadataCollection {
    repr: Repr,
}

#[derive(Debug, Clone)]
enum Repr {
    Empty,
    One(Entry),
    Two(Entry, Entry),
    Three(Entry, Entry, Entry),
    /// Parallel arrays sorted by key
    Many {
        keys: Box<[String]>,
        values: Box<[String]>,
    },
}

type Entry = (String, String);

impl MetadataCollection {
    /// The empty collection
    pub fn empty() -> Self {
        Self { repr: Repr::Empty }
    }

    /// A collection holding exactly one pair
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            repr: Repr::One((key.into(), value.into())),
        }
    }

    /// Build a collection from key/value pairs, selecting the most compact
    /// representation for the pair count
    ///
    /// Two pairs supplying the same key is a caller contract violation and
    /// fails with [`WeftError::DuplicateMetadataKey`].
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<Entry> = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        match entries.len() {
            0 => Ok(Self::empty()),
            1 => Ok(Self {
                repr: Repr::One(entries.pop().unwrap()),
            }),
            2 => {
                check_distinct(&entries)?;
                let second = entries.pop().unwrap();
                let first = entries.pop().unwrap();
                Ok(Self {
                    repr: Repr::Two(first, second),
                })
            }
            3 => {
                check_distinct(&entries)?;
                let third = entries.pop().unwrap();
                let second = entries.pop().unwrap();
                let first = entries.pop().unwrap();
                Ok(Self {
                    repr: Repr::Three(first, second, third),
                })
            }
            _ => {
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                for window in entries.windows(2) {
                    if window[0].0 == window[1].0 {
                        return Err(WeftError::DuplicateMetadataKey {
                            key: window[0].0.clone(),
                        });
                    }
                }
                let (keys, values): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
                Ok(Self {
                    repr: Repr::Many {
                        keys: keys.into_boxed_slice(),
                        values: values.into_boxed_slice(),
                    },
                })
            }
        }
    }

    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Empty => 0,
            Repr::One(..) => 1,
            Repr::Two(..) => 2,
            Repr::Three(..) => 3,
            Repr::Many { keys, .. } => keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.repr, Repr::Empty)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match &self.repr {
            Repr::Empty => None,
            Repr::One(a) => (a.0 == key).then_some(a.1.as_str()),
            Repr::Two(a, b) => [a, b]
                .into_iter()
                .find(|entry| entry.0 == key)
                .map(|entry| entry.1.as_str()),
            Repr::Three(a, b, c) => [a, b, c]
                .into_iter()
                .find(|entry| entry.0 == key)
                .map(|entry| entry.1.as_str()),
            Repr::Many { keys, values } => keys
                .binary_search_by(|probe| probe.as_str().cmp(key))
                .ok()
                .map(|index| values[index].as_str()),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(_, value)| value)
    }

    /// Iterate pairs in storage order (insertion order for inline variants,
    /// key order for the array fallback)
    pub fn iter(&self) -> MetadataIter<'_> {
        MetadataIter {
            collection: self,
            index: 0,
        }
    }

    fn entry_at(&self, index: usize) -> Option<(&str, &str)> {
        let entry = match (&self.repr, index) {
            (Repr::One(a), 0) => a,
            (Repr::Two(a, _), 0) => a,
            (Repr::Two(_, b), 1) => b,
            (Repr::Three(a, _, _), 0) => a,
            (Repr::Three(_, b, _), 1) => b,
            (Repr::Three(_, _, c), 2) => c,
            (Repr::Many { keys, values }, index) if index < keys.len() => {
                return Some((keys[index].as_str(), values[index].as_str()));
            }
            _ => return None,
        };
        Some((entry.0.as_str(), entry.1.as_str()))
    }

    /// Pairs in canonical (ordinal key) order, used for equality and hashing
    fn canonical_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self.iter().collect();
        // Many storage is already key-sorted; the inline variants are not.
        if !matches!(self.repr, Repr::Many { .. }) {
            pairs.sort_by(|a, b| a.0.cmp(b.0));
        }
        pairs
    }
}

fn check_distinct(entries: &[Entry]) -> Result<()> {
    for (index, entry) in entries.iter().enumerate() {
        if entries[..index].iter().any(|other| other.0 == entry.0) {
            return Err(WeftError::DuplicateMetadataKey {
                key: entry.0.clone(),
            });
        }
    }
    Ok(())
}

impl PartialEq for MetadataCollection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for MetadataCollection {}

impl Hash for MetadataCollection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for (key, value) in self.canonical_pairs() {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl Default for MetadataCollection {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for MetadataCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.canonical_pairs() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MetadataCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let map = std::collections::BTreeMap::<String, String>::deserialize(deserializer)?;
        Self::from_pairs(map).map_err(D::Error::custom)
    }
}

pub struct MetadataIter<'a> {
    collection: &'a MetadataCollection,
    index: usize,
}

impl<'a> Iterator for MetadataIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.collection.entry_at(self.index)?;
        self.index += 1;
        Some(entry)
    }
}

impl<'a> IntoIterator for &'a MetadataCollection {
    type Item = (&'a str, &'a str);
    type IntoIter = MetadataIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(collection: &MetadataCollection) -> u64 {
        let mut hasher = DefaultHasher::new();
        collection.hash(&mut hasher);
        hasher.finish()
    }

    fn collection(pairs: &[(&str, &str)]) -> MetadataCollection {
        MetadataCollection::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let pairs = [("a", "1"), ("b", "2"), ("c", "3")];
        let forward = collection(&pairs);
        let mut reversed = pairs;
        reversed.reverse();
        let backward = collection(&reversed);

        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn equality_ignores_order_in_the_array_fallback() {
        let pairs = [("d", "4"), ("a", "1"), ("c", "3"), ("b", "2"), ("e", "5")];
        let shuffled = collection(&pairs);
        let mut sorted = pairs;
        sorted.sort();
        let ordered = collection(&sorted);

        assert_eq!(shuffled, ordered);
        assert_eq!(hash_of(&shuffled), hash_of(&ordered));
    }

    #[test]
    fn inline_and_fallback_with_same_pairs_compare_equal_only_on_same_len() {
        let three = collection(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let four = collection(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
        assert_ne!(three, four);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let result = MetadataCollection::from_pairs([("a", "1"), ("a", "2")]);
        assert!(matches!(
            result,
            Err(WeftError::DuplicateMetadataKey { key }) if key == "a"
        ));

        let result = MetadataCollection::from_pairs([
            ("a", "1"),
            ("b", "2"),
            ("c", "3"),
            ("d", "4"),
            ("b", "5"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn lookup_works_across_representations() {
        for count in 0..6 {
            let pairs: Vec<(String, String)> = (0..count)
                .map(|index| (format!("key{index}"), format!("value{index}")))
                .collect();
            let collection = MetadataCollection::from_pairs(pairs.clone()).unwrap();
            assert_eq!(collection.len(), count);
            for (key, value) in &pairs {
                assert_eq!(collection.get(key), Some(value.as_str()));
                assert!(collection.contains_key(key));
            }
            assert_eq!(collection.get("absent"), None);
        }
    }

    #[test]
    fn values_differing_only_in_value_are_unequal() {
        let a = collection(&[("a", "1")]);
        let b = collection(&[("a", "2")]);
        assert_ne!(a, b);
    }
}
