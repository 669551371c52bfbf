//! Insertion-ordered aggregate buckets
//!
//! A `Breakdown` maps a dimension label (category, status, month) to a
//! running total and count. Iteration follows first-insertion order, which
//! is what the "first category wins a tie" rule relies on.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Aggregate for one key of a breakdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub total: f64,
    pub count: usize,
}

impl Bucket {
    fn add(&mut self, cost: f64) {
        self.total += cost;
        self.count += 1;
    }
}

/// Ordered mapping from label to `Bucket`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown {
    entries: Vec<(String, Bucket)>,
    index: HashMap<String, usize>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one cost to the bucket for `key`, creating it at {0, 0} if absent
    pub fn record(&mut self, key: &str, cost: f64) {
        self.bucket_mut(key).add(cost);
    }

    fn bucket_mut(&mut self, key: &str) -> &mut Bucket {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                self.entries.push((key.to_string(), Bucket::default()));
                let idx = self.entries.len() - 1;
                self.index.insert(key.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get(&self, key: &str) -> Option<&Bucket> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    /// Bucket for `key`, or {0, 0} when the key never occurred
    pub fn get_or_default(&self, key: &str) -> Bucket {
        self.get(key).copied().unwrap_or_default()
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bucket)> {
        self.entries.iter().map(|(k, b)| (k.as_str(), b))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all bucket totals
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, b)| b.total).sum()
    }

    /// Sum of all bucket counts
    pub fn count(&self) -> usize {
        self.entries.iter().map(|(_, b)| b.count).sum()
    }

    /// Entry with the largest total; the earliest inserted wins ties
    pub fn largest(&self) -> Option<(&str, &Bucket)> {
        let mut best: Option<(&str, &Bucket)> = None;
        for (key, bucket) in self.iter() {
            match best {
                Some((_, b)) if bucket.total <= b.total => {}
                _ => best = Some((key, bucket)),
            }
        }
        best
    }

    /// Lexicographically smallest and largest keys
    pub fn key_range(&self) -> Option<(&str, &str)> {
        let min = self.keys().min()?;
        let max = self.keys().max()?;
        Some((min, max))
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, bucket) in &self.entries {
            map.serialize_entry(key, bucket)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Breakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = Breakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of label to {total, count}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Breakdown, A::Error> {
                let mut breakdown = Breakdown::new();
                while let Some((key, bucket)) = access.next_entry::<String, Bucket>()? {
                    *breakdown.bucket_mut(&key) = bucket;
                }
                Ok(breakdown)
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_lookup() {
        let mut b = Breakdown::new();
        b.record("Office", 10.0);
        b.record("Travel", 5.0);
        b.record("Office", 2.5);

        assert_eq!(b.len(), 2);
        assert_eq!(b.get("Office"), Some(&Bucket { total: 12.5, count: 2 }));
        assert_eq!(b.get_or_default("Meals"), Bucket::default());
        assert_eq!(b.total(), 17.5);
        assert_eq!(b.count(), 3);
    }

    #[test]
    fn test_insertion_order() {
        let mut b = Breakdown::new();
        for key in ["Travel", "Office", "Meals", "Office"] {
            b.record(key, 1.0);
        }
        let keys: Vec<&str> = b.keys().collect();
        assert_eq!(keys, vec!["Travel", "Office", "Meals"]);
    }

    #[test]
    fn test_largest_prefers_first_on_tie() {
        let mut b = Breakdown::new();
        b.record("Meals", 50.0);
        b.record("Office", 50.0);
        b.record("Travel", 20.0);
        assert_eq!(b.largest().unwrap().0, "Meals");

        b.record("Travel", 40.0);
        assert_eq!(b.largest().unwrap().0, "Travel");
    }

    #[test]
    fn test_largest_empty() {
        assert!(Breakdown::new().largest().is_none());
        assert!(Breakdown::new().key_range().is_none());
    }

    #[test]
    fn test_key_range() {
        let mut b = Breakdown::new();
        for key in ["2025-09", "2024-12", "2025-01"] {
            b.record(key, 1.0);
        }
        assert_eq!(b.key_range(), Some(("2024-12", "2025-09")));
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut b = Breakdown::new();
        b.record("pending", 89.25);
        b.record("approved", 245.5);

        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(
            json,
            r#"{"pending":{"total":89.25,"count":1},"approved":{"total":245.5,"count":1}}"#
        );

        let back: Breakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }
}
