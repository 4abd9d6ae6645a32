use std::collections::HashMap;

use crate::models::IpTally;

/// Counter keyed by source IP that remembers the order keys were first seen
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Maps key -> slot in `entries`
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to `key`, creating it with a count of 1 if absent
    pub fn increment(&mut self, key: &str) -> u64 {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.entries.push((key.to_string(), 0));
                let slot = self.entries.len() - 1;
                self.index.insert(key.to_string(), slot);
                slot
            }
        };

        let entry = &mut self.entries[slot];
        entry.1 += 1;
        entry.1
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Up to `limit` entries by count descending.
    ///
    /// The sort is stable, so equal counts keep first-seen order.
    pub fn ranked(&self, limit: usize) -> Vec<IpTally> {
        let mut sorted: Vec<&(String, u64)> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
            .into_iter()
            .take(limit)
            .map(|(key, count)| IpTally::new(key.clone(), *count))
            .collect()
    }

    /// All entries as report rows, first-seen order
    pub fn tallies(&self) -> Vec<IpTally> {
        self.iter().map(|(key, count)| IpTally::new(key, count)).collect()
    }
}
