//! Record stores shared by the concrete kinds.
//!
//! Kinds differ in what they call a key and how they print, not in how they hold records, so
//! the holding is done here once.
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use runlog_core::ErrorRecord;

use super::MergePolicy;

/// One record per dedup key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedRecords {
    entries: BTreeMap<String, ErrorRecord>,
}

impl KeyedRecords {
    pub fn single(key: impl Into<String>, record: ErrorRecord) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.into(), record);
        Self { entries }
    }

    /// Store `record` under `key` according to `policy`; returns whether it was stored.
    ///
    /// Only [`MergePolicy::Replace`] overwrites. Every other policy keeps the existing record.
    pub fn insert(&mut self, key: String, record: ErrorRecord, policy: MergePolicy) -> bool {
        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
            Entry::Occupied(mut slot) if policy == MergePolicy::Replace => {
                slot.insert(record);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn merge(&mut self, other: &KeyedRecords, policy: MergePolicy) {
        for (key, record) in &other.entries {
            self.insert(key.clone(), record.clone(), policy);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ErrorRecord> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorRecord)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }
}

/// Records grouped under a group key, each identified within its group by an item key.
///
/// The effective dedup key is the `(group, item)` pair: a group grows by concatenation, but an
/// item already present in the group is never added twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedRecords {
    groups: BTreeMap<String, Vec<(String, ErrorRecord)>>,
}

impl GroupedRecords {
    pub fn single(group: impl Into<String>, item: impl Into<String>, record: ErrorRecord) -> Self {
        let mut groups = BTreeMap::new();
        groups.insert(group.into(), vec![(item.into(), record)]);
        Self { groups }
    }

    pub fn insert(&mut self, group: String, item: String, record: ErrorRecord) -> bool {
        let entries = self.groups.entry(group).or_default();
        if entries.iter().any(|(existing, _)| *existing == item) {
            return false;
        }
        entries.push((item, record));
        true
    }

    pub fn merge(&mut self, other: &GroupedRecords) {
        for (group, entries) in &other.groups {
            for (item, record) in entries {
                self.insert(group.clone(), item.clone(), record.clone());
            }
        }
    }

    /// Number of distinct `(group, item)` pairs.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn group_count(&self) -> usize {
        self.groups.values().filter(|entries| !entries.is_empty()).count()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[(String, ErrorRecord)])> {
        self.groups
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(g, entries)| (g.as_str(), entries.as_slice()))
    }

    /// Every `(group, item, record)` in group order, then insertion order within the group.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &ErrorRecord)> {
        self.groups.iter().flat_map(|(group, entries)| {
            entries
                .iter()
                .map(move |(item, record)| (group.as_str(), item.as_str(), record))
        })
    }
}
