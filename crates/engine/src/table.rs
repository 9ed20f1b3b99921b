use hashbrown::HashMap;
use serde::Serialize;

/// One distinct trimmed line and how many times it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry {
    pub key: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    count: u64,
    first_seen: usize,
}

/// Occurrence counts keyed by trimmed line content.
///
/// Each key remembers the position at which it first appeared, so
/// [`most_common`](Self::most_common) breaks ties deterministically without
/// relying on map iteration order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    slots: HashMap<String, Slot>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`, inserting it with count 1 if absent.
    /// The key is only allocated on first insertion.
    pub fn record(&mut self, key: &str) {
        let first_seen = self.slots.len();
        self.slots
            .entry_ref(key)
            .and_modify(|slot| slot.count += 1)
            .or_insert(Slot {
                count: 1,
                first_seen,
            });
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.slots.get(key).map(|slot| slot.count)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sum of all counts, i.e. the number of lines recorded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.slots.values().map(|slot| slot.count).sum()
    }

    /// Entries ordered by descending count; equal counts keep first-seen order.
    #[must_use]
    pub fn most_common(&self) -> Vec<TallyEntry> {
        let mut ranked: Vec<(&String, Slot)> =
            self.slots.iter().map(|(key, slot)| (key, *slot)).collect();
        // first_seen is unique, so this order is total
        ranked.sort_unstable_by(|(_, a), (_, b)| {
            b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen))
        });

        ranked
            .into_iter()
            .map(|(key, slot)| TallyEntry {
                key: key.clone(),
                count: slot.count,
            })
            .collect()
    }
}
