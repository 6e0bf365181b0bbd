//! Name-keyed accumulator that remembers first-seen order.
//!
//! Every ranking in the pipeline sorts a `Tally` by seconds with a stable
//! sort, so equal totals keep the order their names first appeared in.

use std::collections::HashMap;

use super::types::{saturating_total, UsageShare};

/// Accumulates seconds (plus an arbitrary per-name extra) by name.
#[derive(Debug)]
pub(crate) struct Tally<T = ()> {
    index: HashMap<String, usize>,
    entries: Vec<TallyEntry<T>>,
}

#[derive(Debug)]
pub(crate) struct TallyEntry<T> {
    pub name: String,
    pub seconds: u64,
    pub extra: T,
}

impl<T> Default for Tally<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<T> Tally<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds seconds to `name`, creating it with `init` on first sight.
    /// Returns the entry so callers can fold into `extra`.
    pub fn add_with(
        &mut self,
        name: &str,
        seconds: u64,
        init: impl FnOnce() -> T,
    ) -> &mut TallyEntry<T> {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.entries.push(TallyEntry {
                    name: name.to_string(),
                    seconds: 0,
                    extra: init(),
                });
                self.index.insert(name.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[idx];
        entry.seconds = entry.seconds.saturating_add(seconds);
        entry
    }

    /// Sum of all accumulated seconds, saturating.
    pub fn total(&self) -> u64 {
        saturating_total(self.entries.iter().map(|e| e.seconds))
    }

    /// Entries sorted by seconds, descending; ties stay in first-seen order.
    pub fn into_ranked(self) -> Vec<TallyEntry<T>> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.seconds.cmp(&a.seconds));
        entries
    }
}

impl Tally<()> {
    pub fn add(&mut self, name: &str, seconds: u64) {
        self.add_with(name, seconds, || ());
    }

    /// Ranks entries and converts them to percentage shares.
    ///
    /// A zero total yields 0% for every entry instead of dividing by zero.
    pub fn into_shares(self, top_n: Option<usize>) -> Vec<UsageShare> {
        let total = self.total();
        let mut ranked = self.into_ranked();
        if let Some(n) = top_n {
            ranked.truncate(n);
        }

        ranked
            .into_iter()
            .enumerate()
            .map(|(i, entry)| UsageShare {
                percentage: percentage(entry.seconds, total),
                name: entry.name,
                total_seconds: entry.seconds,
                rank: i + 1,
            })
            .collect()
    }
}

/// `part / total * 100`, defined as 0 when `total` is 0.
pub(crate) fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
