use crate::types::{CategoryCounts, CategoryIndex, WordEntry};

/// Result of one pass over the word bank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tally {
    pub counts: CategoryCounts,
    pub index: CategoryIndex,
}

/// Counts entries per category and groups existing words in a single pass.
pub fn tally(entries: &[WordEntry]) -> Tally {
    let mut tally = Tally::default();
    for entry in entries {
        tally.counts.increment(&entry.category);
        tally.index.push(entry);
    }
    tally
}
