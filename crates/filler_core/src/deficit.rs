use crate::types::CategoryCounts;

/// Per-category population goal used when no other target is configured.
pub const DEFAULT_TARGET: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deficit {
    pub category: String,
    pub missing: usize,
}

/// Categories below target, in the same order as the counts they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deficits {
    target: usize,
    items: Vec<Deficit>,
}

impl Deficits {
    pub fn target(&self) -> usize {
        self.target
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.items
            .iter()
            .find(|d| d.category == category)
            .map(|d| d.missing)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of fillers needed across all categories.
    pub fn total_missing(&self) -> usize {
        self.items.iter().map(|d| d.missing).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Deficit> + '_ {
        self.items.iter()
    }
}

/// Records `target - count` for every counted category strictly below `target`.
///
/// Only categories present in `counts` are considered; a category with no
/// entries in the word bank is never topped up.
pub fn compute_deficits(counts: &CategoryCounts, target: usize) -> Deficits {
    let items = counts
        .iter()
        .filter(|&(_, count)| count < target)
        .map(|(category, count)| Deficit {
            category: category.to_string(),
            missing: target - count,
        })
        .collect();
    Deficits { target, items }
}
