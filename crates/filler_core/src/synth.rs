use std::collections::HashSet;

use crate::deficit::Deficits;
use crate::types::{CategoryIndex, WordEntry};

/// Base placeholder for slot `i` of `category`, before disambiguation.
pub fn filler_word(category: &str, i: usize) -> String {
    format!("{category} extra {i}")
}

/// Generates exactly `missing` fillers for each deficient category.
///
/// A candidate that collides with an existing word, or with a filler already
/// produced for the same category, gets a ` (n)` suffix with `n` counting up
/// from 2 until it is free.
pub fn synthesize_fillers(deficits: &Deficits, index: &CategoryIndex) -> Vec<WordEntry> {
    let mut fillers = Vec::with_capacity(deficits.total_missing());
    for deficit in deficits.iter() {
        let mut seen: HashSet<String> = index.words(&deficit.category).iter().cloned().collect();
        for i in 1..=deficit.missing {
            let word = unique_candidate(filler_word(&deficit.category, i), &seen);
            seen.insert(word.clone());
            fillers.push(WordEntry::new(word, deficit.category.clone()));
        }
    }
    fillers
}

fn unique_candidate(base: String, seen: &HashSet<String>) -> String {
    if !seen.contains(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base} ({n})");
        if !seen.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_skips_taken_variants() {
        let seen: HashSet<String> = ["x extra 1", "x extra 1 (2)", "x extra 1 (3)"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(unique_candidate("x extra 1".into(), &seen), "x extra 1 (4)");
        assert_eq!(unique_candidate("x extra 2".into(), &seen), "x extra 2");
    }
}
