use serde::Serialize;

use crate::deficit::{compute_deficits, Deficits};
use crate::synth::synthesize_fillers;
use crate::tally::tally;
use crate::types::{CategoryCounts, WordEntry};

/// The persisted suggestion file: fillers to add plus the original counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputReport {
    pub fillers: Vec<WordEntry>,
    pub counts: CategoryCounts,
}

/// Everything computed from one word bank for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillPlan {
    counts: CategoryCounts,
    deficits: Deficits,
    fillers: Vec<WordEntry>,
}

impl FillPlan {
    pub fn build(entries: &[WordEntry], target: usize) -> Self {
        let tally = tally(entries);
        let deficits = compute_deficits(&tally.counts, target);
        let fillers = synthesize_fillers(&deficits, &tally.index);
        Self {
            counts: tally.counts,
            deficits,
            fillers,
        }
    }

    pub fn target(&self) -> usize {
        self.deficits.target()
    }

    pub fn counts(&self) -> &CategoryCounts {
        &self.counts
    }

    pub fn deficits(&self) -> &Deficits {
        &self.deficits
    }

    pub fn fillers(&self) -> &[WordEntry] {
        &self.fillers
    }

    pub fn filler_count(&self) -> usize {
        self.fillers.len()
    }

    pub fn report(&self) -> OutputReport {
        OutputReport {
            fillers: self.fillers.clone(),
            counts: self.counts.clone(),
        }
    }

    pub fn into_report(self) -> OutputReport {
        OutputReport {
            fillers: self.fillers,
            counts: self.counts,
        }
    }
}
