//! Filler core: pure tally, deficit and filler synthesis logic.
mod deficit;
mod plan;
mod summary;
mod synth;
mod tally;
mod types;

pub use deficit::{compute_deficits, Deficit, Deficits, DEFAULT_TARGET};
pub use plan::{FillPlan, OutputReport};
pub use summary::{render_confirmation, render_summary};
pub use synth::{filler_word, synthesize_fillers};
pub use tally::{tally, Tally};
pub use types::{CategoryCounts, CategoryIndex, WordEntry};
