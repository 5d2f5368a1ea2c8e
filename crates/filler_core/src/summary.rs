use std::fmt::Write;
use std::path::Path;

use crate::plan::FillPlan;

/// Human-readable counts and deficits, one category per line.
pub fn render_summary(plan: &FillPlan) -> String {
    let mut out = String::from("Found categories and counts:\n");
    for (category, count) in plan.counts().iter() {
        let _ = writeln!(out, "  - {category}: {count}");
    }

    let _ = writeln!(out, "\nCategories to fill to {}:", plan.target());
    for deficit in plan.deficits().iter() {
        let _ = writeln!(out, "  - {}: add {}", deficit.category, deficit.missing);
    }
    out
}

pub fn render_confirmation(output_path: &Path, filler_count: usize) -> String {
    format!(
        "\nSuggestion file written to: {}\nFillers to add: {filler_count}\n",
        output_path.display()
    )
}
