use std::path::PathBuf;

use engine_logging::{engine_debug, engine_info};
use filler_core::FillPlan;

use crate::config::FillConfig;
use crate::error::FillError;
use crate::load::load_entries;
use crate::persist::write_report;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOutcome {
    pub plan: FillPlan,
    pub output_path: PathBuf,
}

/// Loads the word bank and computes counts, deficits and fillers.
pub fn prepare(config: &FillConfig) -> Result<FillPlan, FillError> {
    engine_info!("Loading word bank from {:?}", config.input_path);
    let entries = load_entries(&config.input_path)?;

    let plan = FillPlan::build(&entries, config.target);
    engine_info!(
        "Tallied {} entries in {} categories; {} below target {}",
        entries.len(),
        plan.counts().len(),
        plan.deficits().len(),
        plan.target()
    );
    for deficit in plan.deficits().iter() {
        engine_debug!("Category {:?} needs {} fillers", deficit.category, deficit.missing);
    }
    Ok(plan)
}

/// Writes the suggestion file for `plan`, replacing any previous one.
pub fn publish(config: &FillConfig, plan: &FillPlan) -> Result<PathBuf, FillError> {
    let output_path = write_report(&config.output_path, &plan.report())?;
    engine_info!(
        "Wrote {} fillers to {:?}",
        plan.filler_count(),
        output_path
    );
    Ok(output_path)
}

/// Load, tally, fill and write the suggestion file.
///
/// Fails on the first IO or parse error; the previous suggestion file is left
/// untouched in that case.
pub fn run(config: &FillConfig) -> Result<FillOutcome, FillError> {
    let plan = prepare(config)?;
    let output_path = publish(config, &plan)?;
    Ok(FillOutcome { plan, output_path })
}
