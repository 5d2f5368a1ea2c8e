//! One-shot tool that tops up word bank categories to the target count.
//!
//! Reads `src/file/words.json` and writes `tools/fill_suggestion.json`,
//! both relative to the working directory.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use engine_logging::engine_error;
use filler_core::{render_confirmation, render_summary};
use filler_engine::{prepare, publish, FillConfig, FillError};
use log::LevelFilter;

fn main() -> ExitCode {
    engine_logging::initialize_terminal(LevelFilter::Warn);

    let config = FillConfig::default();
    match execute(&config, &mut io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            engine_error!("Fill run aborted ({}): {:#}", failure_class(&err), err);
            ExitCode::FAILURE
        }
    }
}

/// Prints counts and deficits, writes the report, then prints the confirmation.
fn execute(config: &FillConfig, out: &mut impl Write) -> anyhow::Result<PathBuf> {
    let plan = prepare(config)?;
    out.write_all(render_summary(&plan).as_bytes())?;
    out.flush()?;

    let output_path = publish(config, &plan)?;
    out.write_all(render_confirmation(&output_path, plan.filler_count()).as_bytes())?;
    Ok(output_path)
}

fn failure_class(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<FillError>() {
        Some(fill) if fill.is_parse() => "parse error",
        Some(fill) if fill.is_file_access() => "file access error",
        Some(_) => "internal error",
        None => "console error",
    }
}
