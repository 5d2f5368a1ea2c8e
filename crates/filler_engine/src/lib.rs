//! Filler engine: file IO around the pure filler core.
mod config;
mod error;
mod load;
mod persist;
mod pipeline;

pub use config::{FillConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
pub use error::FillError;
pub use load::{load_entries, parse_entries};
pub use persist::{check_output_dir, write_report, AtomicFileWriter, PersistError};
pub use pipeline::{prepare, publish, run, FillOutcome};
