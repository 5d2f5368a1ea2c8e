use std::path::PathBuf;

use filler_core::DEFAULT_TARGET;

/// Word bank location, relative to the game project root.
pub const DEFAULT_INPUT_PATH: &str = "src/file/words.json";
/// Suggestion file location, relative to the game project root.
pub const DEFAULT_OUTPUT_PATH: &str = "tools/fill_suggestion.json";

/// Paths and threshold for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub target: usize,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            target: DEFAULT_TARGET,
        }
    }
}

impl FillConfig {
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_target(mut self, target: usize) -> Self {
        self.target = target;
        self
    }
}
