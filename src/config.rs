use std::path::PathBuf;
use std::time::Duration;

/// HTML document read when no input is given.
pub const DEFAULT_INPUT_HTML: &str = "index.html";

/// Directory the local copy of the site is written to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "breathscape-site";

/// Per-request timeout for asset downloads.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Name of the rewritten document inside the output directory.
pub const OUTPUT_HTML_NAME: &str = "index.html";

/// Settings for a single migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    pub input_html: PathBuf,
    pub output_dir: PathBuf,
}

impl MigrationConfig {
    pub fn new(input_html: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_html: input_html.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Where the rewritten HTML ends up.
    pub fn output_html(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_HTML_NAME)
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_HTML, DEFAULT_OUTPUT_DIR)
    }
}
