use clap::Parser;
use std::path::PathBuf;

use crate::config::{MigrationConfig, DEFAULT_INPUT_HTML, DEFAULT_OUTPUT_DIR};

#[derive(Parser, Debug)]
#[command(
    name = "cdn-migrate",
    about = "Move a static site off its CDN by downloading referenced assets",
    version,
    long_about = "Finds CDN asset URLs in an HTML document, downloads each asset into a local assets/ tree and writes a copy of the document that points at the local files. Assets that fail to download keep their CDN URL."
)]
pub struct MigrateCommand {
    /// HTML document to migrate
    #[arg(short, long, default_value = DEFAULT_INPUT_HTML)]
    pub input: PathBuf,

    /// Directory the assets and rewritten index.html are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl MigrateCommand {
    pub fn into_config(self) -> MigrationConfig {
        MigrationConfig::new(self.input, self.output_dir)
    }
}
