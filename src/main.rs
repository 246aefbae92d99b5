use anyhow::Result;
use clap::Parser;
use colored::*;

use cdn_migrate::logging::init_logging;
use cdn_migrate::{CdnMigrator, MigrateCommand};

#[tokio::main]
async fn main() -> Result<()> {
    let args = MigrateCommand::parse();
    init_logging();

    let migrator = CdnMigrator::new(args.into_config())?;
    let summary = migrator.run().await?;

    // Partial failures still exit 0; they are listed in the report above.
    if !summary.failures.is_empty() {
        println!(
            "{}",
            format!(
                "⚠️  {} asset(s) kept their CDN URL",
                summary.failures.len()
            )
            .yellow()
        );
    }

    Ok(())
}
