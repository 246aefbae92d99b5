pub mod cli;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod file_manager;
pub mod logging;
pub mod migrator;
pub mod path_mapper;
pub mod report;
pub mod rewriter;

// Re-export main types for convenience
pub use cli::MigrateCommand;
pub use config::MigrationConfig;
pub use extractor::extract_cdn_urls;
pub use fetcher::{AssetSource, DownloadOutcome, FetchError, HttpAssetSource};
pub use file_manager::FileManager;
pub use migrator::{CdnMigrator, FailedAsset, MigrationSummary};
pub use path_mapper::{classify, local_path_for, AssetCategory};
pub use rewriter::{rewrite_html, AssetMapping};
