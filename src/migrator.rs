use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::MigrationConfig;
use crate::extractor::extract_cdn_urls;
use crate::fetcher::{download_asset, AssetSource, DownloadOutcome, HttpAssetSource};
use crate::file_manager::FileManager;
use crate::path_mapper::local_path_for;
use crate::report::Reporter;
use crate::rewriter::{rewrite_html, AssetMapping};

/// An asset that could not be downloaded, kept as a CDN reference in the HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAsset {
    pub url: String,
    pub reason: String,
}

/// What a finished run did.
#[derive(Debug, Clone)]
pub struct MigrationSummary {
    /// Distinct CDN URLs found in the input.
    pub found: usize,
    pub mapping: AssetMapping,
    pub failures: Vec<FailedAsset>,
    /// Sum of the sizes of every file written.
    pub total_bytes: u64,
    pub output_dir: PathBuf,
    pub html_path: PathBuf,
}

/// Runs extract -> map -> fetch -> rewrite -> report over one HTML document.
pub struct CdnMigrator<S = HttpAssetSource> {
    config: MigrationConfig,
    source: S,
}

impl CdnMigrator<HttpAssetSource> {
    pub fn new(config: MigrationConfig) -> Result<Self> {
        let source = HttpAssetSource::new().context("Failed to build HTTP client")?;
        Ok(Self::with_source(config, source))
    }
}

impl<S: AssetSource> CdnMigrator<S> {
    pub fn with_source(config: MigrationConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Migrates the configured document.
    ///
    /// Only a missing or unreadable input, or failing to set up the output
    /// directory or write the rewritten HTML, is an error. Individual assets
    /// that fail are reported and left pointing at the CDN.
    pub async fn run(&self) -> Result<MigrationSummary> {
        let input = &self.config.input_html;
        let html = fs::read_to_string(input)
            .with_context(|| format!("Failed to read input HTML: {:?}", input))?;

        tracing::info!(
            input = %input.display(),
            output = %self.config.output_dir.display(),
            "starting CDN migration"
        );

        let urls = extract_cdn_urls(&html);
        let reporter = Reporter::new(urls.len());
        reporter.found(urls.len());

        let files = FileManager::new(&self.config.output_dir)?;

        let mut mapping = AssetMapping::new();
        let mut failures = Vec::new();
        let mut total_bytes = 0u64;

        for url in &urls {
            let local_path = local_path_for(url);
            reporter.downloading(url);

            let outcome = download_asset(&self.source, &files, url, &local_path).await;
            reporter.asset(url, &local_path, &outcome);

            match outcome {
                DownloadOutcome::Saved { bytes } => {
                    total_bytes += bytes;
                    mapping.record(url.as_str(), local_path);
                }
                DownloadOutcome::Failed { reason } => failures.push(FailedAsset {
                    url: url.clone(),
                    reason,
                }),
            }
        }

        let rewritten = rewrite_html(&html, &mapping);
        let html_path = self.config.output_html();
        fs::write(&html_path, rewritten)
            .with_context(|| format!("Failed to write rewritten HTML: {:?}", html_path))?;
        tracing::info!(path = %html_path.display(), rewritten = mapping.len(), "saved HTML");

        let summary = MigrationSummary {
            found: urls.len(),
            mapping,
            failures,
            total_bytes,
            output_dir: self.config.output_dir.clone(),
            html_path,
        };
        reporter.finish(&summary);

        Ok(summary)
    }
}
