use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::fetcher::DownloadOutcome;
use crate::migrator::MigrationSummary;

/// Characters of a failed URL shown in its report line.
const FAILED_URL_PREVIEW: usize = 60;

const SEPARATOR_WIDTH: usize = 50;

/// Formats a byte count with `,` thousands separators.
pub fn format_bytes(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn found_line(count: usize) -> String {
    format!("Found {} CDN URLs to download", count)
}

pub fn success_line(local_path: &str, bytes: u64) -> String {
    format!("✓ {} ({} bytes)", local_path, format_bytes(bytes))
}

pub fn failure_line(url: &str, reason: &str) -> String {
    let preview: String = url.chars().take(FAILED_URL_PREVIEW).collect();
    format!("✗ FAILED: {}... - {}", preview, reason)
}

pub fn summary_line(downloaded: usize, total_bytes: u64) -> String {
    format!(
        "Downloaded {} assets ({} bytes total)",
        downloaded,
        format_bytes(total_bytes)
    )
}

/// Console report for a run, with a progress bar over the download loop.
///
/// Lines go through the bar so they still print when it is hidden (no TTY).
pub struct Reporter {
    progress: ProgressBar,
}

impl Reporter {
    pub fn new(total: usize) -> Self {
        let progress = ProgressBar::new(total as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { progress }
    }

    fn print(&self, line: String) {
        self.progress.suspend(|| println!("{}", line));
    }

    pub fn found(&self, count: usize) {
        self.print(format!("{}\n", found_line(count).bold()));
    }

    pub fn downloading(&self, url: &str) {
        self.progress.set_message(url.to_string());
    }

    pub fn asset(&self, url: &str, local_path: &str, outcome: &DownloadOutcome) {
        let line = match outcome {
            DownloadOutcome::Saved { bytes } => success_line(local_path, *bytes).green(),
            DownloadOutcome::Failed { reason } => failure_line(url, reason).red(),
        };
        self.print(line.to_string());
        self.progress.inc(1);
    }

    pub fn finish(&self, summary: &MigrationSummary) {
        self.progress.finish_and_clear();

        println!("\n{}", "=".repeat(SEPARATOR_WIDTH));
        println!(
            "{}",
            summary_line(summary.mapping.len(), summary.total_bytes).bold()
        );
        println!("Output directory: {}/", summary.output_dir.display());
        println!("HTML saved to: {}", summary.html_path.display());
    }
}
