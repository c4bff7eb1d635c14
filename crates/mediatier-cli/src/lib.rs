//! Batch harness around the classification engine: loads record-facts
//! documents from disk, classifies them, and renders the reports.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use mediatier_core::models::{Record, RecordReport};

/// One classified input file, as emitted in JSON output.
#[derive(Debug, Serialize)]
pub struct ClassifiedRecord {
    pub file: String,
    pub report: RecordReport,
}

/// Load one record-facts document from a JSON file.
pub fn load_record(path: &Path) -> Result<Record> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading record facts from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parsing record facts in {}", path.display()))
}

/// Truncate a string to max_len characters, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Print classified records as a human-readable table.
pub fn print_report_table(records: &[ClassifiedRecord]) {
    println!("\n=== Content Tier Classification ===\n");
    println!(
        "{:<40} {:>4}  {:<8} {:<10} {:<9}",
        "File", "Tier", "Type", "License", "Resources"
    );
    for classified in records {
        let report = &classified.report;
        println!(
            "{:<40} {:>4}  {:<8} {:<10} {:<9}",
            truncate_string(&classified.file, 40),
            report.tier.to_string(),
            report
                .media_kind
                .map(|kind| kind.to_string())
                .unwrap_or_else(|| "-".to_string()),
            report
                .license
                .map(|license| license.to_string())
                .unwrap_or_else(|| "-".to_string()),
            report.resources.len(),
        );
        for resource in &report.resources {
            println!(
                "    {:<36} {:>4}  {:<8} {:<10}",
                truncate_string(&resource.resource_url, 36),
                resource.tier.to_string(),
                resource.media_kind.to_string(),
                resource.license.to_string(),
            );
        }
    }
    println!();
}
