use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use mediatier_cli::{init_tracing, load_record, print_report_table, ClassifiedRecord};
use mediatier_engine::classify;

#[derive(Parser, Debug)]
#[command(name = "classify_records")]
#[command(about = "Assign content tiers to record-facts files")]
struct Args {
    /// Record-facts documents (JSON), one record per file
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output format: json or table (default: table)
    #[arg(long, default_value = "table")]
    format: String,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let mut classified = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let record = load_record(path)?;
        let report = classify(&record);
        classified.push(ClassifiedRecord {
            file: path.display().to_string(),
            report,
        });
    }

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&classified)?);
        }
        _ => {
            print_report_table(&classified);
        }
    }

    Ok(())
}
