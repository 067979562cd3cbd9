//! Example: Validate a GUNC results directory and summarize it.
//!
//! Usage:
//!   cargo run --example summarize -- <results_dir>
//!
//! Set `RUST_LOG=debug` to see which partitions are read.

use std::env;
use std::path::Path;

use gunc_types::{Format, GuncResultsDirectoryFormat, Layout, TransformEngine};

fn main() -> gunc_types::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example summarize -- <results_dir>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let results = GuncResultsDirectoryFormat::from_path(path);
    results.validate()?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("GUNC results: {}", path.display());
    println!("{}", separator);

    match results.layout()? {
        Layout::Unpartitioned => println!("Layout: single result set"),
        Layout::Partitioned(samples) => println!("Layout: {} samples", samples.len()),
    }

    let table = TransformEngine::new().to_table(&results)?;
    let records = table.records()?;
    let genomes = table
        .index()
        .iter()
        .collect::<std::collections::HashSet<_>>()
        .len();
    let passed = records.iter().filter(|r| r.passed()).count();

    println!("Rows: {}", table.row_count());
    println!("Genomes: {}", genomes);
    println!("Rows passing GUNC: {}/{}", passed, records.len());

    let mut worst: Vec<_> = records
        .iter()
        .filter_map(|r| r.clade_separation_score.map(|css| (css, r)))
        .collect();
    worst.sort_by(|a, b| b.0.total_cmp(&a.0));

    println!();
    println!("## Highest clade separation scores");
    for (css, record) in worst.iter().take(5) {
        println!(
            "  {:<40} {:<8} CSS={:.3} contamination={:.3}",
            record.genome,
            record.taxonomic_level.as_str(),
            css,
            record.contamination_portion.unwrap_or(f64::NAN),
        );
    }

    Ok(())
}
