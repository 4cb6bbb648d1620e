// src/bin/decklens.rs
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use decklens_core::config::Config;
use decklens_core::pipeline::{self, RunOptions, RunReport};

#[derive(Parser)]
#[command(name = "decklens", version, about = "Cluster tournament deck lists into archetypes")]
struct Cli {
    /// Distance threshold for joining two decks into one archetype
    #[arg(long, short)]
    threshold: Option<f64>,

    /// Output path for the cluster file
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Aggregation cache to read deck records from
    #[arg(long, value_name = "FILE")]
    cache: Option<PathBuf>,

    /// Skip presence bucketing and evaluate every deck pair
    #[arg(long)]
    exhaustive: bool,

    /// Number of clusters to print in the summary
    #[arg(long)]
    top: Option<usize>,

    /// Print per-phase run statistics (buckets, radius, candidate pairs)
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    let opts = RunOptions {
        cache_path: cli.cache.unwrap_or(config.cache_file),
        output_path: cli.output.unwrap_or(config.output_file),
        threshold: cli.threshold.unwrap_or(config.threshold),
        exhaustive: cli.exhaustive,
    };

    println!(
        "{} {}",
        "🔍 Clustering deck population from".cyan(),
        opts.cache_path.display()
    );

    let report = pipeline::run(&opts)?;
    print_run_stats(&report, cli.verbose);
    print_summary(&report, cli.top.unwrap_or(config.summary_size));

    println!(
        "{} {}",
        "💾 Clusters saved to".green(),
        opts.output_path.display()
    );
    Ok(())
}

fn print_run_stats(report: &RunReport, verbose: bool) {
    if !verbose {
        println!(
            "✨ {} decks in {} clusters ({} ms)",
            report.decks,
            report.clusters.len(),
            report.duration_ms
        );
        return;
    }
    match (report.buckets, report.pruning_radius) {
        (Some(buckets), Some(radius)) => println!(
            "✨ {} decks in {} buckets (radius {}): {} candidate pairs, {} edges, {} clusters in {} ms",
            report.decks,
            buckets,
            radius,
            report.candidates,
            report.edges,
            report.clusters.len(),
            report.duration_ms
        ),
        _ => println!(
            "✨ {} decks, exhaustive: {} pairs, {} edges, {} clusters in {} ms",
            report.decks,
            report.candidates,
            report.edges,
            report.clusters.len(),
            report.duration_ms
        ),
    }
}

fn print_summary(report: &RunReport, top: usize) {
    println!("\n{}", "Top Clusters:".bold());
    for (rank, rc) in report.clusters.iter().take(top).enumerate() {
        println!(
            "{}. {} ({}): {} variants, {} players",
            rank + 1,
            rc.cluster.representative_name.green(),
            rc.cluster.representative_sig.dimmed(),
            rc.cluster.count,
            rc.players
        );
    }
}
