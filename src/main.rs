use bar_cut::render;
use bar_cut::types::{
    CATALOG, CutQuantity, DEFAULT_RAW_LENGTH, Length, LengthQuantity, desired_from_cuts,
    validate_raw_length,
};
use bar_cut::{Enumerator, suggest};
use clap::Parser;
use serde::Serialize;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "bar_cut",
    about = "Find the best ways to cut pieces from a single raw bar"
)]
struct Cli {
    /// Raw bar length in mm (100 to 10000)
    #[arg(long, default_value_t = DEFAULT_RAW_LENGTH)]
    raw_length: Length,

    /// Desired catalog pieces as LEN:qty (e.g. 1835:2 4155:1), qty 0 to 20
    #[arg(long = "cuts", num_args = 1..)]
    cuts: Vec<String>,

    /// Fill quantities from the standard catalog instead of --cuts
    #[arg(long, conflicts_with = "cuts")]
    suggest: bool,

    /// Show an ASCII diagram of each combination
    #[arg(long)]
    layout: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    raw_length: Length,
    desired: &'a LengthQuantity,
    results: &'a [bar_cut::ScoredResult],
}

fn parse_cut(s: &str) -> Result<CutQuantity, String> {
    let (length, qty) = s
        .split_once(':')
        .ok_or_else(|| format!("invalid cut '{}', expected LEN:qty", s))?;
    let length = length
        .parse::<Length>()
        .map_err(|_| format!("invalid length in '{}'", s))?;
    let qty = qty
        .parse::<u32>()
        .map_err(|_| format!("invalid quantity in '{}'", s))?;
    Ok(CutQuantity { length, qty })
}

fn parse_cuts(cuts: &[String]) -> Result<LengthQuantity, String> {
    let cuts = cuts
        .iter()
        .map(|c| parse_cut(c))
        .collect::<Result<Vec<_>, _>>()?;
    desired_from_cuts(cuts).map_err(|e| e.to_string())
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let raw_length = validate_raw_length(cli.raw_length).unwrap_or_else(|e| fail(e));

    let desired = if cli.suggest {
        let suggested = suggest(raw_length).unwrap_or_else(|e| fail(e));
        if !cli.json {
            println!("Suggested quantities for {}mm:", raw_length);
            for (length, qty) in suggested.iter().filter(|&(_, &q)| q > 0) {
                println!("  {}mm x {}", length, qty);
            }
            println!();
        }
        suggested
    } else {
        parse_cuts(&cli.cuts).unwrap_or_else(|e| fail(e))
    };

    let results = Enumerator::new(raw_length, &desired)
        .unwrap_or_else(|e| fail(e))
        .solve();

    if cli.json {
        let output = JsonOutput {
            raw_length,
            desired: &desired,
            results: &results,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(e),
        }
        return;
    }

    if desired.values().all(|&q| q == 0) {
        println!("Select cut lengths with --cuts LEN:qty, or use --suggest to get started.");
        println!();
        println!("Available cut lengths:");
        println!("{}", render::format_lengths(&CATALOG));
        return;
    }

    println!("Selected lengths: {}", render::format_selected(&desired));
    println!();

    let Some(best) = results.first() else {
        println!(
            "No valid combinations found. Make sure the selected lengths can fit within the raw material length."
        );
        return;
    };

    println!("Top {} cutting combinations:", results.len());
    print!("{}", render::render_table(&results));

    if cli.layout {
        for (i, r) in results.iter().enumerate() {
            println!();
            println!("#{}: {}", i + 1, render::format_combination(&r.combination));
            print!("{}", render::render_bar(raw_length, &r.combination));
        }
    }

    println!();
    println!("{}", render::recommendation(best));
}
