//! Writes a generated experiment document to stdout.
//!
//! Usage: `gen-experiment [small|medium|large|xlarge] [seed]`. The output can
//! be piped straight into `ketgraph state -`.

use std::error::Error;
use std::io::Write;

use ketgraph_bench::{SizeTier, generate_experiment, to_document};

fn parse_tier(name: &str) -> Result<SizeTier, String> {
    match name {
        "small" => Ok(SizeTier::Small),
        "medium" => Ok(SizeTier::Medium),
        "large" => Ok(SizeTier::Large),
        "xlarge" => Ok(SizeTier::XLarge),
        other => Err(format!("unknown tier {other:?}")),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let tier = parse_tier(args.next().as_deref().unwrap_or("medium"))?;
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 42,
    };

    let experiment = generate_experiment(&tier.config(seed));
    eprintln!(
        "Generated {} nodes, {} edges",
        experiment.vertices.len(),
        experiment.edges.len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &to_document(&experiment))?;
    writeln!(out)?;
    Ok(())
}
