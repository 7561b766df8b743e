use std::process;
use std::time::Instant;

use clap::Parser;
use log::{info, warn};

use multirep::corpus::{self, Document};
use multirep::report::Report;
use multirep::{batch, Backend, Bucketing, Engine, EngineConfig, RepeatError, Result};

mod terminal_interface;

use terminal_interface::Args;

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if let Some(load) = &args.load {
        let report = Report::read_from_disk(load)?;
        print_report(&report, args.full);
        return Ok(());
    }
    if let Some(path) = &args.benchmark {
        return benchmark(path, args.config());
    }

    let documents = if let Some(input) = &args.input {
        corpus::read_from_disk(input)?
    } else if let Some(text) = &args.text {
        vec![Document::new("text", text.as_bytes())]
    } else {
        eprintln!("nothing to do: pass --input, --text, --load or --benchmark (see --help)");
        return Ok(());
    };

    let engine = Engine::new(args.config());
    let entries = batch::analyze_all(&engine, &documents, !args.no_progress)?;

    if args.check {
        for (document, entry) in documents.iter().zip(&entries) {
            if engine.check(&document.content, &entry.profile)? {
                info!("{}: matches the reference", document.name);
            } else {
                warn!("{}: too long for the reference, not checked", document.name);
            }
        }
    }

    let report = Report {
        config: args.config(),
        entries,
    };
    if let Some(output) = &args.output {
        report.write_to_disk(output)?;
        info!("report written to {}", output);
    }
    print_report(&report, args.full);
    Ok(())
}

fn print_report(report: &Report, full: bool) {
    for entry in &report.entries {
        if !full {
            println!("{}: {}", entry.name, entry.profile.total());
            continue;
        }
        println!("{} (n = {})", entry.name, entry.profile.len());
        for (k, length) in entry.profile.iter() {
            match entry.profile.witness(k) {
                Some(w) => println!("{k}\t{length}\t{}..{}", w.start, w.end),
                None => println!("{k}\t{length}\t-"),
            }
        }
    }
}

fn benchmark(path: &str, base: EngineConfig) -> Result<()> {
    println!("Starting benchmark...");
    let documents = corpus::read_from_disk(path)?;

    for document in &documents {
        let baseline = Engine::new(base).analyze_bytes(&document.content)?;
        println!("{} ({} symbols)", document.name, document.content.len());

        for backend in [Backend::Doubling, Backend::External] {
            for bucketing in [Bucketing::Counting, Bucketing::Heap] {
                let engine = Engine::new(EngineConfig {
                    backend,
                    bucketing,
                    ..base
                });
                let start = Instant::now();
                let profile = engine.analyze_bytes(&document.content)?;
                let elapsed = start.elapsed();
                if profile != baseline {
                    return Err(RepeatError::Disagreement {
                        variant: format!("{} {:?}", backend.name(), bucketing),
                        multiplicity: profile.first_difference(&baseline).unwrap_or(1),
                    });
                }
                println!("  {:<9} {:<9} {:?}", backend.name(), format!("{bucketing:?}"), elapsed);
            }
        }
    }

    println!("Benchmark finished successfully!");
    Ok(())
}
