/// CLI: renders one of the embedded datasets and writes it to stdout or a file.
///
/// Usage:
///   tablegen --target go   bearings   > bearing.go
///   tablegen --target rust regions    > regions.rs
///   tablegen --target go --package trips --out tables.go all
///   tablegen --key abbreviation bearings
///   tablegen conditions
use std::path::PathBuf;

use tablegen::{diff, emit_go, emit_rs, output, Datasets, DispatchKey, Error, Target};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Bearings,
    Regions,
    Conditions,
    All,
}

impl Command {
    fn parse(s: &str) -> Option<Command> {
        match s {
            "bearings" | "compass" => Some(Command::Bearings),
            "regions" => Some(Command::Regions),
            "conditions" | "fields" => Some(Command::Conditions),
            "all" => Some(Command::All),
            _ => None,
        }
    }
}

fn usage() {
    eprintln!(
        "Usage: tablegen [--target go|rust] [--key name|abbreviation] [--package NAME] [--out PATH] <bearings|regions|conditions|all>"
    );
    eprintln!("  Renders an embedded dataset as source code on stdout, or atomically into PATH.");
    eprintln!("  --key picks the bearing field the lookup matches on (default: name).");
    eprintln!("  `conditions` prints the forecast/current field drift report instead.");
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut target = Target::Go;
    let mut key = DispatchKey::default();
    let mut package = emit_go::DEFAULT_PACKAGE.to_string();
    let mut out: Option<PathBuf> = None;
    let mut command: Option<Command> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--target" | "-t" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("--target needs a value");
                    std::process::exit(1);
                };
                target = Target::parse(value).unwrap_or_else(|| {
                    eprintln!("Unknown target: {value}. Use 'go' or 'rust'.");
                    std::process::exit(1);
                });
            }
            "--key" | "-k" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("--key needs a value");
                    std::process::exit(1);
                };
                key = DispatchKey::parse(value).unwrap_or_else(|| {
                    eprintln!("Unknown key: {value}. Use 'name' or 'abbreviation'.");
                    std::process::exit(1);
                });
            }
            "--package" | "-p" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("--package needs a value");
                    std::process::exit(1);
                };
                package = value.clone();
            }
            "--out" | "-o" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("--out needs a path");
                    std::process::exit(1);
                };
                out = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                usage();
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => {
                eprintln!("Unknown option: {flag}");
                usage();
                std::process::exit(1);
            }
            name => {
                command = Some(Command::parse(name).unwrap_or_else(|| {
                    eprintln!("Unknown dataset: {name}");
                    usage();
                    std::process::exit(1);
                }));
            }
        }
        i += 1;
    }

    let Some(command) = command else {
        usage();
        std::process::exit(1);
    };

    if let Err(e) = run(command, target, key, &package, out.as_deref()) {
        eprintln!("tablegen: {e}");
        std::process::exit(1);
    }
}

fn run(
    command: Command,
    target: Target,
    key: DispatchKey,
    package: &str,
    out: Option<&std::path::Path>,
) -> Result<(), Error> {
    let data = Datasets::embedded()?;
    tracing::info!(?command, %target, ?key, "generating");

    let text = match command {
        Command::Bearings => target.emit_bearings(&data.bearings, key)?,
        Command::Regions => target.emit_regions(&data.regions)?,
        Command::Conditions => diff(&data.forecast, &data.current).to_string(),
        Command::All => match target {
            Target::Go => emit_go::emit_file(&data, package, key)?,
            Target::Rust => emit_rs::emit_file(&data, key)?,
        },
    };

    match out {
        Some(path) => output::write_atomic(path, &text)?,
        None => output::write_stdout(&text)?,
    }
    Ok(())
}
