//! Roster CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use roster_engine::{EngineConfig, QueryService};
use roster_runtime::{Repl, Session};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    catalog: Option<PathBuf>,
    files: Vec<PathBuf>,
    espers: Vec<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    max_results: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-c" | "--catalog" => {
                i += 1;
                let path = args.get(i).ok_or("--catalog requires a path")?;
                config.catalog = Some(PathBuf::from(path));
            }
            "--max-results" => {
                i += 1;
                let value = args.get(i).ok_or("--max-results requires a value")?;
                config.max_results = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --max-results value: {value}"))?,
                );
            }
            "--espers" => {
                i += 1;
                let value = args.get(i).ok_or("--espers requires a comma-separated list")?;
                config.espers = value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect();
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("roster {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut engine_config = EngineConfig::default();
    if let Some(max) = config.max_results {
        engine_config = engine_config.with_max_results(max);
    }
    let service = QueryService::new(engine_config.clone()).with_espers(config.espers);

    let session = match &config.catalog {
        Some(path) => Session::from_file(path, engine_config)?,
        None => Session::new(),
    }
    .with_service(service);

    let repl = Repl::new(session)?;

    // Run any command files
    for file in &config.files {
        for output in repl.eval_file(file)? {
            println!("{output}\n");
        }
    }

    if config.batch_mode {
        return Ok(());
    }

    let mut repl = if config.files.is_empty() {
        repl
    } else {
        repl.without_banner()
    };
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mRoster\x1b[0m - Unit, job, and skill catalog search

\x1b[1mUSAGE:\x1b[0m
    roster [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Command files to run before starting the REPL
                  (commands separated by blank lines)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help               Print help information
    -V, --version            Print version information
    -b, --batch              Run command files and exit (no REPL)
    -c, --catalog PATH       Load a catalog snapshot (.json or MessagePack)
                             instead of the built-in sample
    --max-results N          List at most N records (default 25)
    --espers A,B,...         Esper names for !res lookups

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG                 Log filter, e.g. RUST_LOG=roster_engine=debug

\x1b[1mEXAMPLES:\x1b[0m
    roster                              Start the REPL on the sample catalog
    roster -c units.json                Search a snapshot interactively
    roster -b -c units.msgpack q.txt    Run q.txt against a snapshot and exit"
    );
}
