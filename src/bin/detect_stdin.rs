//! Simple CLI that reads HTML from stdin and prints detected job details as
//! JSON to stdout.
//!
//! Usage: `detect_stdin <url> [profiles.json]`
//!
//! Log output goes to stderr; set `JOBSCOUT_LOG` (e.g. `debug`) to see which
//! rules fired.

use std::io::{self, Read};
use std::process::ExitCode;
use std::str::FromStr;

use jobscout::{Detector, Options, Registry};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn init_logging() {
    let level = std::env::var("JOBSCOUT_LOG")
        .ok()
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(LevelFilter::Warn);

    // A logger may already be installed; detection still works without one.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn load_registry(path: Option<&str>) -> Result<Registry, String> {
    let Some(path) = path else {
        return Ok(Registry::builtin());
    };
    let json = std::fs::read_to_string(path).map_err(|e| format!("Failed to read {path}: {e}"))?;
    Registry::from_json(&json).map_err(|e| format!("Failed to load {path}: {e}"))
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(url) = args.first() else {
        eprintln!("Usage: detect_stdin <url> [profiles.json] < page.html");
        return ExitCode::FAILURE;
    };

    let registry = match load_registry(args.get(1).map(String::as_str)) {
        Ok(registry) => registry,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        return ExitCode::FAILURE;
    }

    let details = Detector::new(registry, Options::default()).detect(&html, url);

    match serde_json::to_string(&details) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize result: {e}");
            ExitCode::FAILURE
        }
    }
}
