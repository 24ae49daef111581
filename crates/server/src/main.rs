#![forbid(unsafe_code)]

mod args;
mod diag;
mod dispatch;
mod envelope;
mod registry;
mod schema;
mod stdio;
mod tools;

use diag::{DiagnosticsSink, FileSink, NullSink};
use std::path::PathBuf;

const SERVER_NAME: &str = "harmonic-bridge-server";
const SERVER_VERSION: &str = "1.0.0";

fn usage() -> &'static str {
    "hb_server — harmonic bridge tool server (Rust, deterministic, stdio-first)\n\n\
USAGE:\n\
  hb_server [--log-dir DIR]\n\
\n\
FLAGS:\n\
  -h, --help       Print this help and exit\n\
  -V, --version    Print version and exit\n\
      --tools      Print the registered tool definitions as JSON and exit\n\
\n\
NOTES:\n\
  - Protocol: one JSON request object per stdin line, one response per stdout line.\n\
  - Diagnostics: append-only JSON lines under --log-dir (or HB_LOG_DIR); off by default.\n"
}

fn version_line() -> String {
    format!("{SERVER_NAME} {SERVER_VERSION}")
}

fn parse_log_dir(argv: &[String]) -> Option<PathBuf> {
    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        if arg == "--log-dir"
            && let Some(value) = iter.next()
        {
            return Some(PathBuf::from(value));
        }
    }
    std::env::var("HB_LOG_DIR")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let argv = std::env::args().collect::<Vec<_>>();
    if argv.iter().any(|arg| matches!(arg.as_str(), "-h" | "--help")) {
        print!("{}", usage());
        return Ok(());
    }
    if argv
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        println!("{}", version_line());
        return Ok(());
    }

    // A duplicate tool name is a programming error in the registration table;
    // refusing to boot here is the contract.
    let registry = registry::build_registry()
        .map_err(|err| format!("{}: {}", err.kind.as_str(), err.message))?;

    if argv.iter().any(|arg| arg.as_str() == "--tools") {
        println!(
            "{}",
            serde_json::to_string_pretty(&registry.definitions_json())?
        );
        return Ok(());
    }

    let sink: Box<dyn DiagnosticsSink> = match parse_log_dir(&argv) {
        Some(dir) => Box::new(FileSink::new(&dir)),
        None => Box::new(NullSink),
    };

    stdio::run_stdio(&registry, sink.as_ref())
}
