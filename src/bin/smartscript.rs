//! Command-line interface for smartscript
//! This binary reads a SmartScript document, parses it and prints it back in the requested format.
//!
//! Usage:
//!   smartscript `<path>` [--format `<format>`] [--verify]   - Parse a file and print it
//!   smartscript --list-formats                             - List all available formats
//!
//! Log output goes to stderr and is controlled by `SMARTSCRIPT_LOG` (e.g. `debug`).

use clap::{Arg, ArgAction, Command};
use smartscript::script::processor::{
    available_formats, process_source, read_file, verify_round_trip, ProcessingSpec,
};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = Command::new("smartscript")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse SmartScript templates and print them back")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the SmartScript document")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'source', 'token-simple', 'ast-treeviz')")
                .default_value("source"),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .help("Check that the regenerated source parses to the same tree")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let (Some(path), Some(format)) = (
        matches.get_one::<String>("path"),
        matches.get_one::<String>("format"),
    ) else {
        fail("a document path is required");
    };
    handle_process_command(path, format, matches.get_flag("verify"));
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SMARTSCRIPT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Handle the default command: parse, optionally verify, print
fn handle_process_command(path: &str, format: &str, verify: bool) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for name in available_formats() {
            eprintln!("  {}", name);
        }
        std::process::exit(1);
    });

    let source = read_file(Path::new(path)).unwrap_or_else(|e| fail(e));

    if verify {
        let doc = verify_round_trip(&source).unwrap_or_else(|e| fail(e));
        tracing::info!(path, nodes = doc.node_count(), "round trip verified");
    }

    let output = process_source(&source, &spec).unwrap_or_else(|e| fail(e));
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Handle the --list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for name in available_formats() {
        println!("  {}", name);
    }
}
