// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so JSON on stdout stays clean)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = broken links, 2 = error)
//
// The library never exits the process; deciding the exit code is done here.
// =============================================================================

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use link_guardian::checker::extract_headings;
use link_guardian::cli::{CheckArgs, Cli, Commands, OutputFormat};
use link_guardian::config::RunPlan;
use link_guardian::report::{render_json, render_text};
use link_guardian::{Engine, GuardianError, EXIT_BROKEN_LINKS, EXIT_CLEAN, EXIT_ERROR};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    // Run our application logic and capture the exit code
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("link_guardian={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links found
//   Err   = the run could not start (bad config, unreadable file list, ...)
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Check(args) => handle_check(&args),
        Commands::Anchors { file, json } => handle_anchors(&file, json),
    }
}

// Handles the 'check' subcommand
fn handle_check(args: &CheckArgs) -> Result<i32> {
    let plan = RunPlan::from_args(args).context("could not determine what to check")?;
    tracing::info!(root = %plan.root.display(), files = plan.files.len(), "starting check");

    let run = Engine::new(&plan.root).run(&plan.files);

    let output = match args.output_format() {
        OutputFormat::Json => render_json(&run.result, &run.warnings)?,
        OutputFormat::Text => render_text(&run.result, &run.warnings),
    };
    print!("{output}");

    if run.is_clean() {
        Ok(EXIT_CLEAN)
    } else {
        Ok(EXIT_BROKEN_LINKS)
    }
}

// Handles the 'anchors' subcommand
//
// Prints every heading with the anchor it is reachable by, e.g.
//   12  ## The Problem!!  ->  #the-problem
fn handle_anchors(file: &Path, json: bool) -> Result<i32> {
    let text = fs::read_to_string(file).map_err(|source| GuardianError::DocumentRead {
        path: file.to_path_buf(),
        source,
    })?;
    let headings = extract_headings(&text);

    if json {
        let entries: Vec<serde_json::Value> = headings
            .iter()
            .map(|h| {
                serde_json::json!({
                    "line": h.line,
                    "level": h.level,
                    "text": h.text,
                    "anchor": h.slug(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for heading in &headings {
            println!(
                "{:>5}  {} {}  ->  #{}",
                heading.line,
                "#".repeat(heading.level),
                heading.text,
                heading.slug()
            );
        }
    }

    Ok(EXIT_CLEAN)
}
