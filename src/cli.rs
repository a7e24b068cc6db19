// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Subcommands:
// - check:   validate every link in a set of markdown documents
// - anchors: show the headings of one document and the anchor each one gets
//
// Rust concepts:
// - Derive macros: clap generates the parser from these structs
// - ValueEnum: turns an enum into a fixed set of accepted flag values
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "link-guardian",
    version,
    about = "Statically validate file, anchor and URL links across markdown documents",
    long_about = "link-guardian finds every [text](target) link in a set of markdown documents \
                  and checks that relative files exist and that #anchors match a heading in \
                  the target document. External URLs are only checked for an http(s) scheme; \
                  nothing is fetched over the network."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logging on stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate every link in the corpus
    ///
    /// Example: link-guardian check --root . README.md docs/guide.md
    Check(CheckArgs),

    /// List the headings of a document and their anchors
    ///
    /// Example: link-guardian anchors docs/guide.md
    Anchors {
        /// Markdown file to inspect
        file: PathBuf,

        /// Output as JSON instead of a list
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Documents to check, relative to the root
    ///
    /// When no files are given (here, via --files-from or in the config
    /// file), every markdown file under the root is checked.
    pub files: Vec<String>,

    /// Corpus root directory (default: config file's root, then ".")
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Read the document list from a file, one path per line
    #[arg(long, value_name = "PATH")]
    pub files_from: Option<PathBuf>,

    /// Config file (default: link-guardian.toml in the root, if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Glob to leave out of the directory walk (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
