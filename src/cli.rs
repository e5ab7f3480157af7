//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// slashpad - a terminal Markdown editor with a slash-command block menu.
///
/// Type "/" at the start of a line or after a space to pick a block type.
/// If no file is given, opens a welcome document.
#[derive(Parser, Debug)]
#[command(name = "slashpad", version, about, long_about = None)]
pub struct Args {
    /// Markdown file to load into the editor (never written back)
    pub file: Option<PathBuf>,

    /// Settings file (default: .slashpad/settings.json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filter with SLASHPAD_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the document to stdout on exit
    #[arg(long)]
    pub print: bool,
}
