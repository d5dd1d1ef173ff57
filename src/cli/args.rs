use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Command line options for the slr tool
pub struct Options {
    /// File of whitespace-separated tokens to analyze
    pub input: Option<PathBuf>,

    /// Where to save the result, instead of the input path with a .out
    /// extension
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the result without saving it
    #[arg(long)]
    pub no_save: bool,

    /// Log level, overriding RUST_LOG
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LevelFilter>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
/// Commands for the slr tool
pub enum Commands {
    /// Shows the grammar, grouped by non-terminal
    Grammar,
    /// Shows information about the grammar and parse table
    Info {
        #[arg(long)]
        verbose: bool,
    },
    /// Shows the numbered productions referred to by reduce actions
    Productions,
    /// Shows the tokens of a file with their positions
    Tokens { input: PathBuf },
}
