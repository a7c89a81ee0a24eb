use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "casekit", version, about = "Word splitting and case conversion")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    /// JSON file with default settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split text into words
    Words { text: String },
    /// Convert text to pascal, camel or kebab case
    Case { style: String, text: String },
    /// Title-case every word
    Capitalize { text: String },
    /// Trim and truncate text, appending "..."
    Ellipsis {
        text: String,
        #[arg(long, allow_negative_numbers = true)]
        max_len: Option<isize>,
    },
    /// Extract a window of characters
    Substring {
        text: String,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: isize,
        #[arg(long)]
        length: Option<usize>,
    },
    /// Count characters
    Length { text: String },
    /// Report which character classes the text belongs to
    Classify { text: String },
    /// Pad text to a width
    Pad {
        side: PadSide,
        text: String,
        #[arg(long)]
        width: usize,
        #[arg(long)]
        fill: Option<String>,
    },
    /// Write the default configuration to a JSON file
    InitConfig { path: PathBuf },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PadSide {
    Start,
    End,
}
