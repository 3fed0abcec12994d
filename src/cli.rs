use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pandoc-bridge")]
#[command(author, version, about = "Run pandoc conversions with typed error reporting")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run pandoc through the async runner instead of blocking
    #[arg(long = "async", global = true)]
    pub run_async: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the version reported by pandoc
    Version,

    /// Convert a file with pandoc
    Convert {
        /// Input file to convert
        #[arg(required = true)]
        input: PathBuf,

        /// Where pandoc writes the converted file
        #[arg(required = true)]
        output: PathBuf,

        /// Output format (pandoc writer name)
        #[arg(short, long)]
        to: String,

        /// Input format (defaults to the configured input format)
        #[arg(short, long)]
        from: Option<String>,

        /// Extra arguments passed to pandoc after the format flags
        #[arg(last = true)]
        extra: Vec<String>,
    },

    /// Convert text delivered on pandoc's stdin
    Stream {
        /// Where pandoc writes the converted file
        #[arg(required = true)]
        output: PathBuf,

        /// Output format (pandoc writer name)
        #[arg(short, long)]
        to: String,

        /// Input format (defaults to the configured input format)
        #[arg(short, long)]
        from: Option<String>,

        /// Text to convert; read from stdin when omitted
        #[arg(long)]
        text: Option<String>,
    },

    /// Check that the pandoc executable can be found
    CheckTool,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },
}
