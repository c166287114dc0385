/// CLI argument definitions for the `tenure` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "tenure",
    version,
    about = "Code ownership statistics from git blame"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments shared by the analysis commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Directory to analyze (default: current directory)
    pub path: Option<PathBuf>,

    /// Only analyze files matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub include: Vec<String>,

    /// Skip files matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Largest number of files per cluster (default: 32)
    #[arg(long, default_value = "32")]
    pub cluster_max: usize,

    /// Smallest cluster worth keeping separate (default: 4)
    #[arg(long, default_value = "4")]
    pub cluster_min: usize,
}

impl CommonArgs {
    /// Validate the cluster size bounds the algorithm assumes.
    pub fn validate(&self) -> Result<(), String> {
        if self.cluster_min < 1 {
            return Err("--cluster-min must be at least 1".to_string());
        }
        if self.cluster_max < self.cluster_min {
            return Err("--cluster-max must be at least --cluster-min".to_string());
        }
        Ok(())
    }
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compute ownership statistics from git blame
    #[command(long_about = cli_help::STATS)]
    Stats {
        #[command(flatten)]
        common: CommonArgs,

        /// Output format
        #[arg(long, default_value = "csv", value_parser = ["csv", "html"])]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Primary grouping dimension
        #[arg(long, default_value = "author",
              value_parser = ["author", "bucket", "language", "cluster", "repo"])]
        primary: String,

        /// Secondary grouping dimension
        #[arg(long, default_value = "bucket",
              value_parser = ["author", "bucket", "language", "cluster", "repo"])]
        secondary: String,

        /// Day boundaries for age buckets, ascending
        #[arg(long, default_value = "30,90,365", value_delimiter = ',')]
        buckets: Vec<i64>,
    },

    /// Partition the file tree into directory-aligned clusters
    #[command(long_about = cli_help::CLUSTERS)]
    Clusters {
        #[command(flatten)]
        common: CommonArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
