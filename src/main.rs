mod blame;
mod bucket;
mod cancel;
mod cli;
mod cli_help;
mod cluster;
mod filter;
mod git;
mod lang;
mod output;
mod report_helpers;
mod stats;
mod walk;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use cancel::CancelToken;
use cli::{Cli, Commands};
use stats::{Dimension, StatsOptions};

fn main() {
    let cli = Cli::parse();
    let cancel = CancelToken::new();

    // First Ctrl-C requests a graceful drain at the next file
    // boundary; a second one aborts with the conventional 128+SIGINT.
    {
        let token = cancel.clone();
        let result = ctrlc::set_handler(move || {
            if token.is_cancelled() {
                std::process::exit(130);
            }
            eprintln!("interrupt: finishing current file (press again to abort)");
            token.cancel();
        });
        if let Err(err) = result {
            eprintln!("warning: could not install signal handler: {err}");
        }
    }

    match cli.command {
        Commands::Stats {
            common,
            format,
            output,
            primary,
            secondary,
            buckets,
        } => {
            if let Err(err) = common.validate() {
                eprintln!("error: {err}");
                std::process::exit(2);
            }

            let target = common.path.clone().unwrap_or_else(|| PathBuf::from("."));
            let opts = StatsOptions {
                primary: Dimension::from_flag(&primary),
                secondary: Dimension::from_flag(&secondary),
                buckets: sorted_buckets(buckets),
                cluster_max: common.cluster_max,
                cluster_min: common.cluster_min,
                html: format == "html",
                output,
            };

            if let Err(err) = stats::run(&target, &common.include, &common.exclude, &opts, &cancel)
            {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }

        Commands::Clusters { common, json } => {
            if let Err(err) = common.validate() {
                eprintln!("error: {err}");
                std::process::exit(2);
            }

            let target = common.path.clone().unwrap_or_else(|| PathBuf::from("."));
            if let Err(err) = cluster::run(
                &target,
                &common.include,
                &common.exclude,
                common.cluster_max,
                common.cluster_min,
                json,
            ) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }

        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "tenure", &mut std::io::stdout());
        }
    }
}

fn sorted_buckets(mut buckets: Vec<i64>) -> Vec<i64> {
    buckets.sort_unstable();
    buckets.dedup();
    buckets
}
