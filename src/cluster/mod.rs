//! Directory-aligned file clustering.
//!
//! Groups a file tree into clusters of bounded size for reporting:
//! each cluster ideally corresponds to one directory, oversized
//! directories shed residue upward, and undersized groups merge into
//! their parents. The partition is what the stats pipeline uses as its
//! `cluster` dimension; the `clusters` subcommand prints it directly.

pub mod analyzer;
mod report;

use std::error::Error;
use std::path::Path;

use crate::filter::PathFilter;
use crate::walk;
use analyzer::cluster_files;
use report::{print_json, print_report};

/// Run the `clusters` subcommand: list files under `path` (any
/// directory, no repository required), partition them, and print the
/// result as a table or JSON.
pub fn run(
    path: &Path,
    include: &[String],
    exclude: &[String],
    cluster_max: usize,
    cluster_min: usize,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if !path.is_dir() {
        return Err(format!("not a directory: {}", path.display()).into());
    }

    let filter = PathFilter::new(include, exclude);
    let files = walk::relative_files(path, &filter);
    let clusters = cluster_files(&files, cluster_max, cluster_min);

    if json {
        print_json(&clusters)
    } else {
        print_report(&clusters);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
