//! Ownership statistics pipeline.
//!
//! Lists tracked files, assigns each to a cluster, blames it, and
//! folds every attributed line into a two-dimensional count keyed by
//! the chosen grouping dimensions. Files stream through one at a time:
//! only the running aggregate is retained, never the raw rows.
//! Cancellation is honored between files, and whatever was aggregated
//! before a cancel is still rendered, flagged as incomplete.

pub mod aggregate;

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::blame::{self, BlameRow};
use crate::bucket;
use crate::cancel::CancelToken;
use crate::cluster::analyzer::cluster_files;
use crate::filter::PathFilter;
use crate::git::GitRepo;
use crate::lang;
use crate::output;
use aggregate::Aggregated;

/// Grouping dimensions selectable for either axis of the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Author,
    Bucket,
    Language,
    Cluster,
    Repo,
}

impl Dimension {
    /// Map a CLI flag value (already vetted by clap's value parser).
    pub fn from_flag(s: &str) -> Self {
        match s {
            "bucket" => Dimension::Bucket,
            "language" => Dimension::Language,
            "cluster" => Dimension::Cluster,
            "repo" => Dimension::Repo,
            _ => Dimension::Author,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Author => "author",
            Dimension::Bucket => "bucket",
            Dimension::Language => "language",
            Dimension::Cluster => "cluster",
            Dimension::Repo => "repo",
        }
    }
}

pub struct StatsOptions {
    pub primary: Dimension,
    pub secondary: Dimension,
    pub buckets: Vec<i64>,
    pub cluster_max: usize,
    pub cluster_min: usize,
    pub html: bool,
    pub output: Option<PathBuf>,
}

/// Per-file annotations shared by every row of that file.
struct FileContext<'a> {
    cluster: &'a str,
    language: &'static str,
    repo: &'a str,
}

fn dimension_key(
    dim: Dimension,
    row: &BlameRow,
    ctx: &FileContext,
    boundaries: &[i64],
    now: i64,
) -> String {
    match dim {
        Dimension::Author => {
            if row.author.is_empty() {
                "unknown".to_string()
            } else {
                row.author.clone()
            }
        }
        Dimension::Bucket => {
            let age_days = ((now - row.committer_time) / 86_400).max(0);
            bucket::age_label(age_days, boundaries)
        }
        Dimension::Language => ctx.language.to_string(),
        Dimension::Cluster => ctx.cluster.to_string(),
        Dimension::Repo => ctx.repo.to_string(),
    }
}

pub fn run(
    path: &Path,
    include: &[String],
    exclude: &[String],
    opts: &StatsOptions,
    cancel: &CancelToken,
) -> Result<(), Box<dyn Error>> {
    let git_repo =
        GitRepo::open(path).map_err(|e| format!("not a git repository (or any parent): {e}"))?;

    let filter = PathFilter::new(include, exclude);
    let files = git_repo.tracked_files(&filter)?;

    let clusters = cluster_files(&files, opts.cluster_max, opts.cluster_min);
    let mut assignment: HashMap<&str, &str> = HashMap::new();
    for cluster in &clusters {
        for file in &cluster.files {
            assignment.insert(file.as_str(), cluster.path.as_str());
        }
    }

    let repo_name = git_repo.name();
    let now = Utc::now().timestamp();
    let mut agg = Aggregated::default();

    for file in &files {
        if cancel.is_cancelled() {
            break;
        }

        // Per-file extraction failures (binary, unreadable, transient)
        // are skip-and-continue, never pipeline errors.
        let text = match git_repo.blame_porcelain(file) {
            Ok(t) => t,
            Err(_) => continue,
        };

        let ctx = FileContext {
            cluster: assignment.get(file.as_str()).copied().unwrap_or(""),
            language: lang::language_of(file),
            repo: &repo_name,
        };

        agg.fold(
            blame::parse_porcelain(text.lines()),
            |row| dimension_key(opts.primary, row, &ctx, &opts.buckets, now),
            |row| dimension_key(opts.secondary, row, &ctx, &opts.buckets, now),
        );
    }

    let complete = !cancel.is_cancelled();

    if agg.is_empty() && complete {
        eprintln!("warning: no blame data found (empty repository or everything filtered out)");
    }

    let mut out: Box<dyn Write> = match &opts.output {
        Some(p) => Box::new(File::create(p)?),
        None => Box::new(io::stdout().lock()),
    };

    if opts.html {
        let html = output::html::render(&output::html::Payload {
            repo: &repo_name,
            primary: opts.primary.label(),
            secondary: opts.secondary.label(),
            complete,
            generated: Utc::now().to_rfc3339(),
            counts: &agg,
        })?;
        out.write_all(html.as_bytes())?;
    } else {
        output::csv::write_counts(
            &mut out,
            opts.primary.label(),
            opts.secondary.label(),
            &agg,
        )?;
    }

    if !complete {
        eprintln!(
            "warning: interrupted, results may be incomplete ({} lines aggregated)",
            agg.rows()
        );
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
