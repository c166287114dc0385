//! Long help text constants for CLI subcommands.
//!
//! Extracted from `cli.rs` to keep the argument definitions concise.

/// Ownership statistics: blame every tracked file and aggregate lines
/// by two chosen dimensions.
pub const STATS: &str = "\
Compute per-author code ownership statistics from git blame.

Every tracked file is blamed, each attributed line is annotated with
its author, age bucket, language, file cluster and repository, and the
lines are counted by a primary and secondary grouping dimension.

Dimensions:
  author    -- commit author of the line
  bucket    -- age bucket (\"Last N days\" per --buckets, else \"Older\")
  language  -- language by file extension
  cluster   -- directory-aligned file cluster (see `tenure clusters`)
  repo      -- repository name (constant within one run)

Output is CSV by default; --format html emits a self-contained page
with the data embedded as inline JSON for chart rendering.

Files that cannot be blamed (binary, unreadable) are skipped. A first
Ctrl-C finishes the current file and reports partial results flagged
as incomplete; a second Ctrl-C aborts immediately.

Examples:
  tenure stats                            # author x age bucket, CSV
  tenure stats --primary cluster --secondary author
  tenure stats --include '**/*.rs' --exclude 'vendor/**'
  tenure stats --format html -o report.html
  tenure stats --buckets 7,30,180";

/// File clustering preview: the partition the stats pipeline uses for
/// its cluster dimension.
pub const CLUSTERS: &str = "\
Partition a directory tree into size-bounded, directory-aligned file
clusters.

Files are grouped so that each cluster ideally matches one directory,
holds at most --cluster-max files, and avoids dropping below
--cluster-min. Groups too small to stand alone merge upward into their
parent directory; such residual groups are marked as leftovers.

Works on any directory (respects .gitignore when present) -- no git
repository required. The same partition feeds the `cluster` dimension
of `tenure stats`.

Examples:
  tenure clusters                         # table output
  tenure clusters --json                  # machine-readable output
  tenure clusters --cluster-max 20 --cluster-min 3
  tenure clusters src/ --exclude '**/*.lock'";
