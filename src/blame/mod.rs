//! Parser for `git blame` porcelain output.
//!
//! The porcelain format interleaves hunk headers (a 40-hex commit id
//! plus line-number fields), metadata lines (`author`,
//! `committer-time`, `boundary`, ...) and tab-prefixed content lines.
//! Each content line yields one [`BlameRow`] snapshotting the metadata
//! seen so far for the current hunk. Unrecognized lines are skipped,
//! so the parser stays permissive toward future metadata keys.

/// One line's worth of authorship evidence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlameRow {
    pub commit: String,
    pub author: String,
    pub committer_time: i64,
    pub boundary: bool,
}

/// Parse porcelain text into one row per content line.
///
/// Total over arbitrary input: lines that match nothing are dropped.
/// A new hunk header resets `committer_time` (default 0) and
/// `boundary` (default false); the author carries over until replaced,
/// which is how compact `--porcelain` streams omit metadata for
/// commits they already printed.
pub fn parse_porcelain<'a, I>(lines: I) -> Vec<BlameRow>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rows = Vec::new();

    let mut commit = String::new();
    let mut author = String::new();
    let mut committer_time: i64 = 0;
    let mut boundary = false;

    for line in lines {
        if line.starts_with('\t') {
            rows.push(BlameRow {
                commit: commit.clone(),
                author: author.clone(),
                committer_time,
                boundary,
            });
            continue;
        }

        if let Some(hash) = header_commit(line) {
            commit = hash.to_string();
            committer_time = 0;
            boundary = false;
            continue;
        }

        if let Some(name) = line.strip_prefix("author ") {
            author = name.to_string();
        } else if let Some(secs) = line.strip_prefix("committer-time ") {
            committer_time = secs.trim().parse().unwrap_or(0);
        } else if line == "boundary" {
            boundary = true;
        }
        // anything else: unknown metadata, ignored
    }

    rows
}

/// Return the commit hash if `line` is a hunk header: the token before
/// the first space must be exactly 40 hex characters, optionally with
/// one leading non-hex marker (`^` on boundary commits), followed by
/// two to four integer fields. The marker is stripped from the result.
fn header_commit(line: &str) -> Option<&str> {
    let mut parts = line.split(' ');
    let first = parts.next()?;

    let hash = first
        .strip_prefix(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(first);

    if hash.len() != 40 || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let rest: Vec<&str> = parts.collect();
    if !(2..=4).contains(&rest.len()) {
        return None;
    }
    if !rest.iter().all(|f| f.parse::<u64>().is_ok()) {
        return None;
    }

    Some(hash)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
