use globset::{Glob, GlobSet, GlobSetBuilder};

/// Include/exclude glob filtering over repository-relative paths.
///
/// An empty include set admits every path; excludes always win over
/// includes. Invalid patterns are skipped rather than failing the run.
#[derive(Default)]
pub struct PathFilter {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl PathFilter {
    pub fn new(include: &[String], exclude: &[String]) -> Self {
        PathFilter {
            include: build_set(include),
            exclude: build_set(exclude),
        }
    }

    /// Whether a slash-separated relative path passes the filter.
    pub fn matches(&self, path: &str) -> bool {
        if let Some(exclude) = &self.exclude
            && exclude.is_match(path)
        {
            return false;
        }
        match &self.include {
            Some(include) => include.is_match(path),
            None => true,
        }
    }
}

fn build_set(patterns: &[String]) -> Option<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let mut any = false;

    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
                any = true;
            }
            Err(err) => eprintln!("warning: ignoring glob {pattern:?}: {err}"),
        }
    }

    if !any {
        return None;
    }
    builder.build().ok()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
