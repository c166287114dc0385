use std::path::Path;

use ignore::WalkBuilder;

use crate::filter::PathFilter;

/// List files under `root` as slash-separated paths relative to it,
/// in walk order. Respects `.gitignore`, keeps hidden files, skips
/// `.git`, and applies the caller's include/exclude filter.
///
/// Used by the `clusters` subcommand, which previews a partition for
/// any directory tree, repository or not.
pub fn relative_files(root: &Path, filter: &PathFilter) -> Vec<String> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .follow_links(false)
        .filter_entry(|entry| {
            !(entry.file_type().is_some_and(|ft| ft.is_dir()) && entry.file_name() == ".git")
        })
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let rel = match entry.path().strip_prefix(root) {
            Ok(r) => r,
            Err(_) => continue,
        };

        let rel = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if filter.matches(&rel) {
            files.push(rel);
        }
    }

    files
}
