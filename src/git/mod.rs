use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::Command;

use git2::Repository;

use crate::filter::PathFilter;

pub struct GitRepo {
    repo: Repository,
    root: PathBuf,
}

impl GitRepo {
    pub fn open(path: &Path) -> Result<Self, Box<dyn Error>> {
        let repo = Repository::discover(path)?;
        let root = repo
            .workdir()
            .ok_or("bare repositories are not supported")?
            .to_path_buf();
        Ok(Self { repo, root })
    }

    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory name of the worktree root, used as the repository
    /// dimension in reports.
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "repository".to_string())
    }

    /// Tracked files from the index as slash-separated paths relative
    /// to the repo root, in index order, filtered.
    pub fn tracked_files(&self, filter: &PathFilter) -> Result<Vec<String>, Box<dyn Error>> {
        let index = self.repo.index()?;
        let mut files = Vec::new();

        for entry in index.iter() {
            let path = String::from_utf8_lossy(&entry.path).to_string();
            if filter.matches(&path) {
                files.push(path);
            }
        }

        Ok(files)
    }

    /// Raw `--line-porcelain` blame text for one tracked file. Errors
    /// (untracked, binary, blame failure) are per-file conditions the
    /// caller treats as "skip this file".
    pub fn blame_porcelain(&self, rel_path: &str) -> Result<String, Box<dyn Error>> {
        let output = Command::new("git")
            .arg("blame")
            .arg("--line-porcelain")
            .arg("--")
            .arg(rel_path)
            .current_dir(&self.root)
            .output()?;

        if !output.status.success() {
            return Err(format!("git blame exited with {} for {rel_path}", output.status).into());
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
