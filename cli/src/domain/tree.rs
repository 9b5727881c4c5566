//! Working-tree state derived from `git status --porcelain`.

/// Clean or dirty status of the local checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkingTree {
    Clean,
    /// Uncommitted entries, one porcelain line each.
    Dirty(Vec<String>),
}

impl WorkingTree {
    /// Parse porcelain v1 output. Any non-blank line is an uncommitted change,
    /// untracked files included.
    #[must_use]
    pub fn from_porcelain(stdout: &str) -> Self {
        let entries: Vec<String> = stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.trim_end().to_string())
            .collect();
        if entries.is_empty() {
            WorkingTree::Clean
        } else {
            WorkingTree::Dirty(entries)
        }
    }
}
