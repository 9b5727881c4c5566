//! Host environment adapters: tool lookup, privilege probe, execution root.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::{PrivilegeProbe, RootResolver, ToolLocator};
use crate::domain::ExecutionRoot;

/// Resolves tools with `which` against the process `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathLocator;

impl ToolLocator for PathLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        which::which(tool).ok()
    }
}

/// Reads the effective user id of this process.
#[derive(Debug, Default, Clone, Copy)]
pub struct EffectiveUid;

impl PrivilegeProbe for EffectiveUid {
    fn is_elevated(&self) -> bool {
        nix::unistd::geteuid().is_root()
    }
}

/// Resolves the execution root and changes the process working directory to it.
///
/// An explicit root wins. Otherwise the nearest ancestor of the running
/// executable that contains the compose descriptor is used, falling back to
/// the current directory.
pub struct HostRoot {
    explicit: Option<PathBuf>,
    compose_file: String,
}

impl HostRoot {
    pub fn new(explicit: Option<PathBuf>, compose_file: impl Into<String>) -> Self {
        Self {
            explicit,
            compose_file: compose_file.into(),
        }
    }

    fn discover(&self) -> Result<PathBuf> {
        let exe = std::env::current_exe().context("cannot locate the running executable")?;
        if let Some(dir) = find_descriptor_dir(&exe, &self.compose_file) {
            return Ok(dir);
        }
        std::env::current_dir().context("cannot read the current directory")
    }
}

impl RootResolver for HostRoot {
    fn enter(&self) -> Result<ExecutionRoot> {
        let candidate = match &self.explicit {
            Some(dir) => dir.clone(),
            None => self.discover()?,
        };
        let path = candidate
            .canonicalize()
            .with_context(|| format!("cannot resolve {}", candidate.display()))?;
        std::env::set_current_dir(&path)
            .with_context(|| format!("cannot enter {}", path.display()))?;
        debug!(root = %path.display(), "working directory set");

        let descriptor = PathBuf::from(&self.compose_file);
        Ok(ExecutionRoot {
            descriptor_present: path.join(&descriptor).is_file(),
            path,
            descriptor,
        })
    }
}

/// Nearest ancestor directory of `start` holding `descriptor`.
fn find_descriptor_dir(start: &Path, descriptor: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .skip(1)
        .find(|dir| dir.join(descriptor).is_file())
        .map(Path::to_path_buf)
}
