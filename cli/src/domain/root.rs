//! Execution root: the directory holding the compose descriptor and checkout.

use std::path::PathBuf;

use serde::Serialize;

/// Resolved execution root. Every step runs with this as the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionRoot {
    /// Canonical directory path.
    pub path: PathBuf,
    /// Compose descriptor path, relative to `path`.
    pub descriptor: PathBuf,
    /// Whether the descriptor exists in `path`.
    pub descriptor_present: bool,
}
