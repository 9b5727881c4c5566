//! Integration tests for stackctl
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! Pipeline runs use fake `git`, `docker`, `sudo`, and `apt-get` scripts on
//! an isolated `PATH`, so nothing on the host is touched.

mod config_command;
mod fake_host;
