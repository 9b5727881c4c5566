//! A throwaway host for end-to-end runs: an execution root plus a `PATH`
//! holding shell-script stand-ins for `git`, `docker`, `sudo`, and `apt-get`.
//!
//! Every fake appends its command line to a shared log file. `docker` and
//! `apt-get` also chat on stdout, as the real tools do.

#![allow(clippy::expect_used, dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const GIT: &str = r#"echo "git $*" >> "$FAKE_LOG"
if [ "$1" = status ] && [ -n "$FAKE_GIT_DIRTY" ]; then
  echo " M docker-compose.yml"
  echo "?? notes.txt"
fi
"#;

pub const DOCKER: &str = r#"echo "docker $*" >> "$FAKE_LOG"
echo "[+] Running 3/3"
"#;

pub const APT_GET: &str = r#"echo "apt-get $*" >> "$FAKE_LOG"
echo "Reading package lists... Done"
if [ "$1 $2" = "-y upgrade" ] && [ -n "$FAKE_APT_UPGRADE_EXIT" ]; then
  exit "$FAKE_APT_UPGRADE_EXIT"
fi
"#;

pub const SUDO: &str = r#"echo "sudo $*" >> "$FAKE_LOG"
exec "$@"
"#;

pub struct FakeHost {
    bin: TempDir,
    root: TempDir,
    state: TempDir,
}

impl FakeHost {
    /// Empty `PATH`, execution root holding a compose descriptor.
    pub fn new() -> Self {
        let host = Self {
            bin: tempfile::tempdir().expect("bin dir"),
            root: tempfile::tempdir().expect("root dir"),
            state: tempfile::tempdir().expect("state dir"),
        };
        std::fs::write(host.root.path().join("docker-compose.yml"), "services: {}\n")
            .expect("write descriptor");
        host
    }

    /// Every tool the pipeline needs.
    pub fn complete() -> Self {
        let host = Self::new();
        host.install("git", GIT);
        host.install("docker", DOCKER);
        host.install("apt-get", APT_GET);
        host.install("sudo", SUDO);
        host
    }

    /// Write an executable `/bin/sh` script named `name` onto the fake `PATH`.
    pub fn install(&self, name: &str, body: &str) {
        let path = self.bin.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}")).expect("write script");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("chmod script");
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    fn log_path(&self) -> PathBuf {
        self.state.path().join("calls.log")
    }

    /// `stackctl` confined to this host: isolated `PATH`, config, and root.
    pub fn stackctl(&self) -> Command {
        self.stackctl_in(self.root.path())
    }

    /// Like `stackctl`, but with an explicit execution root.
    pub fn stackctl_in(&self, root: &Path) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stackctl"));
        cmd.env_clear()
            .env("PATH", self.bin.path())
            .env("NO_COLOR", "1")
            .env("STACKCTL_CONFIG", self.state.path().join("config.yaml"))
            .env("FAKE_LOG", self.log_path())
            .arg("--root")
            .arg(root);
        cmd
    }

    /// Logged command lines, with the escalation helper's own entries dropped
    /// so assertions hold whether or not the tests run as root.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .filter(|l| !l.starts_with("sudo "))
            .map(String::from)
            .collect()
    }

    /// Raw log lines, helper entries included.
    pub fn raw_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }
}
