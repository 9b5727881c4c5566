//! Privilege context for package-manager invocations.

use std::path::PathBuf;

use crate::domain::pipeline::PrivilegeMode;

/// How package operations gain root rights. Resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivilegeContext {
    /// Already running with an effective uid of 0.
    Elevated,
    /// Commands are prefixed with the escalation helper at `helper`.
    Escalated { helper: PathBuf },
}

/// A program plus its arguments, ready to hand to a command runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Borrow the arguments as `&str` slices for `CommandRunner` calls.
    #[must_use]
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

impl PrivilegeContext {
    /// Build the invocation that runs `program args..` with this context's rights.
    #[must_use]
    pub fn wrap(&self, program: &str, args: &[&str]) -> Invocation {
        match self {
            PrivilegeContext::Elevated => Invocation {
                program: program.to_string(),
                args: args.iter().map(ToString::to_string).collect(),
            },
            PrivilegeContext::Escalated { helper } => Invocation {
                program: helper.display().to_string(),
                args: std::iter::once(program)
                    .chain(args.iter().copied())
                    .map(ToString::to_string)
                    .collect(),
            },
        }
    }

    /// Report form of this context.
    #[must_use]
    pub fn mode(&self) -> PrivilegeMode {
        match self {
            PrivilegeContext::Elevated => PrivilegeMode::Elevated,
            PrivilegeContext::Escalated { helper } => PrivilegeMode::Helper {
                path: helper.clone(),
            },
        }
    }
}
