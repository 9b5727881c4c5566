//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::domain::{DoctorChecks, PrivilegeCheck, PrivilegeMode, StackctlConfig, UpdateReport};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("stackctl {version}");
    }

    /// Render the summary of a completed update run.
    pub fn render_report(&self, report: &UpdateReport) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.kv("Root:", &report.root.display().to_string());
        self.ctx.kv("Packages:", &privilege_mode_display(&report.privilege));
        self.ctx
            .kv("Steps:", &format!("{} completed", report.steps.len()));
    }

    /// Render the effective configuration.
    pub fn render_config(&self, config: &StackctlConfig, path: &std::path::Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<22} {}", "stack.compose_file:", config.stack.compose_file);
        println!("  {:<22} {}", "privilege.helper:", config.privilege.helper);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["STACKCTL_CONFIG", "STACKCTL_ROOT", "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    /// Render doctor check results.
    pub fn render_doctor(&self, checks: &DoctorChecks, issues: &[String]) {
        println!();
        println!("  {}", "stackctl Health Check".style(self.ctx.styles.header));
        println!();

        println!("  Execution root:");
        self.print_check(true, &checks.root.path.display().to_string());
        self.print_check(
            checks.root.descriptor_present,
            &format!("{} present", checks.root.descriptor.display()),
        );
        println!();

        println!("  Prerequisites:");
        for tool in &checks.tools {
            match &tool.path {
                Some(path) => {
                    self.print_check(true, &format!("{} ({})", tool.name, path.display()));
                }
                None => self.print_check(false, &format!("{} not found", tool.name)),
            }
        }
        println!();

        println!("  Privileges:");
        match &checks.privilege {
            PrivilegeCheck::Elevated => self.print_check(true, "running as root"),
            PrivilegeCheck::Helper { path } => {
                self.print_check(true, &format!("packages via {}", path.display()));
            }
            PrivilegeCheck::Unavailable { helper } => {
                self.print_check(false, &format!("not root and {helper} not found"));
            }
        }

        println!();
        if issues.is_empty() {
            println!(
                "  {} Ready to update.",
                "\u{2713}".style(self.ctx.styles.success)
            );
        } else {
            println!(
                "  {} Found {} issue(s):",
                "\u{2717}".style(self.ctx.styles.error),
                issues.len(),
            );
            for issue in issues {
                println!("    {} {issue}", "\u{2717}".style(self.ctx.styles.error));
            }
        }
        println!();
    }

    fn print_check(&self, ok: bool, msg: &str) {
        if ok {
            println!("    {} {msg}", "\u{2713}".style(self.ctx.styles.success));
        } else {
            println!("    {} {msg}", "\u{2717}".style(self.ctx.styles.error));
        }
    }
}

// ── Display helpers ──────────────────────────────────────────────────────────

#[must_use]
pub fn privilege_mode_display(mode: &PrivilegeMode) -> String {
    match mode {
        PrivilegeMode::Elevated => "ran as root".to_string(),
        PrivilegeMode::Helper { path } => format!("ran via {}", path.display()),
    }
}
