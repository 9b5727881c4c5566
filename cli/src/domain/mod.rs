//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod health;
pub mod pipeline;
pub mod privilege;
pub mod root;
pub mod tree;

pub use config::{REQUIRED_TOOLS, StackctlConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, UpdateError};
pub use health::{DoctorChecks, PrivilegeCheck, ToolCheck, blocking_error, collect_issues};
pub use pipeline::{PipelineState, PrivilegeMode, Step, UpdateReport};
pub use privilege::{Invocation, PrivilegeContext};
pub use root::ExecutionRoot;
pub use tree::WorkingTree;
