//! Unit tests for the doctor service.

#![allow(clippy::expect_used)]

use stackctl::application::services::doctor::run_doctor;
use stackctl::domain::{PrivilegeCheck, UpdateError, blocking_error, collect_issues};

use crate::helpers::{FakeHost, RecordingReporter};

#[test]
fn test_doctor_healthy_host_has_no_issues() {
    let host = FakeHost::healthy();
    let checks = run_doctor(&host, &host, &host, "sudo", &RecordingReporter::default())
        .expect("doctor");

    assert!(collect_issues(&checks).is_empty());
    assert!(blocking_error(&checks).is_none());
}

#[test]
fn test_doctor_never_runs_external_operations() {
    let host = FakeHost::healthy().without_tool("docker").without_tool("sudo");
    run_doctor(&host, &host, &host, "sudo", &RecordingReporter::default()).expect("doctor");
    assert!(host.operations().is_empty());
}

#[test]
fn test_doctor_collects_every_problem() {
    let host = FakeHost::healthy().without_tool("git").without_tool("sudo");
    let checks = run_doctor(&host, &host, &host, "sudo", &RecordingReporter::default())
        .expect("doctor");

    let issues = collect_issues(&checks);
    assert_eq!(issues.len(), 2, "{issues:?}");
    assert!(issues.iter().any(|i| i.contains("git")));
    assert!(issues.iter().any(|i| i.contains("sudo")));
    assert_eq!(
        checks.privilege,
        PrivilegeCheck::Unavailable {
            helper: "sudo".to_string()
        }
    );
}

#[test]
fn test_doctor_blocking_error_matches_update_order() {
    let host = FakeHost::healthy().without_tool("docker").without_tool("sudo");
    let checks = run_doctor(&host, &host, &host, "sudo", &RecordingReporter::default())
        .expect("doctor");

    let err = blocking_error(&checks).expect("docker is missing");
    assert!(matches!(err, UpdateError::MissingDependency { ref tool } if tool == "docker"));
    assert_eq!(err.exit_code(), 127);
}

#[test]
fn test_doctor_elevated_host_needs_no_helper() {
    let host = FakeHost::healthy().elevated().without_tool("sudo");
    let checks = run_doctor(&host, &host, &host, "sudo", &RecordingReporter::default())
        .expect("doctor");
    assert_eq!(checks.privilege, PrivilegeCheck::Elevated);
    assert!(blocking_error(&checks).is_none());
}

#[test]
fn test_doctor_root_failure_is_an_error() {
    let host = FakeHost::healthy().unresolvable_root("cannot resolve /nowhere");
    let err = run_doctor(&host, &host, &host, "sudo", &RecordingReporter::default())
        .expect_err("root must resolve");
    assert!(err.to_string().contains("/nowhere"));
}

#[test]
fn test_doctor_reports_progress() {
    let host = FakeHost::healthy();
    let reporter = RecordingReporter::default();
    run_doctor(&host, &host, &host, "sudo", &reporter).expect("doctor");
    assert_eq!(
        reporter.events().last().map(String::as_str),
        Some("success: diagnostics complete")
    );
}
