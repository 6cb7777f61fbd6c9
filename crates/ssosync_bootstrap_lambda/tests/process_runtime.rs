//! End-to-end handler runs against real subprocesses and a real scratch
//! filesystem, using throwaway shell scripts in place of the packaged
//! synchronization binary.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use ssosync_bootstrap_core::contract::SyncHandlerError;
use ssosync_bootstrap_lambda::handlers::sync::{
    handle_sync_event_with_process_runtime, SyncHandlerConfig,
};
use tempfile::TempDir;

fn write_script(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("fake-ssosync.sh");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("script should write");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("script should become executable");
    path
}

fn config_for(dir: &TempDir, command: &Path, credentials: &str) -> SyncHandlerConfig {
    SyncHandlerConfig {
        credentials: Some(credentials.to_string()),
        credentials_path: dir.path().join("credentials.json"),
        command: command.to_path_buf(),
        event_time: "2026-08-29T00:00:00Z".to_string(),
    }
}

#[test]
fn successful_sync_materializes_credentials_and_reports_success() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let script = write_script(&dir, "echo 'synced 10 users'\nexit 0");
    let config = config_for(&dir, &script, "{\"type\":\"service_account\"}");

    let response =
        handle_sync_event_with_process_runtime(&config).expect("sync should succeed");

    assert_eq!(response.status, "success");
    let written = fs::read_to_string(&config.credentials_path)
        .expect("credentials file should exist");
    assert_eq!(written, "{\"type\":\"service_account\"}");
}

#[test]
fn second_invocation_overwrites_the_previous_credential_file() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let script = write_script(&dir, "exit 0");

    let first = config_for(&dir, &script, "first-credential-payload");
    handle_sync_event_with_process_runtime(&first).expect("first sync should succeed");

    let second = config_for(&dir, &script, "second");
    handle_sync_event_with_process_runtime(&second).expect("second sync should succeed");

    let written = fs::read_to_string(&second.credentials_path)
        .expect("credentials file should exist");
    assert_eq!(written, "second");
}

#[test]
fn failing_sync_surfaces_the_literal_exit_code() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let script = write_script(&dir, "echo 'auth error' >&2\nexit 3");
    let config = config_for(&dir, &script, "creds");

    let error = handle_sync_event_with_process_runtime(&config)
        .expect_err("nonzero exit should fail");

    assert_eq!(error, SyncHandlerError::CommandExit { code: 3 });
    assert!(error.message().contains('3'));
}

#[test]
fn missing_binary_surfaces_launch_failure_after_the_credential_write() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let config = config_for(&dir, &dir.path().join("not-there"), "creds");

    let error = handle_sync_event_with_process_runtime(&config)
        .expect_err("missing binary should fail");

    assert!(matches!(error, SyncHandlerError::CommandLaunch { .. }));
    let written = fs::read_to_string(&config.credentials_path)
        .expect("credentials file should have been written before the launch");
    assert_eq!(written, "creds");
}
