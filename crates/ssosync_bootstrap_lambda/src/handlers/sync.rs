use std::path::{Path, PathBuf};
use std::time::Instant;

use serde_json::json;
use ssosync_bootstrap_core::contract::{
    credential_fingerprint, CommandOutcome, SyncHandlerError, SyncSuccessResponse,
    CREDENTIALS_ENV_VAR,
};

use crate::adapters::credential_file::{CredentialStore, FsCredentialStore};
use crate::adapters::process::ProcessSyncRunner;

pub trait SyncRunner {
    fn run_sync(&self, command: &Path) -> Result<CommandOutcome, String>;
}

pub trait DiagnosticsSink {
    fn info(&self, event: &str, details: serde_json::Value);
    fn error(&self, event: &str, details: serde_json::Value);
}

/// Production sink: one structured JSON line per event on stderr, which the
/// Lambda runtime forwards to the invocation log stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrDiagnostics;

impl DiagnosticsSink for StderrDiagnostics {
    fn info(&self, event: &str, details: serde_json::Value) {
        log_sync_info(event, details);
    }

    fn error(&self, event: &str, details: serde_json::Value) {
        log_sync_error(event, details);
    }
}

/// Configuration resolved once at the binary boundary and injected into the
/// handler, so tests can supply synthetic credentials without touching the
/// process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncHandlerConfig {
    pub credentials: Option<String>,
    pub credentials_path: PathBuf,
    pub command: PathBuf,
    pub event_time: String,
}

/// Runs one bootstrap invocation: materialize the credential file, launch
/// the synchronization binary, relay its output, and translate its exit
/// status. The sequence is linear with no retries; the child's stdout,
/// stderr, and exit code are always logged before a failure is returned.
pub fn handle_sync_event(
    config: &SyncHandlerConfig,
    store: &impl CredentialStore,
    runner: &impl SyncRunner,
) -> Result<SyncSuccessResponse, SyncHandlerError> {
    handle_sync_event_with_sink(config, store, runner, &StderrDiagnostics)
}

pub fn handle_sync_event_with_sink(
    config: &SyncHandlerConfig,
    store: &impl CredentialStore,
    runner: &impl SyncRunner,
    sink: &impl DiagnosticsSink,
) -> Result<SyncSuccessResponse, SyncHandlerError> {
    let started_at = Instant::now();
    sink.info(
        "sync_started",
        json!({
            "command": config.command.display().to_string(),
            "credentials_path": config.credentials_path.display().to_string(),
            "event_time": config.event_time.clone(),
        }),
    );

    let credentials = match config.credentials.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => {
            sink.error(
                "credentials_missing",
                json!({
                    "variable": CREDENTIALS_ENV_VAR,
                    "message": SyncHandlerError::MissingCredentials.message(),
                }),
            );
            return Err(SyncHandlerError::MissingCredentials);
        }
    };

    store
        .write_credentials(&config.credentials_path, credentials)
        .map_err(|detail| {
            let error = SyncHandlerError::CredentialWrite {
                path: config.credentials_path.display().to_string(),
                detail,
            };
            sink.error("credentials_write_failed", json!({ "error": error.message() }));
            error
        })?;
    sink.info(
        "credentials_written",
        json!({
            "path": config.credentials_path.display().to_string(),
            "bytes": credentials.len(),
            "credential_fingerprint": credential_fingerprint(credentials),
        }),
    );

    let outcome = runner.run_sync(&config.command).map_err(|detail| {
        let error = SyncHandlerError::CommandLaunch {
            command: config.command.display().to_string(),
            detail,
        };
        sink.error("sync_launch_failed", json!({ "error": error.message() }));
        error
    })?;

    // Relay the child's own diagnostics before deciding the outcome.
    sink.info("ssosync_stdout", json!({ "text": outcome.stdout.clone() }));
    sink.info("ssosync_stderr", json!({ "text": outcome.stderr.clone() }));
    sink.info("ssosync_exit", json!({ "exit_code": outcome.exit_code }));

    match outcome.exit_code {
        Some(0) => {
            sink.info(
                "sync_completed",
                json!({ "duration_ms": started_at.elapsed().as_millis() }),
            );
            Ok(SyncSuccessResponse::new())
        }
        Some(code) => {
            sink.error(
                "sync_failed",
                json!({
                    "exit_code": code,
                    "duration_ms": started_at.elapsed().as_millis(),
                }),
            );
            Err(SyncHandlerError::CommandExit { code })
        }
        None => {
            sink.error(
                "sync_failed",
                json!({
                    "exit_code": serde_json::Value::Null,
                    "duration_ms": started_at.elapsed().as_millis(),
                }),
            );
            Err(SyncHandlerError::CommandTerminated)
        }
    }
}

pub fn handle_sync_event_with_process_runtime(
    config: &SyncHandlerConfig,
) -> Result<SyncSuccessResponse, SyncHandlerError> {
    handle_sync_event(config, &FsCredentialStore, &ProcessSyncRunner)
}

fn log_sync_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "sync_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_sync_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "sync_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
