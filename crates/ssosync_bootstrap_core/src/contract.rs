use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Environment variable holding the Google service-account credential JSON.
pub const CREDENTIALS_ENV_VAR: &str = "SSOSYNC_GOOGLE_CREDS_JSON";

/// Scratch location the credential file is materialized at on every
/// invocation. `/tmp` is the only writable path in the Lambda filesystem.
pub const DEFAULT_CREDENTIALS_PATH: &str = "/tmp/credentials.json";

/// The packaged synchronization binary, resolved relative to the task root.
pub const DEFAULT_SYNC_COMMAND: &str = "./ssosync";

pub const MISSING_CREDENTIALS_MESSAGE: &str =
    "SSOSYNC_GOOGLE_CREDS_JSON environment variable is not set.";

/// Captured result of one blocking subprocess run.
///
/// `exit_code` is `None` when the child was terminated by a signal before
/// it could report an exit code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncSuccessResponse {
    pub status: String,
}

impl SyncSuccessResponse {
    pub fn new() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

impl Default for SyncSuccessResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed failure sum for one bootstrap invocation.
///
/// Callers branch on the kind; `message()` renders the operator-facing text,
/// keeping the fixed missing-credential diagnostic and the literal exit code
/// stable for alarms that match on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncHandlerError {
    MissingCredentials,
    CredentialWrite { path: String, detail: String },
    CommandLaunch { command: String, detail: String },
    CommandExit { code: i32 },
    CommandTerminated,
}

impl SyncHandlerError {
    pub fn message(&self) -> String {
        match self {
            SyncHandlerError::MissingCredentials => MISSING_CREDENTIALS_MESSAGE.to_string(),
            SyncHandlerError::CredentialWrite { path, detail } => {
                format!("Failed to write credentials to {path}: {detail}")
            }
            SyncHandlerError::CommandLaunch { command, detail } => {
                format!("Failed to launch {command}: {detail}")
            }
            SyncHandlerError::CommandExit { code } => {
                format!("ssosync exited with code {code}")
            }
            SyncHandlerError::CommandTerminated => {
                "ssosync was terminated by a signal before reporting an exit code".to_string()
            }
        }
    }
}

impl std::fmt::Display for SyncHandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for SyncHandlerError {}

/// Lowercase-hex SHA-256 of the credential payload, so log lines can
/// correlate invocations without echoing the secret itself.
pub fn credential_fingerprint(credentials: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(credentials.as_bytes());
    format!("{:x}", hasher.finalize())
}
