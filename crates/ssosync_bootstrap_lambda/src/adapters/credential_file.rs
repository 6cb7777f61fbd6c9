use std::fs;
use std::path::Path;

pub trait CredentialStore {
    fn write_credentials(&self, path: &Path, contents: &str) -> Result<(), String>;
}

/// Materializes the credential file on the Lambda scratch filesystem,
/// overwriting any residue from a previous invocation of the same context.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCredentialStore;

impl CredentialStore for FsCredentialStore {
    fn write_credentials(&self, path: &Path, contents: &str) -> Result<(), String> {
        fs::write(path, contents)
            .map_err(|error| format!("failed to write credentials file: {error}"))
    }
}
