pub mod credential_file;
pub mod process;
