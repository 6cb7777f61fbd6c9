//! AWS-oriented adapters and handlers for the ssosync bootstrap.
//!
//! This crate owns runtime integration details (the Lambda handler, the
//! credential-file store, and the blocking subprocess runner) on top of the
//! contract primitives in `ssosync_bootstrap_core`.

pub mod adapters;
pub mod handlers;
