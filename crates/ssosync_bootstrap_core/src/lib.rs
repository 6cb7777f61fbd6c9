//! Shared bootstrap contract primitives.
//!
//! This crate owns the fixed constants, response/outcome types, and the
//! typed handler error for the ssosync Lambda bootstrap. It intentionally
//! excludes AWS SDK, Lambda runtime, filesystem, and subprocess concerns.

pub mod contract;
