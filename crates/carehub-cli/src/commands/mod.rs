//! Command implementations. Each writes its report to `out` so the binary
//! can point it at stdout and tests at a buffer.

pub mod classify;
pub mod config;
pub mod ranges;
pub mod record;
pub mod summary;
