//! carehub-cli library root.
//!
//! Exposes the config and command modules so integration tests can drive
//! them without spawning the binary.

pub mod commands;
pub mod config;
