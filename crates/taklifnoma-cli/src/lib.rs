//! taklifnoma CLI library root.
//!
//! Exposes the config and command layers so integration tests can exercise
//! them without spawning the binary.

pub mod app;
pub mod commands;
pub mod config;
