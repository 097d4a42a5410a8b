//! taklifnoma-core
//!
//! Pure domain types, built-in templates, color presets and storage key
//! conventions. No I/O; this is the shared vocabulary of TaklifNoma.

pub mod builtin;
pub mod error;
pub mod keys;
pub mod models;
pub mod presets;
pub mod slug;
