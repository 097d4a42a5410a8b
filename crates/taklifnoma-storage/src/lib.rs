//! taklifnoma-storage
//!
//! Remote and local stores, the save/load gateway with local fallback, and
//! the template catalog.

pub mod catalog;
pub mod client;
pub mod error;
pub mod gateway;
pub mod local;
pub mod objects;
pub mod record;
pub mod remote;
pub mod s3;
