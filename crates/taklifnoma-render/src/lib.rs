//! taklifnoma-render
//!
//! Config resolution, style derivation and invitation rendering. Everything
//! here is a pure function of its inputs; `html` adds a Tera-backed page
//! writer on top of the visual tree.

pub mod error;
pub mod html;
pub mod render;
pub mod resolve;
pub mod style;
pub mod tree;
