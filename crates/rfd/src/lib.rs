//! Request for Discussion document management
//!
//! This library provides the pieces behind the `rfd` tool: numbering and
//! naming new documents, instantiating them from a template, extracting
//! their metadata, and splicing a generated index into a host file.

pub mod config;
pub mod constants;
pub mod doc;
pub mod errors;
pub mod filename;
pub mod git;
pub mod index;
pub mod section;
pub mod template;
pub mod theme;

pub use config::Config;
pub use doc::RfdMetadata;
pub use errors::RfdError;
pub use index::DocumentIndex;

/// Re-export common error types
pub use anyhow::{Error, Result};
