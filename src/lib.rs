//! Sitepipe - a build and deploy pipeline for Hugo-based static sites
//!
//! Sitepipe wires a static-site generator and a hosting import tool into a
//! strictly linear task sequence: the output directories are wiped, the
//! generator runs, then the result is pushed to hosting. Each step invokes
//! an external CLI and the whole series stops at the first failure.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use error::{PipeError, Result};

/// Current version of Sitepipe
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
