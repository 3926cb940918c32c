//! `snipsync_core` is the core library for the snipsync documentation
//! synchronizer. It keeps code snippets embedded in documentation files in
//! sync with their authoritative source files.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Documentation file
//!   → Marker scanner (classifies begin/end region markers)
//!   → Expression parser (lexes + parses the call inside a begin marker)
//!   → Registry dispatch (maps the call to a rendering function)
//!   → Scope extractor (selects the source lines to include)
//!   → Snippet renderer (external formatter + fenced code block)
//!   → Document formatter (line wrapping + ordered-list numbering)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `snipsync.toml`, including the
//!   external formatter command and document formatting options.
//!
//! ## Key Types
//!
//! - [`Marker`] — A classified begin/end region marker line.
//! - [`CallExpr`] — A parsed marker expression such as `render("main.cpp")`.
//! - [`Registry`] — The table mapping expression function names to renderers.
//! - [`SourceKind`] — The recognized source file kinds and their fence labels.
//! - [`DocumentOutcome`] — The outcome of processing a single document.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use snipsync_core::Registry;
//! use snipsync_core::SnipsyncConfig;
//! use snipsync_core::process_file;
//! use snipsync_core::write_atomic;
//!
//! let config = SnipsyncConfig::default();
//! let registry = Registry::default();
//!
//! let outcome = process_file(Path::new("readme.md"), &registry, &config).unwrap();
//! if outcome.changed {
//! 	write_atomic(Path::new("readme.md"), &outcome.result).unwrap();
//! }
//! ```

pub use config::*;
pub use docfmt::*;
pub use engine::*;
pub use error::*;
pub use markers::*;
pub use parser::*;
pub use scope::*;
pub use snippet::*;

pub mod config;
mod docfmt;
mod engine;
mod error;
pub(crate) mod lexer;
mod markers;
mod parser;
mod scope;
mod snippet;
