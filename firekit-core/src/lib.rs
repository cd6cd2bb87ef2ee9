//! Core utilities and types for the firekit deployment adapter.
//!
//! This crate provides the file-writing primitives, the placeholder
//! substitution used for bundled runtime files, and JavaScript identifier
//! checks shared by the configuration and code generation crates.

mod file;
mod ident;
mod placeholder;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Identifier checks
pub use ident::{JS_RESERVED_WORDS, is_js_reserved_word, validate_js_identifier};
// Template substitution
pub use placeholder::{Placeholder, SERVER_PLACEHOLDER};
