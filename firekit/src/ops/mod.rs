//! Core operations.
//!
//! This module contains the business logic for firekit commands,
//! separated from CLI argument parsing and output rendering.

pub mod adapt;
pub mod check;
pub mod clean;

pub use adapt::adapt;
pub use check::check;
pub use clean::clean;
