//! JavaScript syntax builders for the generated entrypoint.
//!
//! Each builder renders into a [`CodeBuilder`](crate::CodeBuilder); the
//! output is plain ES module syntax with single-quoted specifiers.

mod call;
mod consts;
mod imports;

pub use call::Call;
pub use consts::Const;
pub use imports::Import;
