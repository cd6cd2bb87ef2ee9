//! Report data structures for commands.
//!
//! Operations build reports, commands render them to an [`Output`].

mod adapt;
mod check;
mod clean;
mod output;

pub use adapt::{AdaptReport, AdaptResult};
pub use check::CheckReport;
pub use clean::CleanReport;
#[cfg(test)]
pub use output::CaptureOutput;
pub use output::{Output, Report, TerminalOutput};
