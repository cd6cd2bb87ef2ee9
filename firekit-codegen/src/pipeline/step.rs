//! Pipeline step trait.

use eyre::Result;

use super::AdaptContext;

/// One side-effecting stage of the pipeline.
///
/// Steps run in order and each may rely on the files written by the steps
/// before it.
pub trait Step {
    /// The name of this step (used in logs and reports).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this step does.
    fn description(&self) -> &'static str;

    /// Run this step.
    fn run(&self, ctx: &mut AdaptContext<'_>) -> Result<()>;
}
