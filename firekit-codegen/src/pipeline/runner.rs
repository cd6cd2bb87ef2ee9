//! Pipeline orchestrator.

use eyre::Result;

use super::{
    AdaptContext, AdaptOutcome, Step,
    steps::{
        Clean, CopyAssets, Install, ServerBundle, SupportFiles, WriteEntrypoint, WritePackageJson,
    },
};

/// Runs steps in order, stopping at the first failure.
///
/// ```ignore
/// let outcome = Pipeline::standard().run(ctx)?;
/// ```
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    /// An empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// The full adapter pipeline.
    pub fn standard() -> Self {
        Self::new()
            .step(Clean)
            .step(CopyAssets)
            .step(ServerBundle)
            .step(SupportFiles)
            .step(WriteEntrypoint)
            .step(WritePackageJson)
            .step(Install)
    }

    pub fn step(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    pub fn run(&self, mut ctx: AdaptContext<'_>) -> Result<AdaptOutcome> {
        for step in &self.steps {
            let _span = tracing::info_span!("step", name = step.name()).entered();
            tracing::debug!(description = step.description(), "running");
            step.run(&mut ctx)?;
            ctx.completed.push(step.name());
        }
        Ok(ctx.into_outcome())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}
