use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use firekit_config::FirekitToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Path to firekit.toml, relative to the project (optional)
    #[arg(short, long, default_value = "firekit.toml")]
    pub config: PathBuf,

    /// Project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let file = FirekitToml::open_or_default(self.project.join(&self.config)).unwrap_or_exit();
        let config = file.resolve().unwrap_or_exit();

        let report = ops::clean(
            &config,
            ops::clean::CleanOptions {
                project_dir: &self.project,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
