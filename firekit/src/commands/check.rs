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
pub struct CheckCommand {
    /// Path to firekit.toml, relative to the project (optional)
    #[arg(short, long, default_value = "firekit.toml")]
    pub config: PathBuf,

    /// Project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = self.open().unwrap_or_exit();
        let config = file.resolve().unwrap_or_exit();

        ops::check(&file, &config).render(&mut TerminalOutput::new());
        Ok(())
    }

    /// The same firekit.toml `adapt` and `clean` read for this project.
    fn open(&self) -> firekit_config::Result<FirekitToml> {
        FirekitToml::open_or_default(self.project.join(&self.config))
    }
}
