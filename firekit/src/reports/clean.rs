//! Clean command report.

use std::path::PathBuf;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct CleanReport {
    pub out_dir: PathBuf,
    pub existed: bool,
    pub dry_run: bool,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.existed {
            out.preformatted(&format!("Nothing to clean: {} does not exist.", self.out_dir.display()));
            return;
        }

        out.section(if self.dry_run { "Would delete" } else { "Deleted" });
        out.removed_item(&self.out_dir.display().to_string());
    }
}
