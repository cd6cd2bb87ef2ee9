//! Check command report.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Resolved configuration summary.
#[derive(Debug)]
pub struct CheckReport {
    /// Config file, or `None` when running on defaults
    pub config_path: Option<PathBuf>,
    /// (key, value) pairs of the resolved configuration, in display order
    pub settings: Vec<(&'static str, String)>,
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        match &self.config_path {
            Some(path) => out.preformatted(&format!("✓ {} is valid", path.display())),
            None => out.preformatted("✓ no firekit.toml found, using defaults"),
        }
        out.newline();

        for (key, value) in &self.settings {
            out.key_value_indented(key, value);
        }
    }
}
