//! [`Builder`] backed by a framework output directory on disk.
//!
//! SvelteKit writes its compiled output to `.svelte-kit/output`:
//!
//! - `client/` - static assets
//! - `prerendered/pages/`, `prerendered/dependencies/` - prerendered routes
//! - `server/` - the server bundle, including `server/manifest.js`

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result, bail, eyre};
use walkdir::WalkDir;

use crate::builder::{Builder, CopyOptions, Log, ManifestOptions, ModuleFormat, TracingLog};

const MANIFEST_FILE: &str = "manifest.js";
const MANIFEST_EXPORT: &str = "export const manifest =";
const PRERENDERED_DIRS: &[&str] = &["pages", "dependencies"];

/// Filesystem builder over a compiled framework output directory.
pub struct FsBuilder {
    output: PathBuf,
    log: TracingLog,
}

impl FsBuilder {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            log: TracingLog,
        }
    }

    fn require_dir(&self, name: &str) -> Result<PathBuf> {
        let dir = self.output.join(name);
        if !dir.is_dir() {
            bail!(
                "framework output '{}' not found; build the app before adapting",
                dir.display()
            );
        }
        Ok(dir)
    }
}

impl Builder for FsBuilder {
    fn rimraf(&self, path: &Path) -> Result<()> {
        if path.is_dir() {
            fs::remove_dir_all(path)
                .wrap_err_with(|| format!("failed to remove '{}'", path.display()))?;
        } else if path.exists() {
            fs::remove_file(path)
                .wrap_err_with(|| format!("failed to remove '{}'", path.display()))?;
        }
        Ok(())
    }

    fn mkdirp(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).wrap_err_with(|| format!("failed to create '{}'", path.display()))
    }

    fn copy(&self, from: &Path, to: &Path, options: &CopyOptions) -> Result<Vec<PathBuf>> {
        if !from.exists() {
            return Ok(Vec::new());
        }

        if from.is_file() {
            copy_file(from, to, options)?;
            return Ok(vec![to.to_path_buf()]);
        }

        let mut copied = Vec::new();
        let walker = WalkDir::new(from)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0 || options.accepts(&entry.file_name().to_string_lossy())
            });

        for entry in walker {
            let entry = entry.wrap_err_with(|| format!("failed to walk '{}'", from.display()))?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .wrap_err("walked outside the copy source")?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                self.mkdirp(&target)?;
            } else {
                copy_file(entry.path(), &target, options)?;
                copied.push(target);
            }
        }

        Ok(copied)
    }

    fn write_client(&self, dest: &Path) -> Result<Vec<PathBuf>> {
        let client = self.require_dir("client")?;
        self.copy(&client, dest, &CopyOptions::new())
    }

    fn write_prerendered(&self, dest: &Path) -> Result<Vec<PathBuf>> {
        // Apps without prerendered routes have no prerendered/ directory.
        let prerendered = self.output.join("prerendered");
        let mut written = Vec::new();
        for dir in PRERENDERED_DIRS {
            written.extend(self.copy(&prerendered.join(dir), dest, &CopyOptions::new())?);
        }
        Ok(written)
    }

    fn write_server(&self, dest: &Path) -> Result<Vec<PathBuf>> {
        let server = self.require_dir("server")?;
        self.copy(&server, dest, &CopyOptions::new())
    }

    fn generate_manifest(&self, options: &ManifestOptions) -> Result<String> {
        let path = self.output.join("server").join(MANIFEST_FILE);
        let source = fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read server manifest '{}'", path.display()))?;
        let expression = manifest_expression(&source)
            .ok_or_else(|| eyre!("'{}' does not export a manifest", path.display()))?;
        Ok(rewrite_imports(expression, &options.relative_path, options.format))
    }

    fn log(&self) -> &dyn Log {
        &self.log
    }
}

fn copy_file(from: &Path, to: &Path, options: &CopyOptions) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }

    if options.replace.is_empty() {
        fs::copy(from, to).wrap_err_with(|| {
            format!("failed to copy '{}' to '{}'", from.display(), to.display())
        })?;
        return Ok(());
    }

    let content =
        fs::read_to_string(from).wrap_err_with(|| format!("failed to read '{}'", from.display()))?;
    fs::write(to, options.apply(&content))
        .wrap_err_with(|| format!("failed to write '{}'", to.display()))
}

/// The expression assigned by `export const manifest = <expr>;`.
///
/// Later exports in the same module (`prerendered`, `base`, ...) are not part
/// of the expression.
pub(crate) fn manifest_expression(source: &str) -> Option<&str> {
    let start = source.find(MANIFEST_EXPORT)? + MANIFEST_EXPORT.len();
    let rest = &source[start..];
    let expression = rest[..expression_end(rest)].trim();
    (!expression.is_empty()).then_some(expression)
}

/// Byte offset where the top-level expression at the start of `source` ends:
/// a `;` outside any bracket, a line starting a new `export`, or end of input.
fn expression_end(source: &str) -> usize {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            quote @ (b'\'' | b'"' | b'`') => {
                i = skip_string(bytes, i + 1, quote);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = source[i..].find('\n').map_or(bytes.len(), |n| i + n);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = source[i + 2..].find("*/").map_or(bytes.len(), |n| i + 2 + n + 2);
                continue;
            }
            b';' if depth == 0 => return i,
            b'\n' if depth == 0 && source[i..].trim_start().starts_with("export ") => return i,
            _ => {}
        }
        i += 1;
    }

    bytes.len()
}

/// Index just past the closing `quote`, starting inside the literal.
fn skip_string(bytes: &[u8], mut i: usize, quote: u8) -> usize {
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Point the manifest's lazy `import('./…')` calls at `relative_path`.
pub(crate) fn rewrite_imports(expression: &str, relative_path: &str, format: ModuleFormat) -> String {
    const OPEN: &str = "import('./";
    const CLOSE: &str = "')";

    let base = relative_path.trim_end_matches('/');
    let mut out = String::with_capacity(expression.len());
    let mut rest = expression;

    while let Some(pos) = rest.find(OPEN) {
        let after = &rest[pos + OPEN.len()..];
        let Some(end) = after.find(CLOSE) else {
            break;
        };
        let module = &after[..end];

        out.push_str(&rest[..pos]);
        match format {
            ModuleFormat::Esm => out.push_str(&format!("import('{}/{}')", base, module)),
            ModuleFormat::Cjs => out.push_str(&format!(
                "Promise.resolve().then(() => require('{}/{}'))",
                base, module
            )),
        }
        rest = &after[end + CLOSE.len()..];
    }

    out.push_str(rest);
    out
}
