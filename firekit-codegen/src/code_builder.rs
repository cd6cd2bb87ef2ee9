//! Line-oriented builder for generated JavaScript.

/// Fluent API for assembling generated source text.
///
/// # Example
///
/// ```
/// use firekit_codegen::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .line("import { init } from './function.js';")
///     .blank()
///     .line("export const handle = init(M);")
///     .build();
///
/// assert_eq!(
///     code,
///     "import { init } from './function.js';\n\nexport const handle = init(M);\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line followed by a newline.
    pub fn line(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add an empty line.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}
