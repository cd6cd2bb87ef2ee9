//! Structured JavaScript module: imports, a blank line, then the body.

use crate::{
    CodeBuilder,
    ast::{Const, Import},
};

/// A generated ES module.
///
/// ```ignore
/// let code = CodeFile::new()
///     .import(Import::new("./function.js").named("init"))
///     .add(Const::new("handle", "init(M)"))
///     .render();
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Const>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, declaration: Const) -> Self {
        self.body.push(declaration);
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();

        for import in &self.imports {
            builder = import.render(builder);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder = builder.blank();
        }

        for (i, declaration) in self.body.iter().enumerate() {
            if i > 0 {
                builder = builder.blank();
            }
            builder = declaration.render(builder);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        assert_eq!(CodeFile::new().render(), "");
    }

    #[test]
    fn test_imports_then_blank_then_body() {
        let code = CodeFile::new()
            .import(Import::new("./a.js").named("a"))
            .import(Import::new("./b.js").named("b"))
            .add(Const::new("c", "a(b)"))
            .render();

        assert_eq!(
            code,
            "import { a } from './a.js';\nimport { b } from './b.js';\n\nexport const c = a(b);\n"
        );
    }

    #[test]
    fn test_blank_lines_between_body() {
        let code = CodeFile::new()
            .add(Const::new("a", "1"))
            .add(Const::new("b", "2"))
            .render();

        assert_eq!(code, "export const a = 1;\n\nexport const b = 2;\n");
    }
}
