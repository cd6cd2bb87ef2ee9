//! ES module import builder.

use crate::CodeBuilder;

/// Builder for `import` statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Render the import to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let statement = if self.named.is_empty() {
            format!("import '{}';", self.from)
        } else {
            format!("import {{ {} }} from '{}';", self.named.join(", "), self.from)
        };

        builder.line(&statement)
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::new()).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import() {
        let i = Import::new("./function.js").named("init").build();
        assert_eq!(i, "import { init } from './function.js';\n");
    }

    #[test]
    fn test_several_named_imports() {
        let i = Import::new("firebase-functions/v2/https")
            .named("onRequest")
            .named("onCall")
            .build();
        assert_eq!(i, "import { onRequest, onCall } from 'firebase-functions/v2/https';\n");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./shims.js").build();
        assert_eq!(i, "import './shims.js';\n");
    }
}
