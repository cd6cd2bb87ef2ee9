//! JavaScript identifier checks for generated exports.

/// Reserved words that cannot name an exported `const`.
pub const JS_RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Check whether a name is a JavaScript reserved word.
pub fn is_js_reserved_word(name: &str) -> bool {
    JS_RESERVED_WORDS.contains(&name)
}

/// Validate that a name can be used as a JavaScript binding.
///
/// Returns `None` if valid, or `Some(reason)` if invalid. Only the ASCII
/// subset is accepted; Cloud Functions names are restricted further anyway.
pub fn validate_js_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Some("identifier cannot be empty");
    };

    if first.is_ascii_digit() {
        return Some("identifier cannot start with a digit");
    }

    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return Some("identifier must start with a letter, '_' or '$'");
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return Some("identifier can only contain letters, digits, '_' and '$'");
    }

    if is_js_reserved_word(name) {
        return Some("identifier is a reserved word");
    }

    None
}
