//! Identifier helpers for emitted Rust.
//!
//! TypeScript declarations routinely use names that are keywords on the Rust
//! side (`type`, `move`, `ref`, ...). Emitting them unescaped would produce
//! bindings that do not compile, so parameter and module names go through
//! [`escape`] on the way out. JavaScript-visible names are never escaped;
//! they travel in `js_name`/`js_namespace` attributes instead.

/// Keywords that can be used as raw identifiers (`r#type`).
const RAW_ESCAPABLE: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "do", "dyn", "else", "enum", "extern", "false", "final",
    "fn", "for", "if", "impl", "in", "let", "loop", "macro", "match", "mod",
    "move", "mut", "override", "priv", "pub", "ref", "return", "static",
    "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot appear as raw identifiers; these get a trailing
/// underscore instead.
const UNESCAPABLE: &[&str] = &["self", "Self", "super", "crate"];

/// Escape a name so it is a legal Rust identifier.
pub fn escape(name: &str) -> String {
    if RAW_ESCAPABLE.contains(&name) {
        format!("r#{name}")
    } else if UNESCAPABLE.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// Uppercase the first character, leaving the rest untouched.
///
/// Used for enum member names (`red` -> `Red`, `rgbValue` -> `RgbValue`);
/// deliberately not a full snake/camel conversion.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_raw_keywords() {
        assert_eq!(escape("type"), "r#type");
        assert_eq!(escape("move"), "r#move");
    }

    #[test]
    fn underscores_unescapable_keywords() {
        assert_eq!(escape("self"), "self_");
        assert_eq!(escape("crate"), "crate_");
    }

    #[test]
    fn passes_ordinary_names_through() {
        assert_eq!(escape("label"), "label");
        assert_eq!(escape("registerCommand"), "registerCommand");
    }

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize("red"), "Red");
        assert_eq!(capitalize("rgbValue"), "RgbValue");
        assert_eq!(capitalize("Green"), "Green");
        assert_eq!(capitalize(""), "");
    }
}
