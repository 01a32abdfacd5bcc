//! Identifier mangling against the Python grammar.

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

// Removed in Python 3.0 but still unsafe to leave unmangled in a stub file.
const EXTRA_RESERVED: &[&str] = &["exec", "print"];

fn is_reserved_word(word: &str) -> bool {
    KEYWORDS.contains(&word) || EXTRA_RESERVED.contains(&word)
}

/// Given a Java identifier, return the Python-safe equivalent, or `None` if
/// the name looks like a dunder and must be omitted from the stub entirely.
pub fn pysafe(s: &str) -> Option<String> {
    if s.starts_with("__") && s.ends_with("__") && s.len() >= 4 {
        return None;
    }
    if is_reserved_word(s) {
        return Some(format!("{s}_"));
    }
    Some(s.to_string())
}

/// Apply `pysafe` to each dotted segment of a package path.
pub fn pysafe_package_path(package_path: &str) -> String {
    package_path
        .split('.')
        .map(|segment| pysafe(segment).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(".")
}
