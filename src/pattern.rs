use regex::Regex;

/// Compile a detector pattern, matched case-insensitively.
///
/// Every pattern in the battery is a fixed string literal, so a compilation
/// failure is a programming error and aborts the process.
pub(crate) fn compile(pattern: &str) -> Regex {
    let full = format!("(?i){}", pattern);
    Regex::new(&full)
        .unwrap_or_else(|e| panic!("invalid pattern '{}': {}", pattern, e))
}

/// Compile a pattern exactly as written (no case-insensitive flag).
pub(crate) fn compile_exact(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("invalid pattern '{}': {}", pattern, e))
}
