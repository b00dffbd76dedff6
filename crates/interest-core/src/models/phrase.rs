/// Canonical form of a phrase: trimmed, lowercase, single-space separated.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive phrase equality, ignoring surrounding and repeated whitespace.
pub fn same_phrase(a: &str, b: &str) -> bool {
    normalize_phrase(a) == normalize_phrase(b)
}
