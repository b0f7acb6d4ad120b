//! Answer normalization and matching.
//!
//! Matching is forgiving about case, surrounding and repeated whitespace,
//! and common punctuation. A stored answer may list several acceptable
//! translations separated by `,` or `/`; any one of them is accepted.

/// Characters removed before comparing answers.
const STRIPPED: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}',
];

/// Lower-case, strip punctuation, trim, and collapse whitespace runs to a
/// single space. Idempotent.
pub fn normalize_answer(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a submission matches the stored answer or one of its
/// alternatives. A blank submission never matches an empty alternative; it
/// is only correct when the whole stored answer normalizes to empty.
pub fn check_answer(submitted: &str, expected: &str) -> bool {
    let submitted = normalize_answer(submitted);
    if submitted == normalize_answer(expected) {
        return true;
    }
    if submitted.is_empty() {
        return false;
    }
    expected
        .split([',', '/'])
        .any(|alternative| normalize_answer(alternative) == submitted)
}
