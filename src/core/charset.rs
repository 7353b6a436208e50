//! core::charset
//!
//! The baseline character set every style mapping must cover.
//!
//! The set is 26 lowercase letters, 26 uppercase letters, 10 digits, space,
//! and the punctuation marks `. , ! ?` (69 characters). Iteration order is
//! fixed so that "missing character" reports are deterministic.

/// Baseline characters in canonical order.
pub const BASELINE_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .,!?";

/// Number of characters in the baseline set.
pub const BASELINE_LEN: usize = 69;

/// Iterate the baseline characters in canonical order.
pub fn baseline() -> impl Iterator<Item = char> {
    BASELINE_CHARS.chars()
}

/// Check whether a character belongs to the baseline set.
pub fn is_baseline(c: char) -> bool {
    BASELINE_CHARS.contains(c)
}

/// Collect the baseline characters for which `has` returns false.
///
/// # Example
///
/// ```
/// use fontpack::core::charset::missing;
///
/// let missing = missing(|c| c != 'a' && c != '?');
/// assert_eq!(missing, vec!['a', '?']);
/// ```
pub fn missing(mut has: impl FnMut(char) -> bool) -> Vec<char> {
    baseline().filter(|&c| !has(c)).collect()
}

/// Human-readable label for a character in validation reports.
///
/// Space is spelled out since it is invisible inside quotes.
pub fn label(c: char) -> String {
    if c == ' ' {
        "'space'".to_string()
    } else {
        format!("'{c}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_has_69_unique_chars() {
        let mut chars: Vec<char> = baseline().collect();
        assert_eq!(chars.len(), BASELINE_LEN);
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), BASELINE_LEN);
    }

    #[test]
    fn baseline_membership() {
        assert!(is_baseline('a'));
        assert!(is_baseline('Z'));
        assert!(is_baseline('7'));
        assert!(is_baseline(' '));
        assert!(is_baseline('?'));
        assert!(!is_baseline(';'));
        assert!(!is_baseline('é'));
    }

    #[test]
    fn missing_keeps_canonical_order() {
        let present = ['b', 'A'];
        let missing = missing(|c| present.contains(&c));
        assert_eq!(missing.len(), BASELINE_LEN - 2);
        assert_eq!(missing[0], 'a');
        assert_eq!(missing[1], 'c');
        assert_eq!(*missing.last().unwrap(), '?');
    }

    #[test]
    fn label_spells_out_space() {
        assert_eq!(label(' '), "'space'");
        assert_eq!(label('x'), "'x'");
    }
}
