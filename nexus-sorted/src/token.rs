//! Token validation and case-insensitive comparison.
//!
//! A token is a non-empty run of ASCII letters. Comparison folds ASCII case,
//! so `"Apple"`, `"apple"` and `"APPLE"` are the same token.

use core::cmp::Ordering;

/// Returns `true` if `value` is one or more ASCII letters and nothing else.
///
/// ```
/// use nexus_sorted::token::is_token;
///
/// assert!(is_token("Apple"));
/// assert!(!is_token(""));
/// assert!(!is_token("abc123"));
/// assert!(!is_token("two words"));
/// ```
#[inline]
pub fn is_token(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Case-insensitive lexicographic ordering of two strings.
#[inline]
pub fn compare(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|b| b.to_ascii_lowercase());
    let b = b.bytes().map(|b| b.to_ascii_lowercase());
    a.cmp(b)
}

/// Case-insensitive equality.
#[inline]
pub fn matches(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_only() {
        assert!(is_token("a"));
        assert!(is_token("Z"));
        assert!(is_token("banana"));
        assert!(is_token("MiXeD"));
    }

    #[test]
    fn rejects_everything_else() {
        for value in ["", "abc123", "1", "a b", " a", "a\n", "semi;colon", "café", "-"] {
            assert!(!is_token(value), "{value:?} should be rejected");
        }
    }

    #[test]
    fn compare_folds_case() {
        assert_eq!(compare("Apple", "apple"), Ordering::Equal);
        assert_eq!(compare("Apple", "banana"), Ordering::Less);
        assert_eq!(compare("banana", "APPLE"), Ordering::Greater);
        assert_eq!(compare("B", "a"), Ordering::Greater);
    }

    #[test]
    fn compare_prefix_sorts_first() {
        assert_eq!(compare("app", "Apple"), Ordering::Less);
        assert_eq!(compare("APPLES", "apple"), Ordering::Greater);
    }

    #[test]
    fn matches_folds_case() {
        assert!(matches("APPLE", "apple"));
        assert!(!matches("apple", "apples"));
    }
}
