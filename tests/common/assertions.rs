//! Custom assertions for masking tests.

use brdocs::MaskPattern;

/// Asserts that a string holds only ASCII digits.
///
/// # Panics
/// Panics on the first non-digit character.
pub fn assert_only_digits(value: &str) {
    assert!(
        value.chars().all(|c| c.is_ascii_digit()),
        "'{}' should contain only digits",
        value
    );
}

/// Asserts that `masked` is a prefix of the pattern's layout: every digit
/// sits on a placeholder, every other character matches the literal, and
/// the last character is a digit.
///
/// # Panics
/// Panics if the masked value disagrees with the pattern.
pub fn assert_follows_pattern(masked: &str, pattern: MaskPattern) {
    assert!(
        masked.chars().count() <= pattern.len(),
        "'{}' is longer than pattern '{}'",
        masked,
        pattern
    );

    for (i, (got, slot)) in masked.chars().zip(pattern.as_str().chars()).enumerate() {
        if slot == '9' {
            assert!(
                got.is_ascii_digit(),
                "'{}' position {} should be a digit for pattern '{}'",
                masked,
                i,
                pattern
            );
        } else {
            assert_eq!(
                got, slot,
                "'{}' position {} should be literal '{}'",
                masked, i, slot
            );
        }
    }

    if let Some(last) = masked.chars().last() {
        assert!(
            last.is_ascii_digit(),
            "'{}' should not end with a trailing literal",
            masked
        );
    }
}
