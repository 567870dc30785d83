//! Modulo-11 check digits shared by CPF and CNPJ.

/// Computes one check digit from `digits` and their `weights`.
///
/// `sum mod 11` of 0 or 1 yields digit 0, any other remainder `r` yields
/// `11 - r`. CPF writes the rule as `r < 2`, CNPJ as `r ∈ {0, 1}`; both
/// select the same remainders.
pub fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    debug_assert_eq!(digits.len(), weights.len());
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        0 | 1 => 0,
        remainder => 11 - remainder,
    }
}

/// Verifies the two trailing check digits of `digits`.
///
/// The second digit is computed over the body *including* the first check
/// digit, so `second` is one weight longer than `first`.
pub fn verify(digits: &[u32], first: &[u32], second: &[u32]) -> bool {
    let body = first.len();
    if digits.len() != body + 2 || second.len() != body + 1 {
        return false;
    }

    if check_digit(&digits[..body], first) != digits[body] {
        return false;
    }
    check_digit(&digits[..=body], second) == digits[body + 1]
}
