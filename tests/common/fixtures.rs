//! Test fixtures.
//!
//! Known documents plus generators that complete a document body with its
//! check digits, so tests are not limited to a handful of hand-picked
//! values.

use brdocs::domain::checksum::check_digit;
use brdocs::domain::cnpj::{CNPJ_WEIGHTS_1, CNPJ_WEIGHTS_2};
use brdocs::domain::cpf::{CPF_WEIGHTS_1, CPF_WEIGHTS_2};

pub const VALID_CPFS: &[&str] = &["11144477735", "52998224725"];
pub const VALID_CPFS_FORMATTED: &[&str] = &["111.444.777-35", "529.982.247-25"];

pub const VALID_CNPJS: &[&str] = &["11222333000181", "11444777000161"];
pub const VALID_CNPJS_FORMATTED: &[&str] = &["11.222.333/0001-81", "11.444.777/0001-61"];

/// Inputs every function must survive.
pub fn hostile_inputs() -> Vec<String> {
    vec![
        String::new(),
        " ".to_string(),
        "abc".to_string(),
        "🔢📱☎️".to_string(),
        "٣٤٥".to_string(),
        "\n\r\t".to_string(),
        "9".repeat(1000),
        ".-/()".repeat(100),
        "1a2b3c4d5e6f7g8h9i0j1k2l3m4n5o".to_string(),
        "111.444.777-35.11.222.333/0001-81".to_string(),
    ]
}

fn values(digits: &str) -> Vec<u32> {
    digits.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Appends both check digits to a 9-digit CPF body.
pub fn complete_cpf(body: &str) -> String {
    assert_eq!(body.len(), 9, "CPF body must have 9 digits");
    let mut digits = values(body);
    digits.push(check_digit(&digits, &CPF_WEIGHTS_1));
    digits.push(check_digit(&digits, &CPF_WEIGHTS_2));
    digits.iter().map(|d| d.to_string()).collect()
}

/// Appends both check digits to a 12-digit CNPJ body.
pub fn complete_cnpj(body: &str) -> String {
    assert_eq!(body.len(), 12, "CNPJ body must have 12 digits");
    let mut digits = values(body);
    digits.push(check_digit(&digits, &CNPJ_WEIGHTS_1));
    digits.push(check_digit(&digits, &CNPJ_WEIGHTS_2));
    digits.iter().map(|d| d.to_string()).collect()
}

/// Deterministic pseudo-random digit bodies.
pub fn bodies(len: usize, count: usize) -> Vec<String> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..count)
        .map(|_| {
            (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    char::from(b'0' + (state % 10) as u8)
                })
                .collect()
        })
        .collect()
}

/// Replaces the digit at `index` with a different one.
pub fn corrupt(digits: &str, index: usize) -> String {
    digits
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i == index {
                let d = c.to_digit(10).unwrap_or(0);
                char::from(b'0' + ((d + 1) % 10) as u8)
            } else {
                c
            }
        })
        .collect()
}
