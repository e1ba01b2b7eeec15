pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use crate::config::{MAX_CODE_LENGTH, MIN_CODE_LENGTH};

/// 短码字符集：a-z、A-Z、0-9，共 62 个字符
pub const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    iter::repeat_with(|| CODE_ALPHABET[rand::random_range(0..CODE_ALPHABET.len())] as char)
        .take(length)
        .collect()
}

/// Check whether a caller-supplied code is 6-10 ASCII alphanumerics
pub fn is_valid_short_code(code: &str) -> bool {
    (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len())
        && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
