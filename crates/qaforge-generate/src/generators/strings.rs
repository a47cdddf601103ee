use rand::Rng;

use crate::constants::ALPHA_NUM;

/// Generate a random alphanumeric string of the given length.
///
/// Characters are drawn uniformly from [`ALPHA_NUM`].
pub fn alphanumeric(rng: &mut impl Rng, length: usize) -> String {
    let alphabet = ALPHA_NUM.as_bytes();
    let mut value = String::with_capacity(length);
    for _ in 0..length {
        let idx = rng.random_range(0..alphabet.len());
        value.push(alphabet[idx] as char);
    }
    value
}

/// Generate an email address: a random username followed by the literal
/// domain suffix (including the `@`).
pub fn email(rng: &mut impl Rng, domain: &str, username_length: usize) -> String {
    format!("{}{}", alphanumeric(rng, username_length), domain)
}

/// Generate a lowercase hex string with exactly `length` digits.
pub fn hex(rng: &mut impl Rng, length: usize) -> String {
    let mut bytes = vec![0_u8; length.div_ceil(2)];
    rng.fill_bytes(&mut bytes);
    let mut value = hex::encode(bytes);
    value.truncate(length);
    value
}

/// Generate a `#RRGGBB` hex color code.
pub fn hex_color(rng: &mut impl Rng) -> String {
    format!("#{}", hex(rng, 6))
}
