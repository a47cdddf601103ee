use rand::Rng;

/// Generate a random version-4 UUID string.
pub fn uuid(rng: &mut impl Rng) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    uuid::Uuid::from_bytes(bytes).to_string()
}

/// Generate a Social Security Number as `XXX-XX-XXXX`.
pub fn ssn(rng: &mut impl Rng) -> String {
    format!(
        "{:03}-{:02}-{:04}",
        rng.random_range(0..1000),
        rng.random_range(0..100),
        rng.random_range(0..10000)
    )
}

/// Generate a 9-digit passport number.
pub fn passport_number(rng: &mut impl Rng) -> String {
    digits(rng, 9)
}

/// Generate a 16-digit credit card number whose last digit is the Luhn
/// check digit for the first 15.
pub fn credit_card_number(rng: &mut impl Rng) -> String {
    let mut number = [0_u8; 16];
    for digit in number.iter_mut().take(15) {
        *digit = rng.random_range(0..=9);
    }
    number[15] = luhn_check_digit(&number[..15]);
    number.iter().map(|d| char::from(b'0' + *d)).collect()
}

/// Luhn check digit for a slice of decimal digit values, doubling from the
/// rightmost digit.
pub fn luhn_check_digit(number: &[u8]) -> u8 {
    let mut sum = 0_u32;
    let mut alternate = true;
    for digit in number.iter().rev() {
        let mut value = *digit as u32;
        if alternate {
            value *= 2;
            if value > 9 {
                value = value % 10 + 1;
            }
        }
        alternate = !alternate;
        sum += value;
    }
    ((10 - sum % 10) % 10) as u8
}

/// Generate a 12-digit bank account number.
pub fn bank_account_number(rng: &mut impl Rng) -> String {
    digits(rng, 12)
}

/// Generate an IBAN-shaped value: the `DE` country prefix plus 20 digits.
pub fn iban(rng: &mut impl Rng) -> String {
    format!("DE{}", digits(rng, 20))
}

fn digits(rng: &mut impl Rng, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10_u8)))
        .collect()
}
