use rand::Rng;

/// Generate an IPv4 address, each octet uniform in 0..=255.
pub fn ip_address(rng: &mut impl Rng) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.random_range(0..=255_u16),
        rng.random_range(0..=255_u16),
        rng.random_range(0..=255_u16),
        rng.random_range(0..=255_u16)
    )
}

/// Generate a MAC address: six colon-separated uppercase hex octets.
pub fn mac_address(rng: &mut impl Rng) -> String {
    let mut value = String::with_capacity(17);
    for idx in 0..6 {
        if idx > 0 {
            value.push(':');
        }
        value.push_str(&format!("{:02X}", rng.random_range(0..=255_u16)));
    }
    value
}
