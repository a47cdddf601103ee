use std::fmt;

use rand::Rng;

/// A complex number with real and imaginary parts. Immutable after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexNumber {
    real: f64,
    imaginary: f64,
}

impl ComplexNumber {
    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn imaginary(&self) -> f64 {
        self.imaginary
    }
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} + {:.2}i", self.real, self.imaginary)
    }
}

/// Generate a complex number with both parts uniform in their ranges.
pub fn complex(
    rng: &mut impl Rng,
    real_min: f64,
    real_max: f64,
    imaginary_min: f64,
    imaginary_max: f64,
) -> ComplexNumber {
    let real = real_min + (real_max - real_min) * rng.random::<f64>();
    let imaginary = imaginary_min + (imaginary_max - imaginary_min) * rng.random::<f64>();
    ComplexNumber::new(real, imaginary)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn display_renders_two_decimals() {
        let value = ComplexNumber::new(1.0, 2.5);
        assert_eq!(value.to_string(), "1.00 + 2.50i");
    }

    #[test]
    fn parts_stay_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let value = complex(&mut rng, -1.0, 1.0, 10.0, 20.0);
            assert!(value.real() >= -1.0 && value.real() <= 1.0);
            assert!(value.imaginary() >= 10.0 && value.imaginary() <= 20.0);
        }
    }
}
