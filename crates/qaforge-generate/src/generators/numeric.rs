use std::f64::consts::TAU;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::errors::{GenerationError, Result};

/// Random `i32` uniform in `min..=max`.
pub fn int(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// Random `i64` uniform in `min..=max`.
pub fn long(rng: &mut impl Rng, min: i64, max: i64) -> i64 {
    rng.random_range(min..=max)
}

/// Random `i16` uniform in `min..=max`.
pub fn short(rng: &mut impl Rng, min: i16, max: i16) -> i16 {
    rng.random_range(min..=max)
}

/// Random byte.
pub fn byte(rng: &mut impl Rng) -> u8 {
    rng.random()
}

/// Random byte buffer of the given length.
pub fn bytes(rng: &mut impl Rng, length: usize) -> Vec<u8> {
    let mut data = vec![0_u8; length];
    rng.fill_bytes(&mut data);
    data
}

/// Random `char` with a scalar value in `min..=max`.
pub fn character(rng: &mut impl Rng, min: char, max: char) -> char {
    loop {
        // Values inside the surrogate gap are not chars; redraw.
        if let Some(ch) = char::from_u32(rng.random_range(min as u32..=max as u32)) {
            return ch;
        }
    }
}

/// Random `f32` in `[min, max)`.
pub fn float(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

/// Random `f64` in `[min, max)`.
pub fn double(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    min + rng.random::<f64>() * (max - min)
}

/// Fair coin flip.
pub fn boolean(rng: &mut impl Rng) -> bool {
    rng.random_bool(0.5)
}

/// Sample a normal distribution via the Box-Muller transform.
pub fn gaussian(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.random::<f64>().max(f64::MIN_POSITIVE);
    let u2 = rng.random::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
    mean + z * std_dev
}

/// Sample an exponential distribution with rate `lambda` by inverting the
/// CDF.
pub fn exponential(rng: &mut impl Rng, lambda: f64) -> f64 {
    (1.0 - rng.random::<f64>()).ln() / -lambda
}

/// Pick an index according to the given probability weights.
///
/// Walks the cumulative distribution; rounding shortfall falls back to the
/// last index. `probabilities` must be non-empty.
pub fn with_distribution(rng: &mut impl Rng, probabilities: &[f64]) -> usize {
    let p = rng.random::<f64>();
    let mut cumulative = 0.0;
    for (idx, probability) in probabilities.iter().enumerate() {
        cumulative += probability;
        if p <= cumulative {
            return idx;
        }
    }
    probabilities.len() - 1
}

/// Rejection-sample `min..=max` until a prime turns up. The range must
/// contain at least one prime.
pub fn prime(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    loop {
        let value = int(rng, min, max);
        if is_prime(value) {
            return value;
        }
    }
}

/// Trial-division primality check.
pub fn is_prime(number: i32) -> bool {
    if number <= 1 {
        return false;
    }
    if number == 2 {
        return true;
    }
    if number % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor * divisor <= number {
        if number % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Random percentage in `[0, 100)`.
pub fn percentage(rng: &mut impl Rng) -> f64 {
    rng.random::<f64>() * 100.0
}

/// Uniform pick from a non-empty set of values.
pub fn from_set(rng: &mut impl Rng, set: &[i64]) -> Result<i64> {
    if set.is_empty() {
        return Err(GenerationError::InvalidArgument(
            "from_set requires a non-empty set".to_string(),
        ));
    }
    Ok(set[rng.random_range(0..set.len())])
}

/// Rejection-sample `min..=max` until the value is even. The range must
/// contain at least one even value.
pub fn even(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    loop {
        let value = int(rng, min, max);
        if value % 2 == 0 {
            return value;
        }
    }
}

/// Rejection-sample `min..=max` until the value is odd. The range must
/// contain at least one odd value.
pub fn odd(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    loop {
        let value = int(rng, min, max);
        if value % 2 != 0 {
            return value;
        }
    }
}

/// Shuffle `min..=max` and keep the first `length` values: a sequence of
/// exactly `length` distinct in-range integers.
pub fn unique_sequence(rng: &mut impl Rng, min: i64, max: i64, length: usize) -> Result<Vec<i64>> {
    if max < min {
        return Err(GenerationError::InvalidArgument(format!(
            "unique_sequence min {min} must be <= max {max}"
        )));
    }
    let range_size = (max - min + 1) as usize;
    if length > range_size {
        return Err(GenerationError::SequenceLengthExceedsRange { length, range_size });
    }
    let mut numbers: Vec<i64> = (min..=max).collect();
    numbers.shuffle(rng);
    numbers.truncate(length);
    Ok(numbers)
}
