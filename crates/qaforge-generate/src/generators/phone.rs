use rand::Rng;
use regex::Regex;
use tracing::{trace, warn};

use crate::constants::MAX_PATTERN_ATTEMPTS;
use crate::country::{self, DEFAULT_COUNTRY_CODE};
use crate::errors::{GenerationError, Result};

/// Generate a phone number for the given country code.
///
/// The code must match an entry in [`crate::country::COUNTRY_PATTERNS`]
/// exactly; unknown codes are a usage error, never a silent default.
pub fn number(rng: &mut impl Rng, country_code: &str) -> Result<String> {
    let template = country::pattern_for(country_code)
        .ok_or_else(|| GenerationError::UnknownCountryCode(country_code.to_string()))?;
    from_template(rng, template)
}

/// Generate a phone number for the default country.
pub fn number_default(rng: &mut impl Rng) -> Result<String> {
    number(rng, DEFAULT_COUNTRY_CODE)
}

/// Expand a template and re-validate it against the template compiled as a
/// regular expression, regenerating on mismatch.
///
/// A mismatch is only possible when the template carries constructs beyond
/// escaped digits and literals, so the loop is capped rather than left to
/// spin on a template no expansion can satisfy.
pub fn from_template(rng: &mut impl Rng, template: &str) -> Result<String> {
    let matcher =
        Regex::new(&format!("^(?:{template})$")).map_err(|source| GenerationError::InvalidPattern {
            pattern: template.to_string(),
            source,
        })?;

    for attempt in 1..=MAX_PATTERN_ATTEMPTS {
        let candidate = expand_pattern(rng, template);
        if matcher.is_match(&candidate) {
            return Ok(candidate);
        }
        trace!(attempt, template, candidate = candidate.as_str(), "expansion rejected by template");
    }

    warn!(template, attempts = MAX_PATTERN_ATTEMPTS, "giving up on template expansion");
    Err(GenerationError::PatternUnsatisfiable {
        pattern: template.to_string(),
        attempts: MAX_PATTERN_ATTEMPTS,
    })
}

/// Expand the escaped-digit markers of a template.
///
/// Single left-to-right scan with an escape-pending flag: `\` arms the
/// flag; an escaped `d` emits one random digit, or `n` digits when a
/// `{n}` repeat count follows; any other escaped character is emitted
/// literally, as is every character outside escape state.
pub fn expand_pattern(rng: &mut impl Rng, pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut escaped = false;
    let mut idx = 0;

    while idx < chars.len() {
        let ch = chars[idx];
        if escaped {
            if ch == 'd' {
                if let Some((count, next_idx)) = repeat_count(&chars, idx + 1) {
                    for _ in 0..count {
                        push_digit(rng, &mut out);
                    }
                    idx = next_idx;
                } else {
                    push_digit(rng, &mut out);
                }
            } else {
                out.push(ch);
            }
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else {
            out.push(ch);
        }
        idx += 1;
    }

    out
}

fn push_digit(rng: &mut impl Rng, out: &mut String) {
    out.push(char::from(b'0' + rng.random_range(0..10_u8)));
}

// Parses `{n}` starting at `idx`, returning the count and the index of the
// closing brace.
fn repeat_count(chars: &[char], idx: usize) -> Option<(usize, usize)> {
    if chars.get(idx) != Some(&'{') {
        return None;
    }
    let close = chars[idx..].iter().position(|ch| *ch == '}')? + idx;
    let count: usize = chars[idx + 1..close].iter().collect::<String>().parse().ok()?;
    Some((count, close))
}
