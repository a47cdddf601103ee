//! Phone-number templates per ISO 3166-1 alpha-2 country code.
//!
//! Templates use `\d` for one random digit, `\d{n}` for exactly `n`
//! digits, and `\\` to escape a literal; every other character is copied
//! verbatim into the generated number.

/// Country code to template, exact-match lookup only.
pub const COUNTRY_PATTERNS: &[(&str, &str)] = &[
    ("AE", r"\+971\d{1}\d{7}"),
    ("AR", r"\+54\d{2}\d{8}"),
    ("AU", r"\+61\d{1}\d{8}"),
    ("BR", r"\+55\(\d{2}\)\d{5}-\d{4}"),
    ("CA", r"\+1\(\d{3}\)\d{3}-\d{4}"),
    ("CH", r"\+41\d{2}\d{7}"),
    ("CN", r"\+86\d{3}\d{8}"),
    ("DE", r"\+49\d{3}\d{8}"),
    ("EG", r"\+20\d{2}\d{8}"),
    ("ES", r"\+34\d{3}\d{6}"),
    ("FR", r"\+33\d{1}\d{8}"),
    ("GB", r"\+44\d{4}\d{6}"),
    ("IN", r"\+91\d{5}\d{5}"),
    ("IT", r"\+39\d{3}\d{7}"),
    ("JP", r"\+81\d{2}\d{8}"),
    ("KR", r"\+82\d{2}\d{8}"),
    ("LB", r"\+961\d{2}\d{6}"),
    ("MX", r"\+52\d{3}\d{7}"),
    ("NG", r"\+234\d{3}\d{7}"),
    ("NL", r"\+31\d{1}\d{8}"),
    ("PT", r"\+351\d{3}\d{6}"),
    ("RU", r"\+7\d{3}\d{7}"),
    ("SE", r"\+46\d{2}\d{7}"),
    ("TR", r"\+90\d{3}\d{7}"),
    ("US", r"\+1\(\d{3}\)\d{3}-\d{4}"),
    ("ZA", r"\+27\d{2}\d{7}"),
];

/// Country code used by the convenience phone entry point.
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// Look up the phone template for a country code.
pub fn pattern_for(code: &str) -> Option<&'static str> {
    COUNTRY_PATTERNS
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, pattern)| *pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert!(pattern_for("US").is_some());
        assert!(pattern_for("LB").is_some());
    }

    #[test]
    fn lookup_is_exact_match() {
        assert!(pattern_for("us").is_none());
        assert!(pattern_for("USA").is_none());
        assert!(pattern_for("").is_none());
    }

    #[test]
    fn default_country_is_registered() {
        assert!(pattern_for(DEFAULT_COUNTRY_CODE).is_some());
    }
}
