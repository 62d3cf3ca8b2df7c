//! Domain name validation, mirroring the builder's grammar.

use crate::data;
use crate::domain::generator::{DOMAIN_BOUND, DOMAIN_WITH_CCTLD_BOUND, DOMAIN_WITH_TLD_BOUND};
use crate::domain::label;
use crate::error::FormatForgeError;
use crate::length;
use crate::Result;

/// Validate a free-form domain against the grammar and a requested bound.
///
/// Every defect found is reported, not just the first: each label is checked
/// independently and the results are joined.
pub fn validate(domain: &str, min: usize, max: usize) -> Result<()> {
    length::check(domain.chars().count(), min, max, DOMAIN_BOUND, "characters")?;

    let mut errors = Vec::new();

    for (index, part) in domain.split('.').enumerate() {
        if part == "www" && index != 0 {
            errors.push(FormatForgeError::grammar(format!(
                "\"www\" can only appear as the first label, found at position {index}"
            )));
        }

        if let Err(err) = label::validate(part, 0, 0) {
            errors.push(FormatForgeError::grammar(format!(
                "invalid label at position {index}: {err}"
            )));
        }
    }

    FormatForgeError::join(errors)
}

/// Validate a domain whose terminal label must be a valid generic TLD.
pub fn validate_with_valid_tld(domain: &str, min: usize, max: usize) -> Result<()> {
    length::check(
        domain.chars().count(),
        min,
        max,
        DOMAIN_WITH_TLD_BOUND,
        "characters",
    )?;
    validate(domain, 0, 0)?;

    let tld = terminal_label(domain);
    if !data::is_generic_tld(tld) {
        return Err(FormatForgeError::grammar(format!(
            "{tld:?} is not a valid generic TLD"
        )));
    }

    Ok(())
}

/// Validate a domain whose terminal label must be a valid country-code TLD.
pub fn validate_with_valid_cctld(domain: &str, min: usize, max: usize) -> Result<()> {
    length::check(
        domain.chars().count(),
        min,
        max,
        DOMAIN_WITH_CCTLD_BOUND,
        "characters",
    )?;
    validate(domain, 0, 0)?;

    let tld = terminal_label(domain);
    if !data::is_cctld(tld) {
        return Err(FormatForgeError::grammar(format!(
            "{tld:?} is not a valid country-code TLD"
        )));
    }

    Ok(())
}

fn terminal_label(domain: &str) -> &str {
    domain.rsplit('.').next().unwrap_or(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_domains() {
        assert!(validate("example.com", 0, 0).is_ok());
        assert!(validate("a", 0, 0).is_ok());
        assert!(validate("a.bcd", 5, 5).is_ok());
        assert!(validate("www.example.com", 0, 0).is_ok());
    }

    #[test]
    fn test_rejects_misplaced_www() {
        assert!(validate("example.www.com", 0, 0).is_err());
        assert!(validate("example.www", 0, 0).is_err());
        assert!(validate("www.example.com", 0, 0).is_ok());
    }

    #[test]
    fn test_rejects_bad_labels() {
        assert!(validate("exa_mple.com", 0, 0).is_err());
        assert!(validate("-example.com", 0, 0).is_err());
        assert!(validate("example-.com", 0, 0).is_err());
        assert!(validate("example..com", 0, 0).is_err());
        assert!(validate("Example.com", 0, 0).is_err());
    }

    #[test]
    fn test_length_bound() {
        assert!(validate("a.bcd", 5, 5).is_ok());
        assert!(validate("a.bcd", 6, 10).is_err());
        let long = "a".repeat(254);
        assert!(validate(&long, 0, 0).is_err());
    }

    #[test]
    fn test_defects_joined() {
        let err = validate("example.www.bad-.x_y", 0, 0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("www"));
        assert!(message.contains("hyphen"));
        assert!(message.contains("invalid character"));
    }

    #[test]
    fn test_tld_validator() {
        assert!(validate_with_valid_tld("example.com", 0, 0).is_ok());
        assert!(validate_with_valid_tld("example.notatld", 0, 0).is_err());
        assert!(validate_with_valid_tld("example", 0, 0).is_err());
    }

    #[test]
    fn test_cctld_validator() {
        assert!(validate_with_valid_cctld("example.de", 0, 0).is_ok());
        assert!(validate_with_valid_cctld("example.com", 0, 0).is_err());
    }

    #[test]
    fn test_idempotent() {
        for _ in 0..2 {
            assert!(validate("sub.example.org", 0, 0).is_ok());
            assert!(validate("example.www", 0, 0).is_err());
        }
    }
}
