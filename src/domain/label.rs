//! DNS label generation and validation.
//!
//! The label grammar is constructive by position, so generation never needs
//! a retry: first and last characters are lowercase alphanumerics, interior
//! characters additionally admit `-`.

use rand::Rng;

use crate::charset;
use crate::error::FormatForgeError;
use crate::length::{self, Bound};
use crate::Result;

/// System-allowed label length, per RFC 1035.
pub const LABEL_BOUND: Bound = Bound::new(1, 63);

/// Interior label characters: lowercase alphanumerics plus hyphen.
pub(crate) const LABEL_INTERIOR: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

/// Generate one label with a length drawn from `[min, max]`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> Result<String> {
    let len = length::select(rng, min, max, LABEL_BOUND)?;

    let mut label = String::with_capacity(len);
    label.push(charset::pick(rng, charset::LOWER_ALPHANUMERIC));
    for _ in 1..len.saturating_sub(1) {
        label.push(charset::pick(rng, LABEL_INTERIOR));
    }
    if len > 1 {
        label.push(charset::pick(rng, charset::LOWER_ALPHANUMERIC));
    }

    Ok(label)
}

/// Validate one label against the grammar and a requested length bound.
///
/// Labels are checked as produced: lowercase only, uppercase is rejected.
pub fn validate(label: &str, min: usize, max: usize) -> Result<()> {
    length::check(label.chars().count(), min, max, LABEL_BOUND, "characters")?;

    let mut errors = Vec::new();

    if label.starts_with('-') {
        errors.push(FormatForgeError::grammar(format!(
            "label {label:?} starts with a hyphen"
        )));
    }
    if label.len() > 1 && label.ends_with('-') {
        errors.push(FormatForgeError::grammar(format!(
            "label {label:?} ends with a hyphen"
        )));
    }

    for (index, ch) in label.chars().enumerate() {
        if !charset::contains(LABEL_INTERIOR, ch) {
            errors.push(FormatForgeError::grammar(format!(
                "label {label:?} contains invalid character {ch:?} at index {index}"
            )));
        }
    }

    FormatForgeError::join(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    #[test]
    fn test_generate_round_trip() {
        let mut r = rng::seeded(21);
        for _ in 0..1000 {
            let label = generate(&mut r, 0, 0).unwrap();
            validate(&label, 0, 0).unwrap_or_else(|e| panic!("{label:?}: {e}"));
        }
    }

    #[test]
    fn test_exact_lengths() {
        let mut r = rng::seeded(21);
        for len in [1, 2, 3, 62, 63] {
            let label = generate(&mut r, len, len).unwrap();
            assert_eq!(label.len(), len);
        }
    }

    #[test]
    fn test_out_of_bound_request() {
        let mut r = rng::seeded(21);
        assert!(generate(&mut r, 1, 64).unwrap_err().is_range());
        assert!(generate(&mut r, 5, 4).unwrap_err().is_range());
    }

    #[test]
    fn test_validate_rejects_bad_shapes() {
        assert!(validate("-abc", 0, 0).is_err());
        assert!(validate("abc-", 0, 0).is_err());
        assert!(validate("a_bc", 0, 0).is_err());
        assert!(validate("Abc", 0, 0).is_err());
        assert!(validate("", 0, 0).is_err());
    }

    #[test]
    fn test_validate_accepts_good_shapes() {
        assert!(validate("a", 0, 0).is_ok());
        assert!(validate("-", 0, 0).is_err());
        assert!(validate("a-b", 0, 0).is_ok());
        assert!(validate("0z9", 0, 0).is_ok());
    }

    #[test]
    fn test_validate_reports_every_defect() {
        let err = validate("-a_b-", 0, 0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("starts with a hyphen"));
        assert!(message.contains("ends with a hyphen"));
        assert!(message.contains("invalid character"));
    }
}
