//! Length selection shared by every generator and validator.
//!
//! Each format carries a system-allowed bound (e.g. [1,63] for a DNS label).
//! Callers narrow it with a requested bound; the pair `(0, 0)` is the "unset"
//! sentinel and falls back to the system bound, matching the convention of
//! the generator functions throughout this crate.

use rand::Rng;

use crate::error::FormatForgeError;
use crate::Result;

/// An inclusive length bound with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    pub min: usize,
    pub max: usize,
}

impl Bound {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Resolve the requested bound against the system-allowed bound.
///
/// Fails fast with a range error before any randomness is consumed; both
/// bound violations are reported jointly when both are present.
pub(crate) fn resolve(req_min: usize, req_max: usize, allowed: Bound) -> Result<Bound> {
    if req_min == 0 && req_max == 0 {
        return Ok(allowed);
    }

    if req_max < req_min {
        return Err(FormatForgeError::range(
            "maximum length can not be less than minimum length",
        ));
    }

    let mut errors = Vec::new();

    if req_min < allowed.min {
        errors.push(FormatForgeError::range(format!(
            "minimum length must not be less than {}",
            allowed.min
        )));
    }

    if req_max > allowed.max {
        errors.push(FormatForgeError::range(format!(
            "maximum length must not exceed {}",
            allowed.max
        )));
    }

    FormatForgeError::join(errors)?;

    Ok(Bound::new(req_min, req_max))
}

/// Choose one concrete length uniformly from the resolved bound.
pub fn select<R: Rng + ?Sized>(
    rng: &mut R,
    req_min: usize,
    req_max: usize,
    allowed: Bound,
) -> Result<usize> {
    let bound = resolve(req_min, req_max, allowed)?;
    Ok(rng.gen_range(bound.min..=bound.max))
}

/// Validator-side counterpart of [`select`]: checks a measured length
/// against the resolved bound without consuming randomness.
pub fn check(
    measured: usize,
    req_min: usize,
    req_max: usize,
    allowed: Bound,
    unit: &str,
) -> Result<()> {
    let bound = resolve(req_min, req_max, allowed)?;

    if measured < bound.min {
        return Err(FormatForgeError::range(format!(
            "length of {} is less than minimum length of {} {}",
            measured, bound.min, unit
        )));
    }

    if measured > bound.max {
        return Err(FormatForgeError::range(format!(
            "length of {} exceeds maximum length of {} {}",
            measured, bound.max, unit
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    const ALLOWED: Bound = Bound::new(1, 253);

    #[test]
    fn test_unset_falls_back_to_system_bound() {
        let mut r = rng::seeded(7);
        for _ in 0..200 {
            let len = select(&mut r, 0, 0, ALLOWED).unwrap();
            assert!((1..=253).contains(&len));
        }
    }

    #[test]
    fn test_exact_length() {
        let mut r = rng::seeded(7);
        assert_eq!(select(&mut r, 5, 5, ALLOWED).unwrap(), 5);
    }

    #[test]
    fn test_inverted_bound_rejected() {
        let mut r = rng::seeded(7);
        let err = select(&mut r, 10, 5, ALLOWED).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_both_violations_reported() {
        let mut r = rng::seeded(7);
        let err = select(&mut r, 0, 300, Bound::new(1, 253)).unwrap_err();
        // req_min 0 with a nonzero req_max counts as a violation of the
        // system minimum, so both sides show up in the message.
        let message = err.to_string();
        assert!(message.contains("less than 1"));
        assert!(message.contains("exceed 253"));
    }

    #[test]
    fn test_check_measured() {
        assert!(check(5, 5, 5, ALLOWED, "characters").is_ok());
        assert!(check(4, 5, 5, ALLOWED, "characters").is_err());
        assert!(check(6, 5, 5, ALLOWED, "characters").is_err());
    }

    #[test]
    fn test_check_unset_uses_system_bound() {
        assert!(check(253, 0, 0, ALLOWED, "characters").is_ok());
        assert!(check(254, 0, 0, ALLOWED, "characters").is_err());
    }
}
