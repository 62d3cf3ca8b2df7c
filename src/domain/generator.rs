//! Exact-length domain name construction.
//!
//! Building a domain of an exact total length is a bin-packing problem:
//! labels are 1..=63 characters, separators cost one character each, and the
//! whole name must land exactly on the drawn length without breaking the
//! label grammar. The two repair paths below exist because a one-character
//! shortfall and an overflow cannot share a single strategy once a label
//! sits at the 63-character ceiling.

use rand::Rng;
use tracing::trace;

use crate::charset;
use crate::data;
use crate::domain::label;
use crate::error::FormatForgeError;
use crate::length::{self, Bound};
use crate::Result;

/// System-allowed total domain length, separators included.
pub const DOMAIN_BOUND: Bound = Bound::new(1, 253);

/// A TLD-terminated domain needs at least one prefix character, a separator
/// and a two-character TLD.
pub const DOMAIN_WITH_TLD_BOUND: Bound = Bound::new(data::MIN_TLD_LEN + 2, DOMAIN_BOUND.max);
pub const DOMAIN_WITH_CCTLD_BOUND: Bound = Bound::new(data::CCTLD_LEN + 2, DOMAIN_BOUND.max);

/// Generate a free-form domain with a total length drawn from `[min, max]`.
///
/// The literal `www` is admitted only in the first label; any later
/// candidate containing it is discarded and redrawn.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> Result<String> {
    let target = length::select(rng, min, max, DOMAIN_BOUND)?;

    let mut labels: Vec<String> = Vec::new();
    // Accepted label characters plus one separator per accepted label
    // after the first.
    let mut track = 0usize;

    loop {
        let candidate = draw_label(rng, 0, 0, labels.is_empty())?;
        let candidate_len = candidate.len();
        labels.push(candidate);
        track += candidate_len;

        if track + 1 == target {
            // One character short. A label below the ceiling can simply be
            // regrown one character longer; a 63-character label cannot, so
            // it gives up one (or two) characters and a fresh one-character
            // label closes the gap.
            if candidate_len == label::LABEL_BOUND.max {
                let last = labels.last_mut().expect("at least one label accepted");
                last.truncate(candidate_len - 1);
                strip_trailing_hyphen(rng, last);
                labels.push(label::generate(rng, 1, 1)?);
            } else {
                let position = labels.len() - 1;
                let grown = draw_label(rng, candidate_len + 1, candidate_len + 1, position == 0)?;
                labels[position] = grown;
            }
            break;
        } else if track >= target {
            // Overflow: the current label absorbs the excess.
            let overflow = track - target;
            let last = labels.last_mut().expect("at least one label accepted");
            last.truncate(candidate_len - overflow);
            strip_trailing_hyphen(rng, last);
            break;
        } else {
            track += 1; // separator before the next label
        }
    }

    Ok(labels.join("."))
}

/// Generate a domain whose terminal label is a valid generic TLD.
pub fn generate_with_valid_tld<R: Rng + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
) -> Result<String> {
    let target = length::select(rng, min, max, DOMAIN_WITH_TLD_BOUND)?;

    // Leave room for at least a one-character prefix and the separator.
    let max_tld_len = data::MAX_TLD_LEN.min(target - DOMAIN_BOUND.min - 1);
    let tld = data::random_tld(rng, data::MIN_TLD_LEN, max_tld_len).ok_or_else(|| {
        FormatForgeError::feasibility(format!(
            "no generic TLD of length {} to {} available",
            data::MIN_TLD_LEN,
            max_tld_len
        ))
    })?;

    let prefix_len = target - tld.len() - 1;
    let prefix = generate(rng, prefix_len, prefix_len)?;

    Ok(format!("{prefix}.{tld}"))
}

/// Generate a domain whose terminal label is a valid country-code TLD.
pub fn generate_with_valid_cctld<R: Rng + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
) -> Result<String> {
    let target = length::select(rng, min, max, DOMAIN_WITH_CCTLD_BOUND)?;

    let cctld = data::random_cctld(rng);
    let prefix_len = target - data::CCTLD_LEN - 1;
    let prefix = generate(rng, prefix_len, prefix_len)?;

    Ok(format!("{prefix}.{cctld}"))
}

/// Draw one label, rejecting candidates that contain `www` unless the label
/// will sit in the first position.
fn draw_label<R: Rng + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
    first: bool,
) -> Result<String> {
    loop {
        let candidate = label::generate(rng, min, max)?;
        if !first && candidate.contains("www") {
            trace!(%candidate, "discarding label containing \"www\"");
            continue;
        }
        return Ok(candidate);
    }
}

/// Hyphens are never permitted as a label's last character; a truncation
/// that exposes one trades it for a fresh lowercase alphanumeric. The
/// replacement is redrawn if it would turn the label into exactly `www`.
fn strip_trailing_hyphen<R: Rng + ?Sized>(rng: &mut R, label: &mut String) {
    if label.ends_with('-') {
        label.pop();
        loop {
            label.push(charset::pick(rng, charset::LOWER_ALPHANUMERIC));
            if label != "www" {
                break;
            }
            label.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validator;
    use crate::rng;

    #[test]
    fn test_exact_fit_every_small_length() {
        let mut r = rng::seeded(31);
        for target in 1..=80 {
            for _ in 0..20 {
                let domain = generate(&mut r, target, target).unwrap();
                assert_eq!(domain.chars().count(), target, "{domain:?}");
            }
        }
    }

    #[test]
    fn test_exact_fit_at_ceiling() {
        let mut r = rng::seeded(31);
        for _ in 0..50 {
            let domain = generate(&mut r, 253, 253).unwrap();
            assert_eq!(domain.len(), 253);
            validator::validate(&domain, 253, 253).unwrap();
        }
    }

    #[test]
    fn test_round_trip() {
        let mut r = rng::seeded(32);
        for _ in 0..1000 {
            let domain = generate(&mut r, 0, 0).unwrap();
            validator::validate(&domain, 0, 0).unwrap_or_else(|e| panic!("{domain:?}: {e}"));
        }
    }

    #[test]
    fn test_www_only_first() {
        let mut r = rng::seeded(33);
        for _ in 0..500 {
            let domain = generate(&mut r, 40, 120).unwrap();
            for (i, label) in domain.split('.').enumerate() {
                if i > 0 {
                    assert_ne!(label, "www", "{domain:?}");
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_fails_fast() {
        let mut r = rng::seeded(34);
        assert!(generate(&mut r, 300, 300).unwrap_err().is_range());
        assert!(generate(&mut r, 10, 5).unwrap_err().is_range());
    }

    #[test]
    fn test_tld_round_trip() {
        let mut r = rng::seeded(35);
        for _ in 0..500 {
            let domain = generate_with_valid_tld(&mut r, 0, 0).unwrap();
            validator::validate_with_valid_tld(&domain, 0, 0)
                .unwrap_or_else(|e| panic!("{domain:?}: {e}"));
        }
    }

    #[test]
    fn test_tld_minimum_length() {
        let mut r = rng::seeded(36);
        let domain = generate_with_valid_tld(&mut r, 4, 4).unwrap();
        assert_eq!(domain.len(), 4);
        assert!(generate_with_valid_tld(&mut r, 3, 3).unwrap_err().is_range());
    }

    #[test]
    fn test_cctld_round_trip() {
        let mut r = rng::seeded(37);
        for _ in 0..500 {
            let domain = generate_with_valid_cctld(&mut r, 0, 0).unwrap();
            validator::validate_with_valid_cctld(&domain, 0, 0)
                .unwrap_or_else(|e| panic!("{domain:?}: {e}"));
        }
    }

    #[test]
    fn test_deterministic_replay() {
        let mut a = rng::seeded(99);
        let mut b = rng::seeded(99);
        for _ in 0..100 {
            assert_eq!(
                generate(&mut a, 0, 0).unwrap(),
                generate(&mut b, 0, 0).unwrap()
            );
        }
    }
}
