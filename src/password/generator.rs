//! Password synthesis by rejection sampling.
//!
//! Characters are drawn uniformly from the union of the policy's classes;
//! a draw missing any required class is discarded whole and redrawn.
//! Patching individual positions instead would bias where the required
//! characters land, so the loop always redraws the full string. Expected
//! iteration count stays small for realistic policies but grows as the
//! number of required classes approaches the length.

use rand::Rng;
use tracing::trace;

use crate::charset;
use crate::length;
use crate::password::policy::PasswordPolicy;
use crate::Result;

/// Generate a password satisfying the policy.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, policy: &PasswordPolicy) -> Result<String> {
    let len = length::select(rng, policy.min_len, policy.max_len, policy.allowed_bound())?;

    let pool = character_pool(policy);

    let mut attempts = 0usize;
    loop {
        let candidate: String = (0..len).map(|_| charset::pick(rng, &pool)).collect();
        if satisfies(&candidate, policy) {
            return Ok(candidate);
        }
        attempts += 1;
        trace!(attempts, len, "redrawing password missing a required class");
    }
}

/// Union of the character classes the policy requires; lowercase only when
/// nothing is required.
fn character_pool(policy: &PasswordPolicy) -> Vec<u8> {
    if policy.required_classes() == 0 {
        return charset::LOWERCASE.to_vec();
    }

    let mut pool = Vec::new();
    if policy.require_lower {
        pool.extend_from_slice(charset::LOWERCASE);
    }
    if policy.require_upper {
        pool.extend_from_slice(charset::UPPERCASE);
    }
    if policy.require_digit {
        pool.extend_from_slice(charset::DIGITS);
    }
    if policy.require_special {
        pool.extend_from_slice(charset::SPECIAL);
    }
    pool
}

fn satisfies(candidate: &str, policy: &PasswordPolicy) -> bool {
    let class_present = |table: &[u8]| candidate.chars().any(|c| charset::contains(table, c));

    (!policy.require_lower || class_present(charset::LOWERCASE))
        && (!policy.require_upper || class_present(charset::UPPERCASE))
        && (!policy.require_digit || class_present(charset::DIGITS))
        && (!policy.require_special || class_present(charset::SPECIAL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::policy;
    use crate::password::validator;
    use crate::rng;

    #[test]
    fn test_round_trip_all_flag_combinations() {
        let mut r = rng::seeded(51);
        for flags in 0u8..16 {
            let mut p = PasswordPolicy::new(8, 32);
            p.require_lower = flags & 1 != 0;
            p.require_upper = flags & 2 != 0;
            p.require_digit = flags & 4 != 0;
            p.require_special = flags & 8 != 0;
            for _ in 0..100 {
                let password = generate(&mut r, &p).unwrap();
                validator::validate(&password, &p)
                    .unwrap_or_else(|e| panic!("{password:?} under {p:?}: {e}"));
            }
        }
    }

    #[test]
    fn test_all_classes_forced_at_minimum_length() {
        let mut r = rng::seeded(52);
        let mut p = PasswordPolicy::new(4, 4);
        p.require_lower = true;
        p.require_upper = true;
        p.require_digit = true;
        p.require_special = true;
        for _ in 0..50 {
            let password = generate(&mut r, &p).unwrap();
            assert_eq!(password.chars().count(), 4);
            validator::validate(&password, &p).unwrap();
        }
    }

    #[test]
    fn test_no_flags_means_lowercase_only() {
        let mut r = rng::seeded(53);
        let p = PasswordPolicy::new(10, 20);
        for _ in 0..100 {
            let password = generate(&mut r, &p).unwrap();
            assert!(password.chars().all(|c| c.is_ascii_lowercase()), "{password:?}");
        }
    }

    #[test]
    fn test_length_below_required_classes_rejected() {
        let mut r = rng::seeded(54);
        let mut p = PasswordPolicy::new(3, 3);
        p.require_lower = true;
        p.require_upper = true;
        p.require_digit = true;
        p.require_special = true;
        assert!(generate(&mut r, &p).unwrap_err().is_range());
    }

    #[test]
    fn test_named_profiles_round_trip() {
        let mut r = rng::seeded(55);
        for (name, profile) in policy::NAMED_PROFILES {
            for _ in 0..50 {
                let password = generate(&mut r, profile).unwrap();
                validator::validate(&password, profile)
                    .unwrap_or_else(|e| panic!("{name}: {password:?}: {e}"));
            }
        }
    }

    #[test]
    fn test_deterministic_replay() {
        let mut a = rng::seeded(56);
        let mut b = rng::seeded(56);
        let p = policy::TLS_CA_KEY;
        for _ in 0..50 {
            assert_eq!(generate(&mut a, &p).unwrap(), generate(&mut b, &p).unwrap());
        }
    }
}
