//! Round-trip tests: everything a generator produces, the mirrored
//! validator must accept, for both randomness disciplines.

use std::io::Write;

use rand::Rng;

use format_forge::password::{self, policy, truncated_digest, BadPasswordCorpus};
use format_forge::{domain, email, passphrase, rng, EmailOptions, PasswordPolicy};

/// Random `(min, max)` request inside `[low, high]`.
fn random_bounds<R: Rng>(r: &mut R, low: usize, high: usize) -> (usize, usize) {
    let min = r.gen_range(low..=high);
    let max = r.gen_range(min..=high);
    (min, max)
}

#[test]
fn domain_round_trip_seeded() {
    let mut params = rng::seeded(1001);
    let mut r = rng::seeded(1002);
    for _ in 0..5000 {
        let (min, max) = random_bounds(&mut params, 1, 253);
        let value = domain::generate(&mut r, min, max).unwrap();
        domain::validate(&value, min, max).unwrap_or_else(|e| panic!("{value:?}: {e}"));
        let len = value.chars().count();
        assert!((min..=max).contains(&len), "{value:?} not in [{min},{max}]");
    }
}

#[test]
fn domain_round_trip_secure() {
    let mut r = rng::secure();
    for _ in 0..500 {
        let (min, max) = random_bounds(&mut r, 1, 253);
        let value = domain::generate(&mut r, min, max).unwrap();
        domain::validate(&value, min, max).unwrap_or_else(|e| panic!("{value:?}: {e}"));
    }
}

#[test]
fn domain_with_tld_round_trip() {
    let mut params = rng::seeded(1003);
    let mut r = rng::seeded(1004);
    for _ in 0..2000 {
        let (min, max) = random_bounds(&mut params, 4, 253);
        let value = domain::generate_with_valid_tld(&mut r, min, max).unwrap();
        domain::validate_with_valid_tld(&value, min, max)
            .unwrap_or_else(|e| panic!("{value:?}: {e}"));
    }
}

#[test]
fn domain_with_cctld_round_trip() {
    let mut params = rng::seeded(1005);
    let mut r = rng::seeded(1006);
    for _ in 0..2000 {
        let (min, max) = random_bounds(&mut params, 4, 253);
        let value = domain::generate_with_valid_cctld(&mut r, min, max).unwrap();
        domain::validate_with_valid_cctld(&value, min, max)
            .unwrap_or_else(|e| panic!("{value:?}: {e}"));
    }
}

#[test]
fn domain_exact_fit_witness() {
    let mut r = rng::seeded(1007);
    for _ in 0..200 {
        let value = domain::generate(&mut r, 5, 5).unwrap();
        assert_eq!(value.chars().count(), 5, "{value:?}");
        for (i, label) in value.split('.').enumerate() {
            assert!(label.len() <= 63);
            if i > 0 {
                assert_ne!(label, "www");
            }
        }
    }
    // One concrete witness shape: "a.bcd" splits into labels "a" and "bcd".
    domain::validate("a.bcd", 5, 5).unwrap();
}

#[test]
fn email_round_trip_all_shapes() {
    let mut params = rng::seeded(1011);
    let mut r = rng::seeded(1012);
    let shapes = [
        EmailOptions { quoted_local_part: false, ip_domain_part: false },
        EmailOptions { quoted_local_part: true, ip_domain_part: false },
        EmailOptions { quoted_local_part: false, ip_domain_part: true },
        EmailOptions { quoted_local_part: true, ip_domain_part: true },
    ];
    for opts in shapes {
        let window = email::feasible_bound(opts);
        for _ in 0..1500 {
            let (min, max) = random_bounds(&mut params, window.min, window.max);
            let value = email::generate(&mut r, min, max, opts)
                .unwrap_or_else(|e| panic!("generate({min},{max},{opts:?}): {e}"));
            email::validate(&value, min, max, opts)
                .unwrap_or_else(|e| panic!("{value:?} {opts:?}: {e}"));
            let len = value.chars().count();
            assert!((min..=max).contains(&len), "{value:?} not in [{min},{max}]");
        }
    }
}

#[test]
fn email_round_trip_secure() {
    let mut r = rng::secure();
    let opts = EmailOptions::default();
    for _ in 0..500 {
        let value = email::generate(&mut r, 0, 0, opts).unwrap();
        email::validate(&value, 0, 0, opts).unwrap_or_else(|e| panic!("{value:?}: {e}"));
    }
}

#[test]
fn password_round_trip_seeded() {
    let mut params = rng::seeded(1021);
    let mut r = rng::seeded(1022);
    for _ in 0..5000 {
        let flags: u8 = params.gen_range(0..16);
        let mut policy = PasswordPolicy::new(0, 0);
        policy.require_lower = flags & 1 != 0;
        policy.require_upper = flags & 2 != 0;
        policy.require_digit = flags & 4 != 0;
        policy.require_special = flags & 8 != 0;
        let low = policy.allowed_bound().min;
        let (min, max) = random_bounds(&mut params, low, 64);
        policy.min_len = min;
        policy.max_len = max;
        let value = password::generate(&mut r, &policy).unwrap();
        password::validate(&value, &policy)
            .unwrap_or_else(|e| panic!("{value:?} under {policy:?}: {e}"));
        assert!((min..=max).contains(&value.chars().count()));
    }
}

#[test]
fn password_round_trip_secure() {
    let mut r = rng::secure();
    for (_, profile) in policy::NAMED_PROFILES {
        for _ in 0..100 {
            let value = password::generate(&mut r, profile).unwrap();
            password::validate(&value, profile).unwrap_or_else(|e| panic!("{value:?}: {e}"));
        }
    }
}

#[test]
fn password_all_classes_boundary() {
    let mut r = rng::seeded(1023);
    let mut policy = PasswordPolicy::new(4, 4);
    policy.require_lower = true;
    policy.require_upper = true;
    policy.require_digit = true;
    policy.require_special = true;
    for _ in 0..100 {
        let value = password::generate(&mut r, &policy).unwrap();
        assert_eq!(value.chars().count(), 4);
        password::validate(&value, &policy).unwrap();
    }
    password::validate("aA1!", &policy).unwrap();
    assert!(password::validate("aaaa", &policy).is_err());
}

#[test]
fn passphrase_round_trip() {
    let mut params = rng::seeded(1031);
    let mut r = rng::seeded(1032);
    let separators = ["-", ".", "_", "::"];
    for _ in 0..2000 {
        let (min, max) = random_bounds(&mut params, 2, 10);
        let separator = separators[params.gen_range(0..separators.len())];
        let capitalize = params.gen_bool(0.5);
        let append_digit = params.gen_bool(0.5);
        let value = passphrase::generate(
            &mut r, min, max, separator, capitalize, append_digit, None,
        )
        .unwrap();
        passphrase::validate(&value, min, max, separator, capitalize, append_digit, None)
            .unwrap_or_else(|e| panic!("{value:?} sep={separator:?}: {e}"));
    }
}

#[test]
fn deterministic_replay_across_formats() {
    let mut a = rng::seeded(7777);
    let mut b = rng::seeded(7777);
    for _ in 0..200 {
        assert_eq!(
            domain::generate(&mut a, 0, 0).unwrap(),
            domain::generate(&mut b, 0, 0).unwrap()
        );
        assert_eq!(
            email::generate(&mut a, 0, 0, EmailOptions::default()).unwrap(),
            email::generate(&mut b, 0, 0, EmailOptions::default()).unwrap()
        );
        assert_eq!(
            password::generate(&mut a, &policy::TLS_CA_KEY).unwrap(),
            password::generate(&mut b, &policy::TLS_CA_KEY).unwrap()
        );
        assert_eq!(
            passphrase::generate(&mut a, 3, 6, "-", true, true, None).unwrap(),
            passphrase::generate(&mut b, 3, 6, "-", true, true, None).unwrap()
        );
    }
}

#[test]
fn invalid_ranges_fail_fast() {
    let mut r = rng::seeded(1041);
    assert!(domain::generate(&mut r, 300, 300).unwrap_err().is_range());
    assert!(email::generate(&mut r, 10, 5, EmailOptions::default())
        .unwrap_err()
        .is_range());
    let policy = PasswordPolicy::new(5000, 5000);
    assert!(password::generate(&mut r, &policy).unwrap_err().is_range());
}

#[test]
fn bad_password_corpus_scenario() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for known in ["password", "123456", "letmein"] {
        file.write_all(&truncated_digest(known)).unwrap();
    }
    file.flush().unwrap();

    let corpus = BadPasswordCorpus::new(file.path());
    assert!(corpus.is_bad("password").unwrap());
    assert!(corpus.is_bad("letmein").unwrap());
    assert!(!corpus.is_bad("kQ93!vLx@TzP8#mWd21r").unwrap());

    let mut policy = PasswordPolicy::new(6, 64);
    policy.require_lower = true;
    assert!(password::validate_not_bad("password", &policy, &corpus).is_err());
    assert!(password::validate_not_bad("kq93vlxtzp8mwd21r", &policy, &corpus).is_ok());
}

#[test]
fn validation_is_idempotent() {
    for _ in 0..2 {
        domain::validate("www.example.com", 0, 0).unwrap();
        assert!(domain::validate("example.www", 0, 0).is_err());
        email::validate("user@example.com", 0, 0, EmailOptions::default()).unwrap();
        let policy = PasswordPolicy::new(4, 4);
        password::validate("abcd", &policy).unwrap();
    }
}
