//! E-mail address assembly.
//!
//! The address is split between a local part (quoted or unquoted grammar)
//! and a domain part (DNS name or bracketed IP literal), with the total
//! length budget divided between them.

use rand::Rng;
use tracing::trace;

use crate::charset;
use crate::domain;
use crate::error::FormatForgeError;
use crate::length::{self, Bound};
use crate::Result;

/// Local-part length limit, per RFC 5321.
pub const LOCAL_PART_BOUND: Bound = Bound::new(1, 64);

/// Total address length: local part, `@`, domain part.
pub const EMAIL_BOUND: Bound = Bound::new(
    LOCAL_PART_BOUND.min + 1 + domain::DOMAIN_BOUND.min,
    LOCAL_PART_BOUND.max + 1 + domain::DOMAIN_BOUND.max,
);

/// Shortest IPv4 literal: `[1.2.3.4]`.
const IPV4_LITERAL_MIN: usize = 9;
/// IPv6 literals are emitted full-form: `[IPv6:` + 8 zero-padded quads + `]`.
const IPV6_LITERAL_LEN: usize = 6 + 39 + 1;

/// Feasible total-length window when the domain part is an IP literal: the
/// longest literal must still leave a one-character local part, and the
/// shortest must not force the local part over its 64-character cap.
pub const IP_EMAIL_BOUND: Bound = Bound::new(
    LOCAL_PART_BOUND.min + 1 + IPV6_LITERAL_LEN,
    LOCAL_PART_BOUND.max + 1 + IPV4_LITERAL_MIN,
);

/// Shape flags for e-mail synthesis and validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailOptions {
    /// Quote the local part, admitting any printable character inside.
    pub quoted_local_part: bool,
    /// Use a bracketed IPv4/IPv6 literal instead of a DNS name.
    pub ip_domain_part: bool,
}

/// Feasible total-length window for the given shape flags: a quoted local
/// part needs two characters for the quotes, an IP literal domain part pins
/// both ends of the window.
pub const fn feasible_bound(opts: EmailOptions) -> Bound {
    let min_local = if opts.quoted_local_part {
        LOCAL_PART_BOUND.min + 1
    } else {
        LOCAL_PART_BOUND.min
    };
    if opts.ip_domain_part {
        Bound::new(min_local + 1 + IPV6_LITERAL_LEN, IP_EMAIL_BOUND.max)
    } else {
        Bound::new(min_local + 1 + domain::DOMAIN_BOUND.min, EMAIL_BOUND.max)
    }
}

/// Generate an e-mail address with a total length drawn from `[min, max]`.
///
/// Every length inside the resolved bound must be closable under the shape
/// flags, so infeasible requests fail here, before any randomness is
/// consumed; the unset `(0, 0)` request resolves to the feasible window
/// itself.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
    opts: EmailOptions,
) -> Result<String> {
    let feasible = feasible_bound(opts);
    let bound = if min == 0 && max == 0 {
        feasible
    } else {
        let bound = length::resolve(min, max, EMAIL_BOUND)?;
        let mut errors = Vec::new();
        if bound.min < feasible.min {
            errors.push(FormatForgeError::feasibility(format!(
                "an e-mail of this shape needs a minimum length of at least {}",
                feasible.min
            )));
        }
        if bound.max > feasible.max {
            errors.push(FormatForgeError::feasibility(format!(
                "an e-mail of this shape allows a maximum length of at most {}",
                feasible.max
            )));
        }
        FormatForgeError::join(errors)?;
        bound
    };

    let target = rng.gen_range(bound.min..=bound.max);

    let min_local = if opts.quoted_local_part {
        LOCAL_PART_BOUND.min + 1 // two quote characters minimum
    } else {
        LOCAL_PART_BOUND.min
    };

    let (local_len, domain_part) = if opts.ip_domain_part {
        let literal = match rng.gen_range(0..2) {
            0 => ipv4_literal(rng),
            _ => ipv6_literal(rng),
        };
        (target - literal.len() - 1, literal)
    } else {
        let max_local = LOCAL_PART_BOUND.max.min(target - domain::DOMAIN_BOUND.min - 1);
        let mut local_len = rng.gen_range(min_local..=max_local);
        let mut domain_len = target - local_len - 1;
        if domain_len > domain::DOMAIN_BOUND.max {
            domain_len = domain::DOMAIN_BOUND.max;
            local_len = target - domain_len - 1;
        }
        (local_len, domain::generate(rng, domain_len, domain_len)?)
    };

    let local_part = if opts.quoted_local_part {
        quoted_local_part(rng, local_len)
    } else {
        unquoted_local_part(rng, local_len)
    };

    Ok(format!("{local_part}@{domain_part}"))
}

/// Unquoted local part: alphanumerics and unquoted specials at the
/// boundaries, dots admitted inside. A draw containing `..` is discarded
/// whole and redrawn; repairing single positions could reintroduce a new
/// adjacent pair.
fn unquoted_local_part<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    loop {
        let mut local = String::with_capacity(len);
        local.push(charset::pick(rng, charset::LOCAL_PART_UNQUOTED));
        for _ in 1..len.saturating_sub(1) {
            local.push(charset::pick(rng, charset::LOCAL_PART_UNQUOTED_DOT));
        }
        if len > 1 {
            local.push(charset::pick(rng, charset::LOCAL_PART_UNQUOTED));
        }

        if local.contains("..") {
            trace!(%local, "discarding local part containing \"..\"");
            continue;
        }
        return local;
    }
}

/// Quoted local part: `"` at both ends, any printable character or space
/// inside. The feasible window guarantees `len >= 2` for the quotes.
fn quoted_local_part<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    debug_assert!(len >= 2);
    let mut local = String::with_capacity(len);
    local.push('"');
    for _ in 1..len - 1 {
        local.push(charset::pick(rng, charset::PRINTABLE_WITH_SPACE));
    }
    local.push('"');
    local
}

fn ipv4_literal<R: Rng + ?Sized>(rng: &mut R) -> String {
    let octets: [u8; 4] = rng.gen();
    format!(
        "[{}]",
        std::net::Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3])
    )
}

fn ipv6_literal<R: Rng + ?Sized>(rng: &mut R) -> String {
    let quads: Vec<String> = (0..8).map(|_| format!("{:04x}", rng.gen::<u16>())).collect();
    format!("[IPv6:{}]", quads.join(":"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::validator;
    use crate::rng;

    #[test]
    fn test_round_trip_plain() {
        let mut r = rng::seeded(41);
        let opts = EmailOptions::default();
        for _ in 0..1000 {
            let email = generate(&mut r, 0, 0, opts).unwrap();
            validator::validate(&email, 0, 0, opts).unwrap_or_else(|e| panic!("{email:?}: {e}"));
        }
    }

    #[test]
    fn test_round_trip_quoted() {
        let mut r = rng::seeded(42);
        let opts = EmailOptions {
            quoted_local_part: true,
            ..Default::default()
        };
        for _ in 0..500 {
            let email = generate(&mut r, 10, 100, opts).unwrap();
            validator::validate(&email, 10, 100, opts).unwrap_or_else(|e| panic!("{email:?}: {e}"));
        }
    }

    #[test]
    fn test_round_trip_ip_domain() {
        let mut r = rng::seeded(43);
        let opts = EmailOptions {
            ip_domain_part: true,
            ..Default::default()
        };
        for _ in 0..500 {
            let email = generate(&mut r, IP_EMAIL_BOUND.min, IP_EMAIL_BOUND.max, opts).unwrap();
            validator::validate(&email, IP_EMAIL_BOUND.min, IP_EMAIL_BOUND.max, opts)
                .unwrap_or_else(|e| panic!("{email:?}: {e}"));
        }
    }

    #[test]
    fn test_exact_total_length() {
        let mut r = rng::seeded(44);
        for target in [3, 10, 64, 200, 318] {
            let email = generate(&mut r, target, target, EmailOptions::default()).unwrap();
            assert_eq!(email.chars().count(), target, "{email:?}");
        }
    }

    #[test]
    fn test_quoted_sentinel_always_succeeds() {
        let mut r = rng::seeded(48);
        let opts = EmailOptions {
            quoted_local_part: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            let email = generate(&mut r, 0, 0, opts).unwrap();
            validator::validate(&email, 0, 0, opts).unwrap_or_else(|e| panic!("{email:?}: {e}"));
        }
    }

    #[test]
    fn test_quoted_window_checked_before_drawing() {
        let mut r = rng::seeded(49);
        let quoted = EmailOptions {
            quoted_local_part: true,
            ..Default::default()
        };
        // Total length 3 cannot hold the two quotes plus a domain; the
        // request fails up front, never mid-draw.
        assert!(generate(&mut r, 3, 3, quoted).unwrap_err().is_feasibility());
        let email = generate(&mut r, 4, 4, quoted).unwrap();
        assert_eq!(email.chars().count(), 4);

        let quoted_ip = EmailOptions {
            quoted_local_part: true,
            ip_domain_part: true,
        };
        // At 48 a full-form IPv6 literal leaves only a one-character local
        // part, which the quotes cannot fit; every draw at 49 is closable.
        for _ in 0..50 {
            assert!(generate(&mut r, 48, 48, quoted_ip).unwrap_err().is_feasibility());
        }
        for _ in 0..200 {
            let email = generate(&mut r, 49, 49, quoted_ip).unwrap();
            validator::validate(&email, 49, 49, quoted_ip)
                .unwrap_or_else(|e| panic!("{email:?}: {e}"));
        }
    }

    #[test]
    fn test_feasible_bound_per_shape() {
        assert_eq!(feasible_bound(EmailOptions::default()), EMAIL_BOUND);
        let quoted = EmailOptions {
            quoted_local_part: true,
            ..Default::default()
        };
        assert_eq!(feasible_bound(quoted), crate::length::Bound::new(4, 318));
        let ip = EmailOptions {
            ip_domain_part: true,
            ..Default::default()
        };
        assert_eq!(feasible_bound(ip), IP_EMAIL_BOUND);
        let quoted_ip = EmailOptions {
            quoted_local_part: true,
            ip_domain_part: true,
        };
        assert_eq!(feasible_bound(quoted_ip), crate::length::Bound::new(49, 74));
    }

    #[test]
    fn test_ip_window_enforced() {
        let mut r = rng::seeded(45);
        let opts = EmailOptions {
            ip_domain_part: true,
            ..Default::default()
        };
        let err = generate(&mut r, 10, 60, opts).unwrap_err();
        assert!(err.is_feasibility());
        let err = generate(&mut r, 50, 200, opts).unwrap_err();
        assert!(err.is_feasibility());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut r = rng::seeded(46);
        let err = generate(&mut r, 10, 5, EmailOptions::default()).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_no_adjacent_dots_in_local_part() {
        let mut r = rng::seeded(47);
        for _ in 0..500 {
            let email = generate(&mut r, 20, 80, EmailOptions::default()).unwrap();
            let (local, _) = email.rsplit_once('@').unwrap();
            assert!(!local.contains(".."), "{email:?}");
        }
    }
}
