//! E-mail address validation.
//!
//! The address splits on the *last* `@`: a quoted local part may itself
//! contain `@`, so everything before the final separator is rejoined into
//! the local part when the quoted flag is set. Local-part and domain-part
//! defects are collected independently and joined.

use std::net::IpAddr;

use crate::charset;
use crate::domain;
use crate::email::generator::{EmailOptions, EMAIL_BOUND, LOCAL_PART_BOUND};
use crate::error::FormatForgeError;
use crate::length;
use crate::Result;

/// Special characters an unquoted local part must not contain.
const UNQUOTED_FORBIDDEN: &[char] =
    &['"', '(', ')', ',', ':', ';', '<', '>', '@', '[', '\\', ']'];

/// Validate an e-mail address against a requested total-length bound and
/// the shape flags it was generated with.
pub fn validate(email: &str, min: usize, max: usize, opts: EmailOptions) -> Result<()> {
    length::check(email.chars().count(), min, max, EMAIL_BOUND, "characters")?;

    let (local_part, domain_part) = match email.rsplit_once('@') {
        Some(parts) => parts,
        None => {
            return Err(FormatForgeError::grammar(
                "invalid email format: missing '@' symbol",
            ))
        }
    };

    if local_part.contains('@') && !opts.quoted_local_part {
        return Err(FormatForgeError::grammar(
            "multiple '@' symbols are not allowed unless the local part is quoted",
        ));
    }

    let mut errors = Vec::new();

    if let Err(err) = validate_local_part(local_part, opts.quoted_local_part) {
        errors.push(err);
    }

    if opts.ip_domain_part {
        if parse_ip_literal(domain_part).is_none() {
            errors.push(FormatForgeError::grammar(format!(
                "invalid IP literal in domain part: {domain_part:?}"
            )));
        }
    } else if let Err(err) = domain::validate(domain_part, 0, 0) {
        errors.push(err);
    }

    FormatForgeError::join(errors)
}

fn validate_local_part(local_part: &str, quoted: bool) -> Result<()> {
    length::check(
        local_part.chars().count(),
        0,
        0,
        LOCAL_PART_BOUND,
        "characters",
    )?;

    if quoted {
        if !(local_part.len() >= 2
            && local_part.starts_with('"')
            && local_part.ends_with('"'))
        {
            return Err(FormatForgeError::grammar(
                "quoted local part must be enclosed in double quotes",
            ));
        }
        for (index, ch) in local_part.chars().enumerate() {
            if !charset::is_printable_ascii(ch) {
                return Err(FormatForgeError::grammar(format!(
                    "quoted local part contains non-printable character {ch:?} at index {index}"
                )));
            }
        }
        return Ok(());
    }

    if local_part.starts_with('.') || local_part.ends_with('.') {
        return Err(FormatForgeError::grammar(
            "unquoted local part cannot start or end with a dot",
        ));
    }
    if local_part.contains(' ') {
        return Err(FormatForgeError::grammar(
            "unquoted local part cannot contain spaces",
        ));
    }
    if local_part.contains("..") {
        return Err(FormatForgeError::grammar(
            "unquoted local part cannot contain consecutive dots",
        ));
    }
    if local_part.contains(UNQUOTED_FORBIDDEN) {
        return Err(FormatForgeError::grammar(
            "unquoted local part cannot contain special characters: \"(),:;<>@[\\]",
        ));
    }
    for (index, ch) in local_part.chars().enumerate() {
        if !charset::is_printable_ascii(ch) {
            return Err(FormatForgeError::grammar(format!(
                "unquoted local part contains non-printable character {ch:?} at index {index}"
            )));
        }
    }

    Ok(())
}

/// Parse a bracketed IP literal, with an optional `IPv6:` tag.
fn parse_ip_literal(domain_part: &str) -> Option<IpAddr> {
    let inner = domain_part.strip_prefix('[')?.strip_suffix(']')?;
    let inner = inner.strip_prefix("IPv6:").unwrap_or(inner);
    inner.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: EmailOptions = EmailOptions {
        quoted_local_part: false,
        ip_domain_part: false,
    };
    const QUOTED: EmailOptions = EmailOptions {
        quoted_local_part: true,
        ip_domain_part: false,
    };
    const IP: EmailOptions = EmailOptions {
        quoted_local_part: false,
        ip_domain_part: true,
    };

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(validate("user@example.com", 0, 0, PLAIN).is_ok());
        assert!(validate("u.ser+tag@sub.example.org", 0, 0, PLAIN).is_ok());
        assert!(validate("a@b", 0, 0, PLAIN).is_ok());
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(validate("userexample.com", 0, 0, PLAIN).is_err());
    }

    #[test]
    fn test_rejects_multiple_at_unless_quoted() {
        assert!(validate("us@er@example.com", 0, 0, PLAIN).is_err());
        assert!(validate("\"us@er\"@example.com", 0, 0, QUOTED).is_ok());
    }

    #[test]
    fn test_unquoted_local_part_rules() {
        assert!(validate(".user@example.com", 0, 0, PLAIN).is_err());
        assert!(validate("user.@example.com", 0, 0, PLAIN).is_err());
        assert!(validate("us..er@example.com", 0, 0, PLAIN).is_err());
        assert!(validate("us er@example.com", 0, 0, PLAIN).is_err());
        assert!(validate("us(er)@example.com", 0, 0, PLAIN).is_err());
    }

    #[test]
    fn test_quoted_local_part_rules() {
        assert!(validate("\"any thing\"@example.com", 0, 0, QUOTED).is_ok());
        assert!(validate("unquoted@example.com", 0, 0, QUOTED).is_err());
    }

    #[test]
    fn test_ip_literal_domain() {
        assert!(validate("user@[192.168.0.1]", 0, 0, IP).is_ok());
        assert!(validate("user@[IPv6:2001:0db8:0000:0000:0000:0000:0000:0001]", 0, 0, IP).is_ok());
        assert!(validate("user@[999.1.1.1]", 0, 0, IP).is_err());
        assert!(validate("user@192.168.0.1", 0, 0, IP).is_err());
    }

    #[test]
    fn test_defects_joined() {
        let err = validate("us..er@example..com", 0, 0, PLAIN).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("consecutive dots"));
        assert!(message.contains("label"));
    }

    #[test]
    fn test_total_length_bound() {
        assert!(validate("a@b", 3, 3, PLAIN).is_ok());
        assert!(validate("a@b", 4, 10, PLAIN).is_err());
    }
}
