//! Password validation: length bound, required class presence, printable
//! ASCII only. Missing classes are reported jointly.

use crate::charset;
use crate::error::FormatForgeError;
use crate::length;
use crate::password::badlist::BadPasswordCorpus;
use crate::password::policy::PasswordPolicy;
use crate::Result;

/// Validate a password against the policy.
///
/// Printable characters outside the four classes (e.g. space) are
/// tolerated; only non-printable characters are grammar errors.
pub fn validate(password: &str, policy: &PasswordPolicy) -> Result<()> {
    length::check(
        password.chars().count(),
        policy.min_len,
        policy.max_len,
        policy.allowed_bound(),
        "characters",
    )?;

    let mut has_lower = !policy.require_lower;
    let mut has_upper = !policy.require_upper;
    let mut has_digit = !policy.require_digit;
    let mut has_special = !policy.require_special;

    for (index, ch) in password.chars().enumerate() {
        if charset::contains(charset::LOWERCASE, ch) {
            has_lower = true;
        } else if charset::contains(charset::UPPERCASE, ch) {
            has_upper = true;
        } else if charset::contains(charset::DIGITS, ch) {
            has_digit = true;
        } else if charset::contains(charset::SPECIAL, ch) {
            has_special = true;
        } else if !charset::is_printable_ascii(ch) {
            return Err(FormatForgeError::grammar(format!(
                "password contains non-printable character {ch:?} at index {index}"
            )));
        }
    }

    let mut errors = Vec::new();
    if !has_lower {
        errors.push(FormatForgeError::grammar(
            "password must contain at least one lowercase letter",
        ));
    }
    if !has_upper {
        errors.push(FormatForgeError::grammar(
            "password must contain at least one uppercase letter",
        ));
    }
    if !has_digit {
        errors.push(FormatForgeError::grammar(
            "password must contain at least one digit",
        ));
    }
    if !has_special {
        errors.push(FormatForgeError::grammar(
            "password must contain at least one special character",
        ));
    }

    FormatForgeError::join(errors)
}

/// Validate the password and additionally reject it when the bad-password
/// corpus knows it.
///
/// A corpus that cannot be loaded propagates as a load error; it is never
/// conflated with "the password is safe".
pub fn validate_not_bad(
    password: &str,
    policy: &PasswordPolicy,
    corpus: &BadPasswordCorpus,
) -> Result<()> {
    validate(password, policy)?;

    if corpus.is_bad(password)? {
        return Err(FormatForgeError::grammar(
            "password is found in the list of common bad passwords",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_classes(min: usize, max: usize) -> PasswordPolicy {
        let mut p = PasswordPolicy::new(min, max);
        p.require_lower = true;
        p.require_upper = true;
        p.require_digit = true;
        p.require_special = true;
        p
    }

    #[test]
    fn test_boundary_witnesses() {
        let p = all_classes(4, 4);
        assert!(validate("aA1!", &p).is_ok());
        assert!(validate("aaaa", &p).is_err());
    }

    #[test]
    fn test_missing_classes_reported_jointly() {
        let p = all_classes(4, 16);
        let err = validate("aaaa", &p).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("uppercase"));
        assert!(message.contains("digit"));
        assert!(message.contains("special"));
        assert!(!message.contains("one lowercase"));
    }

    #[test]
    fn test_unclassified_printable_tolerated() {
        let p = PasswordPolicy::new(4, 16);
        assert!(validate("ab cd", &p).is_ok());
    }

    #[test]
    fn test_non_printable_rejected() {
        let p = PasswordPolicy::new(1, 16);
        assert!(validate("ab\x01cd", &p).unwrap_err().is_grammar());
        assert!(validate("abcdé", &p).unwrap_err().is_grammar());
    }

    #[test]
    fn test_length_bound() {
        let p = PasswordPolicy::new(8, 10);
        assert!(validate("short", &p).unwrap_err().is_range());
        assert!(validate("muchtoolongpassword", &p).unwrap_err().is_range());
    }

    #[test]
    fn test_idempotent() {
        let p = all_classes(4, 16);
        for _ in 0..2 {
            assert!(validate("aA1!", &p).is_ok());
            assert!(validate("aaaa", &p).is_err());
        }
    }
}
