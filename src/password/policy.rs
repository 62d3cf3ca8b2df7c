//! Password complexity policies and named profiles.

use crate::length::Bound;

/// Hard ceiling on password length.
pub const PASSWORD_MAX_LEN: usize = 4096;

/// Length bounds plus required character-class memberships.
///
/// A `min_len`/`max_len` pair of zeroes means "use the system bound", like
/// every other generator in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_len: usize,
    pub max_len: usize,
    pub require_lower: bool,
    pub require_upper: bool,
    pub require_digit: bool,
    pub require_special: bool,
}

impl PasswordPolicy {
    pub const fn new(min_len: usize, max_len: usize) -> Self {
        Self {
            min_len,
            max_len,
            require_lower: false,
            require_upper: false,
            require_digit: false,
            require_special: false,
        }
    }

    /// Number of required character classes.
    pub const fn required_classes(&self) -> usize {
        self.require_lower as usize
            + self.require_upper as usize
            + self.require_digit as usize
            + self.require_special as usize
    }

    /// System-allowed length bound under this policy: a password must be at
    /// least long enough to hold one character of each required class, and
    /// at least one character when nothing is required.
    pub const fn allowed_bound(&self) -> Bound {
        let required = self.required_classes();
        let min = if required == 0 { 1 } else { required };
        Bound::new(min, PASSWORD_MAX_LEN)
    }
}

const fn profile(
    min_len: usize,
    max_len: usize,
    lower: bool,
    upper: bool,
    digit: bool,
    special: bool,
) -> PasswordPolicy {
    PasswordPolicy {
        min_len,
        max_len,
        require_lower: lower,
        require_upper: upper,
        require_digit: digit,
        require_special: special,
    }
}

/// Password profile for a TLS CA key.
pub const TLS_CA_KEY: PasswordPolicy = profile(20, 255, true, true, true, true);
/// Password profile for an SSH CA key.
pub const SSH_CA_KEY: PasswordPolicy = profile(20, 255, true, true, true, true);
/// Password profile for a TLS key.
pub const TLS_KEY: PasswordPolicy = profile(20, 127, true, true, true, true);
/// Password profile for an SSH key.
pub const SSH_KEY: PasswordPolicy = profile(20, 127, true, true, true, false);
/// Password profile for a Linux server user.
pub const LINUX_SERVER_USER: PasswordPolicy = profile(20, 63, true, true, true, false);
/// Password profile for a Linux workstation user.
pub const LINUX_WORKSTATION_USER: PasswordPolicy = profile(10, 20, true, false, true, false);
/// Password profile for a Windows server user.
pub const WINDOWS_SERVER_USER: PasswordPolicy = profile(20, 63, true, true, true, false);
/// Password profile for a Windows desktop user.
pub const WINDOWS_DESKTOP_USER: PasswordPolicy = profile(10, 20, true, false, true, false);
/// Password profile for a MariaDB account.
pub const MARIADB: PasswordPolicy = profile(20, 31, true, true, true, false);

/// Every named profile, for sweeping in tests.
pub const NAMED_PROFILES: &[(&str, PasswordPolicy)] = &[
    ("tls-ca-key", TLS_CA_KEY),
    ("ssh-ca-key", SSH_CA_KEY),
    ("tls-key", TLS_KEY),
    ("ssh-key", SSH_KEY),
    ("linux-server-user", LINUX_SERVER_USER),
    ("linux-workstation-user", LINUX_WORKSTATION_USER),
    ("windows-server-user", WINDOWS_SERVER_USER),
    ("windows-desktop-user", WINDOWS_DESKTOP_USER),
    ("mariadb", MARIADB),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_minimum() {
        assert_eq!(PasswordPolicy::new(0, 0).allowed_bound().min, 1);
        assert_eq!(TLS_CA_KEY.allowed_bound().min, 4);
        assert_eq!(SSH_KEY.allowed_bound().min, 3);
        assert_eq!(LINUX_WORKSTATION_USER.allowed_bound().min, 2);
    }

    #[test]
    fn test_profiles_internally_consistent() {
        for (name, policy) in NAMED_PROFILES {
            assert!(policy.min_len <= policy.max_len, "{name}");
            assert!(policy.min_len >= policy.allowed_bound().min, "{name}");
            assert!(policy.max_len <= PASSWORD_MAX_LEN, "{name}");
        }
    }
}
