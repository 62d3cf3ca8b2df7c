//! Character tables shared by the generators and validators.
//!
//! All tables are plain ASCII byte strings; the grammars in this crate treat
//! text as opaque ASCII, so a byte per character is exact.

use rand::Rng;

pub const DIGITS: &[u8] = b"0123456789";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER_ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
pub const ALPHANUMERIC: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Special characters admitted in passwords.
pub const SPECIAL: &[u8] = b"!#$%&\"'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Printable ASCII, space excluded.
pub const PRINTABLE: &[u8] =
    b"!#$%&\"'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Printable ASCII plus space, for quoted e-mail local parts.
pub const PRINTABLE_WITH_SPACE: &[u8] =
    b" !#$%&\"'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Characters admitted in an unquoted e-mail local part, dot excluded.
/// Dot placement is positional (never first, last, or doubled), so the
/// boundary positions draw from this table.
pub const LOCAL_PART_UNQUOTED: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&'*+-/=?^_`{|}~";

/// Characters admitted in the interior of an unquoted e-mail local part.
pub const LOCAL_PART_UNQUOTED_DOT: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&'*+-./=?^_`{|}~";

/// Draw one character uniformly from a table.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, table: &[u8]) -> char {
    table[rng.gen_range(0..table.len())] as char
}

/// Membership test against a table.
pub fn contains(table: &[u8], ch: char) -> bool {
    ch.is_ascii() && table.contains(&(ch as u8))
}

/// Printable ASCII band check used by the password validator.
pub fn is_printable_ascii(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    #[test]
    fn test_table_sizes() {
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWER_ALPHANUMERIC.len(), 36);
        assert_eq!(ALPHANUMERIC.len(), 62);
        assert_eq!(PRINTABLE.len(), 94);
    }

    #[test]
    fn test_special_disjoint_from_alphanumeric() {
        for &b in SPECIAL {
            assert!(!ALPHANUMERIC.contains(&b));
        }
    }

    #[test]
    fn test_local_part_tables_differ_by_dot() {
        assert!(!contains(LOCAL_PART_UNQUOTED, '.'));
        assert!(contains(LOCAL_PART_UNQUOTED_DOT, '.'));
        assert_eq!(
            LOCAL_PART_UNQUOTED.len() + 1,
            LOCAL_PART_UNQUOTED_DOT.len()
        );
    }

    #[test]
    fn test_pick_stays_in_table() {
        let mut r = rng::seeded(3);
        for _ in 0..500 {
            let ch = pick(&mut r, LOWER_ALPHANUMERIC);
            assert!(contains(LOWER_ALPHANUMERIC, ch));
        }
    }

    #[test]
    fn test_printable_band() {
        assert!(is_printable_ascii(' '));
        assert!(is_printable_ascii('~'));
        assert!(!is_printable_ascii('\n'));
        assert!(!is_printable_ascii('é'));
    }
}
