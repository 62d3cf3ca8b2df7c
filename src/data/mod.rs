//! Read-only reference tables: generic TLDs, ISO country records, and the
//! default passphrase dictionary. Loaded at compile time, never mutated.

mod countries;
mod tlds;
mod words;

pub use countries::{is_cctld, random_cctld, random_country, Country, CCTLD_LEN, COUNTRIES};
pub use tlds::{is_generic_tld, random_tld, GENERIC_TLDS, MAX_TLD_LEN, MIN_TLD_LEN};
pub use words::WORDS;
