//! Domain name synthesis and validation.
//!
//! `generate` packs freshly drawn labels to hit an exact total length;
//! `validate` mirrors the same grammar as a checker. The TLD-terminated
//! variants pin the terminal label to the generic or country-code reference
//! tables.

pub mod label;

mod generator;
mod validator;

pub use generator::{
    generate, generate_with_valid_cctld, generate_with_valid_tld, DOMAIN_BOUND,
    DOMAIN_WITH_CCTLD_BOUND, DOMAIN_WITH_TLD_BOUND,
};
pub use validator::{validate, validate_with_valid_cctld, validate_with_valid_tld};
