//! Password synthesis, validation, complexity policies and the bad-password
//! corpus.

mod badlist;
mod generator;
pub mod policy;
mod validator;

pub use badlist::{
    truncated_digest, BadPasswordCorpus, COVERED_LEN_MAX, COVERED_LEN_MIN, DIGEST_PREFIX_LEN,
};
pub use generator::generate;
pub use policy::{PasswordPolicy, PASSWORD_MAX_LEN};
pub use validator::{validate, validate_not_bad};
