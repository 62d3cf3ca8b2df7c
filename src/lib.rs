//! Format Forge - synthesis and validation of structured text values
//!
//! Generators build domain names, e-mail addresses, passwords and
//! passphrases under caller-supplied length bounds; every generator has a
//! mirrored validator implementing the same grammar as a checker, so
//! synthesis and validation can never silently disagree. All generators are
//! generic over a [`rand::Rng`] source: seed one for replayable test data,
//! or use the OS-backed source for real credentials.

pub mod charset;
pub mod data;
pub mod domain;
pub mod email;
pub mod error;
pub mod length;
pub mod passphrase;
pub mod password;
pub mod rng;

// Re-export commonly used types
pub use email::EmailOptions;
pub use error::{FormatForgeError, Result};
pub use password::{BadPasswordCorpus, PasswordPolicy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
