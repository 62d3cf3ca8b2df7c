//! Truncated-hash corpus of known-bad passwords.
//!
//! The corpus file is a flat sequence of 5-byte records, each the first
//! five bytes of a SHA-256 digest. Five bytes give a collision space far
//! below full-hash strength, so false positives are possible and accepted
//! for a "probably common" heuristic; entries actually present can never be
//! missed.
//!
//! The pool loads lazily, exactly once per corpus instance: the first
//! lookup takes the write lock and populates the set, later lookups take
//! only the read lock. `load` is idempotent and safe to race.

use std::collections::HashSet;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::FormatForgeError;
use crate::Result;

/// Record width in the corpus file.
pub const DIGEST_PREFIX_LEN: usize = 5;

/// The corpus only covers passwords of 3 to 39 characters.
pub const COVERED_LEN_MIN: usize = 3;
pub const COVERED_LEN_MAX: usize = 40; // exclusive

/// In-memory set of truncated password digests, backed by a corpus file.
pub struct BadPasswordCorpus {
    path: PathBuf,
    pool: RwLock<Option<HashSet<[u8; DIGEST_PREFIX_LEN]>>>,
}

impl BadPasswordCorpus {
    /// Create a corpus handle; the file is not touched until the first
    /// lookup or an explicit [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pool: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Populate the pool from the corpus file. The first caller wins;
    /// concurrent callers block on the write lock and then see the loaded
    /// pool, so calling this repeatedly is harmless.
    pub fn load(&self) -> Result<()> {
        let mut guard = self.pool.write();
        if guard.is_some() {
            return Ok(());
        }

        let mut file = File::open(&self.path)
            .map_err(|e| FormatForgeError::corpus_load(&self.path, e))?;

        let mut pool = HashSet::new();
        let mut record = [0u8; DIGEST_PREFIX_LEN];
        loop {
            let mut filled = 0;
            while filled < DIGEST_PREFIX_LEN {
                let n = file
                    .read(&mut record[filled..])
                    .map_err(|e| FormatForgeError::corpus_load(&self.path, e))?;
                if n == 0 {
                    break;
                }
                filled += n;
            }
            if filled == 0 {
                break; // clean end of file
            }
            if filled < DIGEST_PREFIX_LEN {
                return Err(FormatForgeError::corpus_load(
                    &self.path,
                    std::io::Error::new(
                        ErrorKind::UnexpectedEof,
                        format!("truncated {filled}-byte record at end of corpus"),
                    ),
                ));
            }
            pool.insert(record);
        }

        debug!(entries = pool.len(), path = %self.path.display(), "bad-password corpus loaded");
        *guard = Some(pool);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.pool.read().is_some()
    }

    /// Check a password against the corpus.
    ///
    /// Passwords outside the covered length band are declared not-bad
    /// without touching the corpus. A corpus that cannot be read is an
    /// error, not a "not bad" verdict.
    pub fn is_bad(&self, password: &str) -> Result<bool> {
        let len = password.chars().count();
        if !(COVERED_LEN_MIN..COVERED_LEN_MAX).contains(&len) {
            return Ok(false);
        }

        if !self.is_loaded() {
            self.load()?;
        }

        let digest = truncated_digest(password);
        let guard = self.pool.read();
        let pool = guard.as_ref().expect("pool populated by load");
        Ok(pool.contains(&digest))
    }
}

/// First five bytes of the SHA-256 digest of the password.
pub fn truncated_digest(password: &str) -> [u8; DIGEST_PREFIX_LEN] {
    let digest = Sha256::digest(password.as_bytes());
    let mut truncated = [0u8; DIGEST_PREFIX_LEN];
    truncated.copy_from_slice(&digest[..DIGEST_PREFIX_LEN]);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fixture(passwords: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for password in passwords {
            file.write_all(&truncated_digest(password)).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_known_bad_password_found() {
        let file = fixture(&["password", "letmein", "qwerty123"]);
        let corpus = BadPasswordCorpus::new(file.path());
        assert!(corpus.is_bad("password").unwrap());
        assert!(corpus.is_bad("letmein").unwrap());
        assert!(corpus.is_bad("qwerty123").unwrap());
    }

    #[test]
    fn test_absent_password_not_bad() {
        let file = fixture(&["password"]);
        let corpus = BadPasswordCorpus::new(file.path());
        assert!(!corpus.is_bad("J8#kd2LqPw9zXv5mTn3b").unwrap());
    }

    #[test]
    fn test_out_of_band_lengths_skip_lookup() {
        let file = fixture(&["ab", "x"]);
        let corpus = BadPasswordCorpus::new(file.path());
        // Two characters sit below the covered band, so no lookup happens
        // even though the digest is present in the file.
        assert!(!corpus.is_bad("ab").unwrap());
        assert!(!corpus.is_bad(&"a".repeat(40)).unwrap());
        assert!(!corpus.is_loaded());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let corpus = BadPasswordCorpus::new("/nonexistent/badpass.bin");
        let err = corpus.is_bad("password").unwrap_err();
        assert!(matches!(err, FormatForgeError::CorpusLoad { .. }));
    }

    #[test]
    fn test_truncated_record_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&truncated_digest("password")).unwrap();
        file.write_all(&[0xab, 0xcd]).unwrap();
        file.flush().unwrap();
        let corpus = BadPasswordCorpus::new(file.path());
        assert!(matches!(
            corpus.load().unwrap_err(),
            FormatForgeError::CorpusLoad { .. }
        ));
    }

    #[test]
    fn test_load_is_idempotent() {
        let file = fixture(&["password"]);
        let corpus = BadPasswordCorpus::new(file.path());
        corpus.load().unwrap();
        corpus.load().unwrap();
        assert!(corpus.is_loaded());
        assert!(corpus.is_bad("password").unwrap());
    }

    #[test]
    fn test_concurrent_first_lookup() {
        let file = fixture(&["password"]);
        let corpus = std::sync::Arc::new(BadPasswordCorpus::new(file.path()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let corpus = corpus.clone();
                std::thread::spawn(move || corpus.is_bad("password").unwrap())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
