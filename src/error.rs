//! Error handling for format-forge

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for format-forge
#[derive(Error, Debug)]
pub enum FormatForgeError {
    /// A requested length bound falls outside the system-allowed bound,
    /// or a minimum exceeds a maximum.
    #[error("range error: {message}")]
    Range { message: String },

    /// A candidate value violates the grammar of its format.
    #[error("grammar error: {message}")]
    Grammar { message: String },

    /// The requested bounds are mathematically unsatisfiable for the
    /// requested format variant.
    #[error("feasibility error: {message}")]
    Feasibility { message: String },

    /// The bad-password corpus file could not be read.
    #[error("error loading bad-password corpus from {}: {source}", .path.display())]
    CorpusLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Several independent defects found in one validation pass.
    #[error("{}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<FormatForgeError>),
}

impl FormatForgeError {
    /// Create a range error
    pub fn range(message: impl Into<String>) -> Self {
        Self::Range {
            message: message.into(),
        }
    }

    /// Create a grammar error
    pub fn grammar(message: impl Into<String>) -> Self {
        Self::Grammar {
            message: message.into(),
        }
    }

    /// Create a feasibility error
    pub fn feasibility(message: impl Into<String>) -> Self {
        Self::Feasibility {
            message: message.into(),
        }
    }

    /// Create a corpus load error
    pub fn corpus_load(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CorpusLoad {
            path: path.into(),
            source,
        }
    }

    /// Fold a list of independent defects into a single error value.
    ///
    /// Returns `Ok(())` for an empty list and unwraps a single-element list,
    /// so validators can accumulate freely and join once at the end.
    pub fn join(errors: Vec<FormatForgeError>) -> crate::Result<()> {
        let mut errors = errors;
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(Self::Multiple(errors)),
        }
    }

    /// True when this error (or any joined member) is a range error.
    pub fn is_range(&self) -> bool {
        match self {
            Self::Range { .. } => true,
            Self::Multiple(errors) => errors.iter().any(|e| e.is_range()),
            _ => false,
        }
    }

    /// True when this error (or any joined member) is a grammar error.
    pub fn is_grammar(&self) -> bool {
        match self {
            Self::Grammar { .. } => true,
            Self::Multiple(errors) => errors.iter().any(|e| e.is_grammar()),
            _ => false,
        }
    }

    /// True when this error (or any joined member) is a feasibility error.
    pub fn is_feasibility(&self) -> bool {
        match self {
            Self::Feasibility { .. } => true,
            Self::Multiple(errors) => errors.iter().any(|e| e.is_feasibility()),
            _ => false,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FormatForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_empty_is_ok() {
        assert!(FormatForgeError::join(Vec::new()).is_ok());
    }

    #[test]
    fn test_join_single_unwraps() {
        let err = FormatForgeError::join(vec![FormatForgeError::range("too small")]).unwrap_err();
        assert!(matches!(err, FormatForgeError::Range { .. }));
    }

    #[test]
    fn test_join_many_reports_all() {
        let err = FormatForgeError::join(vec![
            FormatForgeError::range("minimum length must not be less than 1"),
            FormatForgeError::range("maximum length must not exceed 253"),
        ])
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("less than 1"));
        assert!(message.contains("exceed 253"));
        assert!(err.is_range());
    }
}
