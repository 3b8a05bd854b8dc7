//! The binding verifier.
//!
//! Confirms the contract between the grammar exporter and language
//! construction: the exported handle must load into a valid [`Language`].
//! There are exactly two outcomes, pass or fail; a failure is a build defect
//! in the shipped artifact, so nothing here retries or recovers.

use crate::artifact;
use crate::language::{Language, LoadError};

/// Failure to turn the exported grammar handle into a usable language.
#[derive(Debug)]
pub struct VerificationError {
    cause: LoadError,
}

impl VerificationError {
    /// The load failure that made verification fail.
    #[must_use]
    pub fn cause(&self) -> &LoadError {
        &self.cause
    }
}

impl std::fmt::Display for VerificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Error loading Var2 grammar: {}", self.cause)
    }
}

impl std::error::Error for VerificationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

impl From<LoadError> for VerificationError {
    fn from(cause: LoadError) -> Self {
        Self { cause }
    }
}

/// Verifies that the exported grammar handle loads into a valid language.
///
/// Obtains the handle from [`grammar`](crate::grammar()), runs language
/// construction on it, and succeeds silently when the result is valid.
///
/// # Errors
///
/// Returns a [`VerificationError`] carrying the underlying load failure.
pub fn verify_grammar_loads() -> Result<(), VerificationError> {
    Language::load(artifact::grammar())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::GrammarHandle;

    #[test]
    fn test_shipped_artifact_verifies() {
        assert!(verify_grammar_loads().is_ok());
    }

    #[test]
    fn test_failure_carries_the_fixed_diagnostic() {
        let load_err = Language::load(GrammarHandle::from_raw("")).unwrap_err();
        let err = VerificationError::from(load_err);
        assert!(err.to_string().starts_with("Error loading Var2 grammar"));
        assert!(matches!(err.cause(), LoadError::Parse(_)));
    }
}
