//! Crate-wide diagnostic type.
//!
//! Every failure this crate can surface to a caller — a lexer rejecting a
//! character, a parser rejecting a token, a scope failing to resolve a name
//! — collapses to a single one-line message. There is no span, no source
//! snippet, no list of notes: just the reason, matching exactly one of the
//! shapes callers can pattern-match against in tests.

use std::fmt;

/// A single diagnostic, always rendered as one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamError {
    reason: String,
}

impl CamError {
    pub fn new(reason: impl Into<String>) -> CamError {
        CamError { reason: reason.into() }
    }

    pub fn unexpected_token(found: impl fmt::Display) -> CamError {
        CamError::new(format!("Unexpected token: {}.", found))
    }

    pub fn unexpected_eof() -> CamError {
        CamError::new("Unexpected end of input.")
    }

    pub fn unbound_variable(name: impl fmt::Display) -> CamError {
        CamError::new(format!("Unbound variable: {}.", name))
    }

    /// Category 3 (resource exhaustion, folded into category 1's one-line
    /// unwind): `Plus` overflowed the non-negative-integer representation.
    pub fn arithmetic_overflow(m: u64, n: u64) -> CamError {
        CamError::new(format!("Arithmetic overflow: {} + {}.", m, n))
    }

    /// Category 3: a token exceeded `lexer::MAXTOK` characters.
    pub fn token_too_long(max: usize) -> CamError {
        CamError::new(format!("Token exceeds maximum length of {}.", max))
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for CamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for CamError {}

pub type Result<T> = std::result::Result<T, CamError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_match_spec_shapes() {
        assert_eq!(CamError::unexpected_token("+").to_string(), "Unexpected token: +.");
        assert_eq!(CamError::unexpected_eof().to_string(), "Unexpected end of input.");
        assert_eq!(CamError::unbound_variable("x").to_string(), "Unbound variable: x.");
        assert_eq!(
            CamError::arithmetic_overflow(u64::MAX, 1).to_string(),
            format!("Arithmetic overflow: {} + 1.", u64::MAX)
        );
        assert_eq!(
            CamError::token_too_long(256).to_string(),
            "Token exceeds maximum length of 256."
        );
    }
}
