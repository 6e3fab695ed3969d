//! Name validation
//!
//! Accepts alphabetic tokens joined by single apostrophes, commas, periods,
//! hyphens or spaces. There is no length bound.

use regex_lite::Regex;

use crate::error::{ImdbError, Result};

/// Pattern a typed actor name must match
pub const NAME_PATTERN: &str = r"^[a-zA-Z]+(([',. -][a-zA-Z ])?[a-zA-Z]*)*$";

/// Compiled name pattern
#[derive(Debug, Clone)]
pub struct NameValidator {
    pattern: Regex,
}

impl NameValidator {
    /// Validator for [`NAME_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(NAME_PATTERN)
    }

    /// Validator for a custom pattern.
    ///
    /// # Errors
    /// Returns `ImdbError::ParseError` if the pattern does not compile.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| ImdbError::ParseError(format!("Invalid name pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}
