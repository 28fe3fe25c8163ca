//! Ordered pattern sequences.

use std::fmt;
use std::ops::Deref;

use crate::error::{KotogramError, Result};
use crate::grammar::pattern::TokenPattern;

/// One concrete surface realization of a grammar construction.
///
/// Validated on construction and immutable afterwards. A sequence is never
/// empty and holds at most one star, which keeps the matcher's backtracking
/// to a single level.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PatternSequence {
    patterns: Vec<TokenPattern>,
}

impl PatternSequence {
    /// Create a sequence, rejecting empty sequences and sequences with more
    /// than one star.
    pub fn new(patterns: Vec<TokenPattern>) -> Result<Self> {
        if patterns.is_empty() {
            return Err(KotogramError::config("Pattern sequence is empty"));
        }

        let stars: Vec<usize> = patterns
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_star())
            .map(|(i, _)| i)
            .collect();
        if stars.len() > 1 {
            return Err(KotogramError::config(format!(
                "Pattern sequence has {} variable-length wildcards (at positions {:?}); at most one is allowed",
                stars.len(),
                stars
            )));
        }

        Ok(PatternSequence { patterns })
    }

    pub fn patterns(&self) -> &[TokenPattern] {
        &self.patterns
    }

    /// Position of the star, if the sequence has one.
    pub fn star_position(&self) -> Option<usize> {
        self.patterns.iter().position(|p| p.is_star())
    }

    /// Minimum number of tokens any match of this sequence consumes.
    pub fn min_len(&self) -> usize {
        self.patterns
            .iter()
            .filter(|p| !p.is_optional() && !p.is_star() && !p.is_placeholder())
            .count()
    }
}

impl Deref for PatternSequence {
    type Target = [TokenPattern];

    fn deref(&self) -> &Self::Target {
        &self.patterns
    }
}

impl fmt::Display for PatternSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.patterns.iter().map(|p| p.to_string()).collect();
        f.write_str(&rendered.join(" "))
    }
}

impl TryFrom<Vec<TokenPattern>> for PatternSequence {
    type Error = KotogramError;

    fn try_from(patterns: Vec<TokenPattern>) -> Result<Self> {
        PatternSequence::new(patterns)
    }
}
