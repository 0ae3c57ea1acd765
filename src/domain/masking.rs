use serde::Serialize;
use std::fmt;

/// Marker that replaces the hidden part of an identifier.
pub const MASK: &str = "****";

const VISIBLE_SUFFIX: usize = 4;

/// Display-safe form of a sensitive identifier (card or account number).
///
/// Only the final four characters survive; identifiers shorter than that are
/// replaced entirely by [`MASK`]. The original value is dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MaskedIdentifier(String);

impl MaskedIdentifier {
    pub fn new(identifier: &str) -> Self {
        let len = identifier.chars().count();
        if len < VISIBLE_SUFFIX {
            return Self(MASK.to_string());
        }
        let suffix: String = identifier.chars().skip(len - VISIBLE_SUFFIX).collect();
        Self(format!("{MASK}{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The visible suffix, if the identifier was long enough to keep one.
    pub fn last_four(&self) -> Option<&str> {
        self.0.strip_prefix(MASK).filter(|rest| !rest.is_empty())
    }
}

impl fmt::Display for MaskedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
