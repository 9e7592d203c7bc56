//! Practitioner registration number.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// OAB registration number in the `XXX-XXXXXX` format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OabNumber(String);

impl OabNumber {
    const PREFIX_MIN: u128 = 100;
    const PREFIX_SPAN: u128 = 900;
    const SUFFIX_MIN: u128 = 100_000;
    const SUFFIX_SPAN: u128 = 900_000;

    /// Fallback number shown when nothing is known about the user.
    pub const PLACEHOLDER: &'static str = "123-456789";

    /// Parses a number, accepting only the `XXX-XXXXXX` digit layout.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let (prefix, suffix) = value.split_once('-')?;

        let valid = prefix.len() == 3
            && suffix.len() == 6
            && prefix.bytes().all(|b| b.is_ascii_digit())
            && suffix.bytes().all(|b| b.is_ascii_digit());

        valid.then(|| Self(value.to_string()))
    }

    /// Generates a random number with prefix in 100..=999 and suffix in 100000..=999999.
    #[must_use]
    pub fn generate() -> Self {
        let bits = Uuid::new_v4().as_u128();
        let prefix = Self::PREFIX_MIN + (bits % Self::PREFIX_SPAN);
        let suffix = Self::SUFFIX_MIN + ((bits >> 64) % Self::SUFFIX_SPAN);

        Self(format!("{prefix}-{suffix}"))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OabNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
