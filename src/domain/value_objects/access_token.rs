//! Access token value object
//!
//! Wraps the personal access token used for the authenticated push.
//! `Debug` and `Display` never print the token.

use std::fmt;

use crate::domain::ports::REDACTED;

/// Secret credential for the deploy push
#[derive(Clone, PartialEq, Eq, Default)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw input value; surrounding whitespace is dropped
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// True for empty or whitespace-only input
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw token; only the push URL builder should call this
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&REDACTED).finish()
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
