//! CSS Identifiers (used widely across CSS values)
//! W3C: <https://www.w3.org/TR/CSS2/syndata.html#value-def-identifier>

use core::fmt;
use cssparser::{ToCss, serialize_identifier};

/// A CSS identifier value, canonicalized to ASCII lowercase.
///
/// Custom property names (`--*`) are case-sensitive and keep their spelling.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident(pub String);

impl Ident {
    /// Construct an identifier, lowercasing it unless it is a custom property name.
    pub fn new(text: &str) -> Self {
        if text.starts_with("--") {
            Self(text.to_owned())
        } else {
            Self(text.to_ascii_lowercase())
        }
    }

    /// The canonical identifier text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ident {
    #[inline]
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl ToCss for Ident {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        serialize_identifier(&self.0, dest)
    }
}
