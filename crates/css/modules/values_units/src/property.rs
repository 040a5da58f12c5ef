//! Property state contract.
//!
//! Every property interpreter holds its current computed mode and exposes one
//! validation entry point. Validation is a pure decision over the incoming
//! value; state is replaced wholesale on acceptance and left untouched on
//! rejection.

use crate::CssValue;
use core::error::Error;
use core::fmt;
use cssparser::ToCss as _;
use log::{debug, trace};

/// The incoming value matches none of the property's grammar alternatives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidValueForProperty {
    /// Name of the property that rejected the value.
    pub property: &'static str,
}

impl fmt::Display for InvalidValueForProperty {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "invalid value for property `{}`", self.property)
    }
}

impl Error for InvalidValueForProperty {}

/// A style property that interprets generic values into its own typed state.
pub trait Property {
    /// The property name as written in style sheets.
    const NAME: &'static str;
    /// Whether the property inherits by default.
    const INHERITED: bool;

    /// Try to derive new state from `value`.
    ///
    /// Returns `true` and replaces the state when the value is valid for this
    /// property. Returns `false` and leaves the state unchanged otherwise.
    fn validate(&mut self, value: &CssValue) -> bool;

    /// `Result` form of [`Property::validate`].
    ///
    /// # Errors
    /// Returns `InvalidValueForProperty` when `validate` rejects the value.
    fn try_validate(&mut self, value: &CssValue) -> Result<(), InvalidValueForProperty> {
        if self.validate(value) {
            Ok(())
        } else {
            Err(InvalidValueForProperty {
                property: Self::NAME,
            })
        }
    }
}

/// Log a value a property accepted.
#[inline]
pub fn log_accepted(property: &str, value: &CssValue) {
    trace!("[{property}] accepted `{}`", value.to_css_string());
}

/// Log a value a property rejected.
#[inline]
pub fn log_rejected(property: &str, value: &CssValue) {
    debug!("[{property}] rejected `{}`", value.to_css_string());
}
