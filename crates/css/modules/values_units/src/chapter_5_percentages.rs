//! CSS Values & Units Level 3: §5 Percentages
//! W3C: <https://www.w3.org/TR/css-values-3/#percentages>

use core::fmt;
use cssparser::ToCss;

/// A CSS <percentage>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f32); // stored as a fraction, 150% is 1.5

impl ToCss for Percentage {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        write!(dest, "{}%", self.0 * 100.0)
    }
}
