//! CSS Values & Units Level 3: §4 Numbers
//! W3C: <https://www.w3.org/TR/css-values-3/#numeric-types>

use core::fmt;
use cssparser::ToCss;

/// A CSS <number>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f32);

impl ToCss for Number {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        write!(dest, "{}", self.0)
    }
}
