//! CSS Values & Units Level 3: §8.1 Mathematical Expressions: `calc()`
//! W3C: <https://www.w3.org/TR/css-values-3/#calc-notation>

use crate::{Length, Number, Percentage};
use core::fmt;
use cssparser::ToCss;

/// A `calc()` expression tree over lengths, percentages and numbers.
///
/// Upstream parsing wraps plain `<length>` and `<percentage>` values in a leaf
/// expression, so any length-or-percentage reaches properties through this type.
/// Evaluation happens at layout time against the element's font and containing block.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcExpression {
    Length(Length),
    Percentage(Percentage),
    Number(Number),
    Sum(Box<Self>, Box<Self>),
    Difference(Box<Self>, Box<Self>),
    Product(Box<Self>, f32),
    Quotient(Box<Self>, f32),
}

impl CalcExpression {
    /// `self + rhs`
    #[must_use]
    pub fn plus(self, rhs: Self) -> Self {
        Self::Sum(Box::new(self), Box::new(rhs))
    }

    /// `self - rhs`
    #[must_use]
    pub fn minus(self, rhs: Self) -> Self {
        Self::Difference(Box::new(self), Box::new(rhs))
    }

    /// `self * factor`
    #[must_use]
    pub fn times(self, factor: f32) -> Self {
        Self::Product(Box::new(self), factor)
    }

    /// `self / divisor`
    #[must_use]
    pub fn divided_by(self, divisor: f32) -> Self {
        Self::Quotient(Box::new(self), divisor)
    }

    /// Whether this is a single value rather than an operation.
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Length(_) | Self::Percentage(_) | Self::Number(_))
    }

    /// Whether any operand is a percentage, making the result depend on a reference size.
    pub fn contains_percentage(&self) -> bool {
        match self {
            Self::Percentage(_) => true,
            Self::Length(_) | Self::Number(_) => false,
            Self::Sum(lhs, rhs) | Self::Difference(lhs, rhs) => {
                lhs.contains_percentage() || rhs.contains_percentage()
            }
            Self::Product(inner, _) | Self::Quotient(inner, _) => inner.contains_percentage(),
        }
    }

    /// Write an operand, parenthesizing nested operations.
    fn write_operand<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        if self.is_leaf() {
            return self.write_inner(dest);
        }
        dest.write_char('(')?;
        self.write_inner(dest)?;
        dest.write_char(')')
    }

    /// Write the expression body without the surrounding `calc()`.
    fn write_inner<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match self {
            Self::Length(length) => length.to_css(dest),
            Self::Percentage(percentage) => percentage.to_css(dest),
            Self::Number(number) => number.to_css(dest),
            Self::Sum(lhs, rhs) => {
                lhs.write_operand(dest)?;
                dest.write_str(" + ")?;
                rhs.write_operand(dest)
            }
            Self::Difference(lhs, rhs) => {
                lhs.write_operand(dest)?;
                dest.write_str(" - ")?;
                rhs.write_operand(dest)
            }
            Self::Product(inner, factor) => {
                inner.write_operand(dest)?;
                write!(dest, " * {factor}")
            }
            Self::Quotient(inner, divisor) => {
                inner.write_operand(dest)?;
                write!(dest, " / {divisor}")
            }
        }
    }
}

impl From<Length> for CalcExpression {
    #[inline]
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

impl From<Percentage> for CalcExpression {
    #[inline]
    fn from(percentage: Percentage) -> Self {
        Self::Percentage(percentage)
    }
}

impl ToCss for CalcExpression {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        if self.is_leaf() {
            return self.write_inner(dest);
        }
        dest.write_str("calc(")?;
        self.write_inner(dest)?;
        dest.write_char(')')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_serialize_without_calc_wrapper() {
        let expr = CalcExpression::from(Length::px(12.0));
        assert_eq!(expr.to_css_string(), "12px");
        assert!(!expr.contains_percentage());
    }

    #[test]
    fn nested_operations_are_parenthesized() {
        let expr = CalcExpression::from(Percentage(1.0))
            .minus(CalcExpression::from(Length::px(4.0)))
            .divided_by(2.0);
        assert_eq!(expr.to_css_string(), "calc((100% - 4px) / 2)");
        assert!(expr.contains_percentage());
    }

    #[test]
    fn products_scale_their_operand() {
        let expr = CalcExpression::from(Length::em(1.5)).times(2.0);
        assert_eq!(expr.to_css_string(), "calc(1.5em * 2)");
        assert!(!expr.is_leaf());

        let sum = CalcExpression::from(Length::px(10.0))
            .plus(CalcExpression::from(Length::px(2.0)))
            .times(3.0);
        assert_eq!(sum.to_css_string(), "calc((10px + 2px) * 3)");
    }
}
