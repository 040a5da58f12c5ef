//! Generic component values handed to property interpreters.
//!
//! The tokenizer and value parser live upstream; by the time a value reaches a
//! property it has already been split into typed leaves and (possibly nested)
//! lists. Properties route on the typed projections below: every projection
//! returns `None` when the value is not of the requested type, which tells the
//! caller to try its next grammar alternative.

use crate::{CalcExpression, Ident, Number, Time, UnitlessTime};
use core::fmt;
use core::slice;
use css_easing::TimingFunction;
use cssparser::ToCss;

/// A parsed CSS value prior to property-specific interpretation.
#[derive(Clone, Debug, PartialEq)]
pub enum CssValue {
    /// An identifier the parser recognized as a CSS keyword (`none`, `normal`, ...).
    Keyword(Ident),
    /// Any other identifier, e.g. a property name.
    Identifier(Ident),
    Number(Number),
    Time(Time),
    TimingFunction(TimingFunction),
    /// A `calc()` expression, or a length/percentage wrapped as one.
    Calc(CalcExpression),
    List(ValueList),
    /// The CSS-wide `inherit` keyword.
    Inherit,
}

impl CssValue {
    /// Shorthand for `CssValue::Keyword`.
    pub fn keyword(name: &str) -> Self {
        Self::Keyword(Ident::new(name))
    }

    /// Shorthand for `CssValue::Identifier`.
    pub fn identifier(text: &str) -> Self {
        Self::Identifier(Ident::new(text))
    }

    /// Shorthand for a unitless number.
    pub const fn number(value: f32) -> Self {
        Self::Number(Number(value))
    }

    /// Shorthand for a time in seconds.
    pub const fn seconds(value: f32) -> Self {
        Self::Time(Time::seconds(value))
    }

    /// Shorthand for a time in milliseconds.
    pub const fn millis(value: f32) -> Self {
        Self::Time(Time::millis(value))
    }

    /// Shorthand for a list value.
    pub const fn list(items: Vec<Self>) -> Self {
        Self::List(ValueList(items))
    }

    /// Project to a calc expression. Only `Calc` values match.
    pub const fn as_calc(&self) -> Option<&CalcExpression> {
        match self {
            Self::Calc(expr) => Some(expr),
            _ => None,
        }
    }

    /// Project to a single unitless number. Only `Number` values match.
    pub const fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(Number(value)) => Some(*value),
            _ => None,
        }
    }

    /// Project to a time.
    ///
    /// `Time` values always match; `Number` values match as the `policy` allows.
    pub fn as_time(&self, policy: UnitlessTime) -> Option<Time> {
        match self {
            Self::Time(time) => Some(*time),
            Self::Number(Number(value)) => policy.convert(*value),
            _ => None,
        }
    }

    /// Project to a timing function, accepting the named easing keywords as well.
    pub fn as_timing_function(&self) -> Option<TimingFunction> {
        match self {
            Self::TimingFunction(function) => Some(*function),
            Self::Keyword(name) | Self::Identifier(name) => {
                TimingFunction::from_keyword(name.as_str())
            }
            _ => None,
        }
    }

    /// Project to an identifier. Keywords are identifiers too.
    pub const fn as_identifier(&self) -> Option<&Ident> {
        match self {
            Self::Keyword(name) | Self::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Project to a list.
    pub const fn as_list(&self) -> Option<&ValueList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Whether this value is the keyword `name` (ASCII case-insensitive).
    pub fn is_keyword(&self, name: &str) -> bool {
        self.as_identifier()
            .is_some_and(|ident| ident.as_str().eq_ignore_ascii_case(name))
    }

    /// Whether this value is the `inherit` sentinel.
    pub const fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

impl ToCss for CssValue {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match self {
            Self::Keyword(name) | Self::Identifier(name) => name.to_css(dest),
            Self::Number(number) => number.to_css(dest),
            Self::Time(time) => time.to_css(dest),
            Self::TimingFunction(function) => function.to_css(dest),
            Self::Calc(expr) => expr.to_css(dest),
            Self::List(list) => list.to_css(dest),
            Self::Inherit => dest.write_str("inherit"),
        }
    }
}

/// An ordered list of values.
///
/// A list containing nested lists is comma-separated: each nested list is one
/// space-separated group and each other element is a group of one. A list with
/// no nested lists is a single space-separated group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueList(pub Vec<CssValue>);

impl ValueList {
    /// The list elements in order.
    #[inline]
    pub fn items(&self) -> &[CssValue] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the elements are comma-separated groups.
    pub fn is_comma_separated(&self) -> bool {
        self.0.iter().any(|item| matches!(item, CssValue::List(_)))
    }

    /// Iterate the space-separated groups of this list in order.
    pub fn groups(&self) -> impl Iterator<Item = &[CssValue]> {
        let comma_separated = self.is_comma_separated();
        let whole = (!comma_separated).then_some(self.items());
        let per_item = self
            .0
            .iter()
            .filter(move |_| comma_separated)
            .map(group_of);
        whole.into_iter().chain(per_item)
    }
}

/// The group an element of a comma-separated list stands for.
fn group_of(item: &CssValue) -> &[CssValue] {
    match item {
        CssValue::List(inner) => inner.items(),
        other => slice::from_ref(other),
    }
}

/// Write values separated by `separator`.
fn write_separated<W>(items: &[CssValue], separator: &str, dest: &mut W) -> fmt::Result
where
    W: fmt::Write,
{
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            dest.write_str(separator)?;
        }
        item.to_css(dest)?;
    }
    Ok(())
}

impl ToCss for ValueList {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        if !self.is_comma_separated() {
            return write_separated(self.items(), " ", dest);
        }
        for (index, group) in self.groups().enumerate() {
            if index > 0 {
                dest.write_str(", ")?;
            }
            write_separated(group, " ", dest)?;
        }
        Ok(())
    }
}
