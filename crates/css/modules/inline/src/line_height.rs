//! The `line-height` property.
//! W3C: <https://www.w3.org/TR/css-inline-3/#line-height-property>
//!
//! `normal | <number> | <length-percentage>`. Lengths and percentages arrive
//! as calc expressions and are resolved against the font at layout time.

use core::fmt;
use css_values_units::{CalcExpression, CssValue, Property, log_accepted, log_rejected};
use cssparser::ToCss;

/// The resolved `line-height` mode. Exactly one is active at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LineHeight {
    /// UA-dependent, roughly 1.2 times the font size for desktop fonts.
    #[default]
    Normal,
    /// A length or a percentage of the element's font size.
    Calc(CalcExpression),
    /// A unitless multiplier of the element's font size. Inherited as the number
    /// itself rather than the computed length.
    Multiple(f32),
}

impl ToCss for LineHeight {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match self {
            Self::Normal => dest.write_str("normal"),
            Self::Calc(expr) => expr.to_css(dest),
            Self::Multiple(factor) => write!(dest, "{factor}"),
        }
    }
}

/// Interpreter state for `line-height`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineHeightProperty {
    mode: LineHeight,
}

impl LineHeightProperty {
    /// A property holding the initial value, `normal`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current mode.
    #[inline]
    pub const fn mode(&self) -> &LineHeight {
        &self.mode
    }
}

/// Map `value` to a mode, trying the alternatives in priority order.
fn specified_mode(value: &CssValue) -> Option<LineHeight> {
    if let Some(expr) = value.as_calc() {
        return Some(LineHeight::Calc(expr.clone()));
    }
    if value.is_keyword("normal") {
        return Some(LineHeight::Normal);
    }
    value.as_number().map(LineHeight::Multiple)
}

impl Property for LineHeightProperty {
    const NAME: &'static str = "line-height";
    const INHERITED: bool = true;

    fn validate(&mut self, value: &CssValue) -> bool {
        if let Some(mode) = specified_mode(value) {
            self.mode = mode;
        } else if !value.is_inherit() {
            log_rejected(Self::NAME, value);
            return false;
        }
        // `inherit` is resolved by the cascade; the stored mode stays as it is.
        log_accepted(Self::NAME, value);
        true
    }
}
