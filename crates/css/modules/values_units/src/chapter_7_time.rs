//! CSS Values & Units Level 3: §7.3 Duration Units
//! W3C: <https://www.w3.org/TR/css-values-3/#time>

use core::fmt;
use cssparser::{ToCss, match_ignore_ascii_case};

/// Number of milliseconds in one second.
const MILLIS_PER_SECOND: f32 = 1000.0;

/// CSS <time> units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Milliseconds,
}

impl TimeUnit {
    /// The CSS suffix for this unit.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
        }
    }
}

/// A CSS <time> value, kept in the unit it was written in.
///
/// Derived equality is structural (`1s != 1000ms`); compare [`Time::as_millis`]
/// when the unit should not matter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Time {
    pub value: f32,
    pub unit: TimeUnit,
}

impl Time {
    /// `0s`, the initial value of `transition-duration` and `transition-delay`.
    pub const ZERO: Self = Self::seconds(0.0);

    /// A time in seconds.
    #[inline]
    pub const fn seconds(value: f32) -> Self {
        Self {
            value,
            unit: TimeUnit::Seconds,
        }
    }

    /// A time in milliseconds.
    #[inline]
    pub const fn millis(value: f32) -> Self {
        Self {
            value,
            unit: TimeUnit::Milliseconds,
        }
    }

    /// This time expressed in milliseconds.
    pub fn as_millis(self) -> f32 {
        match self.unit {
            TimeUnit::Seconds => self.value * MILLIS_PER_SECOND,
            TimeUnit::Milliseconds => self.value,
        }
    }

    /// This time expressed in seconds.
    pub fn as_seconds(self) -> f32 {
        match self.unit {
            TimeUnit::Seconds => self.value,
            TimeUnit::Milliseconds => self.value / MILLIS_PER_SECOND,
        }
    }
}

impl ToCss for Time {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        write!(dest, "{}{}", self.value, self.unit.as_str())
    }
}

/// Whether a unitless <number> may stand in for a <time>.
///
/// CSS itself never allows this, but legacy content relies on `0` in
/// `transition` shorthands, so the behavior is a grammar switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnitlessTime {
    /// Numbers never convert to time.
    Reject,
    /// Only the number `0` converts, to `0s`.
    #[default]
    ZeroOnly,
    /// Any number converts, read as seconds.
    Seconds,
}

impl UnitlessTime {
    /// Look up a policy by name: `reject`, `zero` or `seconds` (ASCII case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match_ignore_ascii_case! { name.trim(),
            "reject" => Some(Self::Reject),
            "zero" => Some(Self::ZeroOnly),
            "seconds" => Some(Self::Seconds),
            _ => None,
        }
    }

    /// Convert a unitless number to a time under this policy.
    pub fn convert(self, number: f32) -> Option<Time> {
        match self {
            Self::Reject => None,
            Self::ZeroOnly => (number == 0.0).then_some(Time::ZERO),
            Self::Seconds => number.is_finite().then_some(Time::seconds(number)),
        }
    }
}
