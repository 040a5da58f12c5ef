//! CSS Values & Units Level 3: §6 Dimensions (Lengths subset)
//! W3C: <https://www.w3.org/TR/css-values-3/#lengths>

use core::fmt;
use cssparser::{ToCss, match_ignore_ascii_case};

/// Supported subset of CSS <length> units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Pixels,
    Ems,
    RootEms,
    ViewportWidth,
    ViewportHeight,
}

impl LengthUnit {
    /// Look up a unit by its CSS suffix (ASCII case-insensitive).
    pub fn from_suffix(unit: &str) -> Option<Self> {
        match_ignore_ascii_case! { unit,
            "px" => Some(Self::Pixels),
            "em" => Some(Self::Ems),
            "rem" => Some(Self::RootEms),
            "vw" => Some(Self::ViewportWidth),
            "vh" => Some(Self::ViewportHeight),
            _ => None,
        }
    }

    /// The CSS suffix for this unit.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pixels => "px",
            Self::Ems => "em",
            Self::RootEms => "rem",
            Self::ViewportWidth => "vw",
            Self::ViewportHeight => "vh",
        }
    }
}

/// A CSS <length> value with unit.
///
/// Lengths are carried as written; resolving them to pixels is the layout engine's job.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    /// A length in CSS pixels.
    #[inline]
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Pixels,
        }
    }

    /// A length in ems.
    #[inline]
    pub const fn em(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Ems,
        }
    }
}

impl ToCss for Length {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        write!(dest, "{}{}", self.value, self.unit.as_str())
    }
}
