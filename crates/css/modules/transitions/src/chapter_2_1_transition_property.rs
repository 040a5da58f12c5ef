//! CSS Transitions Level 1: §2.1 The `transition-property` Property
//! W3C: <https://www.w3.org/TR/css-transitions-1/#transition-property-property>

use core::fmt;
use css_values_units::Ident;
use cssparser::ToCss;

/// The property a single transition applies to.
///
/// Names are not checked against the set of known properties here; unknown
/// names are kept so the list stays index-aligned with the other transition
/// longhands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionTarget {
    /// Every animatable property.
    #[default]
    All,
    Property(Ident),
}

impl TransitionTarget {
    /// Classify an identifier; `all` (any case) is the keyword, anything else a name.
    pub fn from_ident(ident: &Ident) -> Self {
        if ident.as_str().eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Property(ident.clone())
        }
    }

    /// The target as written, `all` for [`TransitionTarget::All`].
    pub fn name(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Property(ident) => ident.as_str(),
        }
    }
}

impl ToCss for TransitionTarget {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match self {
            Self::All => dest.write_str("all"),
            Self::Property(ident) => ident.to_css(dest),
        }
    }
}
