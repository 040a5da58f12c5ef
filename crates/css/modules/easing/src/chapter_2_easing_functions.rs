//! CSS Easing Functions Level 1: §2 Easing Functions
//! W3C: <https://www.w3.org/TR/css-easing-1/#easing-functions>

use core::fmt;
use cssparser::{ToCss, match_ignore_ascii_case};

/// Step position for `steps()` (§2.3).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StepPosition {
    JumpStart,
    #[default]
    JumpEnd,
    JumpNone,
    JumpBoth,
    /// Legacy alias behaving like `jump-start`.
    Start,
    /// Legacy alias behaving like `jump-end`.
    End,
}

impl StepPosition {
    /// Look up a `<step-position>` keyword (ASCII case-insensitive).
    pub fn from_keyword(name: &str) -> Option<Self> {
        match_ignore_ascii_case! { name,
            "jump-start" => Some(Self::JumpStart),
            "jump-end" => Some(Self::JumpEnd),
            "jump-none" => Some(Self::JumpNone),
            "jump-both" => Some(Self::JumpBoth),
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            _ => None,
        }
    }

    /// The CSS keyword for this position.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JumpStart => "jump-start",
            Self::JumpEnd => "jump-end",
            Self::JumpNone => "jump-none",
            Self::JumpBoth => "jump-both",
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// A CSS `<easing-function>`.
///
/// Named curves are kept as their keyword rather than expanded to control
/// points so that serialization reproduces what the author wrote.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TimingFunction {
    /// §2.1 `linear`
    Linear,
    /// §2.2 `ease`, the initial value of `transition-timing-function`.
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// §2.2 `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// §2.3 `step-start`
    StepStart,
    /// §2.3 `step-end`
    StepEnd,
    /// §2.3 `steps(<integer>, <step-position>?)`
    Steps { count: u32, position: StepPosition },
}

impl TimingFunction {
    /// Map a named easing keyword to its curve (ASCII case-insensitive).
    ///
    /// Returns `None` for anything that is not one of the keyword forms, including
    /// identifiers that happen to name CSS properties.
    pub fn from_keyword(name: &str) -> Option<Self> {
        match_ignore_ascii_case! { name,
            "linear" => Some(Self::Linear),
            "ease" => Some(Self::Ease),
            "ease-in" => Some(Self::EaseIn),
            "ease-out" => Some(Self::EaseOut),
            "ease-in-out" => Some(Self::EaseInOut),
            "step-start" => Some(Self::StepStart),
            "step-end" => Some(Self::StepEnd),
            _ => None,
        }
    }

    /// Build a `cubic-bezier()` curve.
    ///
    /// Both x coordinates must lie in `[0, 1]` (§2.2); y coordinates may overshoot.
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Option<Self> {
        let finite = [x1, y1, x2, y2].iter().all(|coord| coord.is_finite());
        let x_in_range = (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2);
        (finite && x_in_range).then_some(Self::CubicBezier { x1, y1, x2, y2 })
    }

    /// Build a `steps()` function.
    ///
    /// The step count must be positive, and at least 2 for `jump-none` (§2.3).
    pub fn steps(count: u32, position: StepPosition) -> Option<Self> {
        let minimum = if position == StepPosition::JumpNone { 2 } else { 1 };
        (count >= minimum).then_some(Self::Steps { count, position })
    }

    /// Control points `[x1, y1, x2, y2]` for curves defined by a cubic Bézier.
    ///
    /// Returns `None` for step functions.
    pub const fn control_points(&self) -> Option<[f32; 4]> {
        match *self {
            Self::Linear => Some([0.0, 0.0, 1.0, 1.0]),
            Self::Ease => Some([0.25, 0.1, 0.25, 1.0]),
            Self::EaseIn => Some([0.42, 0.0, 1.0, 1.0]),
            Self::EaseOut => Some([0.0, 0.0, 0.58, 1.0]),
            Self::EaseInOut => Some([0.42, 0.0, 0.58, 1.0]),
            Self::CubicBezier { x1, y1, x2, y2 } => Some([x1, y1, x2, y2]),
            Self::StepStart | Self::StepEnd | Self::Steps { .. } => None,
        }
    }

    /// Whether this is a step easing function (`step-start`, `step-end`, `steps()`).
    pub const fn is_step(&self) -> bool {
        matches!(self, Self::StepStart | Self::StepEnd | Self::Steps { .. })
    }
}

impl ToCss for TimingFunction {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match *self {
            Self::Linear => dest.write_str("linear"),
            Self::Ease => dest.write_str("ease"),
            Self::EaseIn => dest.write_str("ease-in"),
            Self::EaseOut => dest.write_str("ease-out"),
            Self::EaseInOut => dest.write_str("ease-in-out"),
            Self::StepStart => dest.write_str("step-start"),
            Self::StepEnd => dest.write_str("step-end"),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                write!(dest, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
            // `jump-end` is the default position and is omitted when serializing.
            Self::Steps {
                count,
                position: StepPosition::JumpEnd | StepPosition::End,
            } => write!(dest, "steps({count})"),
            Self::Steps { count, position } => {
                write!(dest, "steps({count}, {})", position.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_position_keywords_round_trip() {
        for position in [
            StepPosition::JumpStart,
            StepPosition::JumpEnd,
            StepPosition::JumpNone,
            StepPosition::JumpBoth,
            StepPosition::Start,
            StepPosition::End,
        ] {
            assert_eq!(StepPosition::from_keyword(position.as_str()), Some(position));
        }
        assert_eq!(StepPosition::from_keyword("middle"), None);
    }
}
