//! CSS Transitions Level 1: §2.5 The `transition` Shorthand Property
//! W3C: <https://www.w3.org/TR/css-transitions-1/#transition-shorthand-property>
//!
//! `none | <single-transition>#` where
//! `<single-transition> = <property> || <time> || <easing-function> || <time>`.
//! Components may appear in any order and are told apart by type; the first
//! time is always the duration and the second the delay.

use crate::TransitionTarget;
use core::fmt;
use css_easing::TimingFunction;
use css_values_units::{
    CssValue, GrammarConfig, Property, Time, UnitlessTime, ValueList, log_accepted, log_rejected,
};
use cssparser::ToCss;
use log::trace;

/// One fully populated transition.
///
/// Omitted components take their initial values: `0s` delay and duration,
/// `ease` timing and `all` as the target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    pub delay: Time,
    pub duration: Time,
    pub timing: TimingFunction,
    pub target: TransitionTarget,
}

impl ToCss for Transition {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        self.target.to_css(dest)?;
        dest.write_char(' ')?;
        self.duration.to_css(dest)?;
        dest.write_char(' ')?;
        self.timing.to_css(dest)?;
        dest.write_char(' ')?;
        self.delay.to_css(dest)
    }
}

/// Components collected while scanning one space-separated group.
/// Each slot is filled at most once.
#[derive(Default)]
struct Slots {
    delay: Option<Time>,
    duration: Option<Time>,
    timing: Option<TimingFunction>,
    target: Option<TransitionTarget>,
}

impl Slots {
    /// Put `token` into the first free slot that accepts its type.
    ///
    /// Returns `false` when no slot takes it, including a third time value.
    fn assign(&mut self, token: &CssValue, unitless_time: UnitlessTime) -> bool {
        if self.timing.is_none()
            && let Some(function) = token.as_timing_function()
        {
            self.timing = Some(function);
            return true;
        }
        if self.target.is_none()
            && let Some(ident) = token.as_identifier()
        {
            self.target = Some(TransitionTarget::from_ident(ident));
            return true;
        }
        let Some(time) = token.as_time(unitless_time) else {
            return false;
        };
        if self.duration.is_none() {
            self.duration = Some(time);
        } else if self.delay.is_none() {
            self.delay = Some(time);
        } else {
            return false;
        }
        true
    }

    /// Build the record, defaulting unfilled slots.
    fn finish(self) -> Transition {
        Transition {
            delay: self.delay.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            timing: self.timing.unwrap_or_default(),
            target: self.target.unwrap_or_default(),
        }
    }
}

/// Parse a lone value as a complete transition: a timing function, a target
/// property or a duration.
fn parse_single(value: &CssValue, unitless_time: UnitlessTime) -> Option<Transition> {
    if let Some(timing) = value.as_timing_function() {
        return Some(Transition {
            timing,
            ..Transition::default()
        });
    }
    if let Some(ident) = value.as_identifier() {
        return Some(Transition {
            target: TransitionTarget::from_ident(ident),
            ..Transition::default()
        });
    }
    value
        .as_time(unitless_time)
        .map(|duration| Transition {
            duration,
            ..Transition::default()
        })
}

/// Parse one space-separated group by assigning each token to a slot.
fn parse_group(group: &[CssValue], unitless_time: UnitlessTime) -> Option<Transition> {
    match group {
        [] => None,
        [single] => parse_single(single, unitless_time),
        tokens => {
            let mut slots = Slots::default();
            let Some(position) = tokens
                .iter()
                .position(|token| !slots.assign(token, unitless_time))
            else {
                return Some(slots.finish());
            };
            trace!(
                "[transition] no free slot for token {position} of {}",
                tokens.len()
            );
            None
        }
    }
}

/// Parse every group of `list`; any failing group fails the whole list.
fn parse_list(list: &ValueList, unitless_time: UnitlessTime) -> Option<Vec<Transition>> {
    if list.is_empty() {
        return None;
    }
    list.groups()
        .map(|group| parse_group(group, unitless_time))
        .collect()
}

/// Interpreter state for the `transition` shorthand.
///
/// Holds the declared transitions in order; an empty list means `none`.
/// Equality compares the records only, not the grammar they were read with.
#[derive(Clone, Debug, Default)]
pub struct TransitionProperty {
    transitions: Vec<Transition>,
    grammar: GrammarConfig,
}

impl TransitionProperty {
    /// A property holding the initial value, `none`, with the default grammar.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A property holding `none` that interprets values with `grammar`.
    #[inline]
    pub fn with_grammar(grammar: GrammarConfig) -> Self {
        Self {
            transitions: Vec::new(),
            grammar,
        }
    }

    /// The grammar switches in effect.
    #[inline]
    pub const fn grammar(&self) -> GrammarConfig {
        self.grammar
    }

    /// The transitions in declaration order.
    #[inline]
    pub fn records(&self) -> &[Transition] {
        &self.transitions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Durations, index-aligned with the other projections.
    pub fn durations(&self) -> impl ExactSizeIterator<Item = Time> {
        self.transitions.iter().map(|transition| transition.duration)
    }

    /// Delays, index-aligned with the other projections.
    pub fn delays(&self) -> impl ExactSizeIterator<Item = Time> {
        self.transitions.iter().map(|transition| transition.delay)
    }

    /// Timing functions, index-aligned with the other projections.
    pub fn timing_functions(&self) -> impl ExactSizeIterator<Item = TimingFunction> {
        self.transitions.iter().map(|transition| transition.timing)
    }

    /// Targets, index-aligned with the other projections.
    pub fn targets(&self) -> impl ExactSizeIterator<Item = &TransitionTarget> {
        self.transitions.iter().map(|transition| &transition.target)
    }

    /// Target property names (`all` for every property), index-aligned with the
    /// other projections.
    pub fn property_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.transitions
            .iter()
            .map(|transition| transition.target.name())
    }

    /// The transition list `value` specifies, or `None` if it is not valid here.
    fn specified_transitions(&self, value: &CssValue) -> Option<Vec<Transition>> {
        let unitless_time = self.grammar.unitless_time;
        if value.is_keyword("none") {
            return Some(Vec::new());
        }
        if let Some(single) = parse_single(value, unitless_time) {
            return Some(vec![single]);
        }
        value
            .as_list()
            .and_then(|list| parse_list(list, unitless_time))
    }
}

impl PartialEq for TransitionProperty {
    fn eq(&self, other: &Self) -> bool {
        self.transitions == other.transitions
    }
}

impl Property for TransitionProperty {
    const NAME: &'static str = "transition";
    const INHERITED: bool = false;

    fn validate(&mut self, value: &CssValue) -> bool {
        if let Some(transitions) = self.specified_transitions(value) {
            self.transitions = transitions;
        } else if !value.is_inherit() {
            log_rejected(Self::NAME, value);
            return false;
        }
        // `inherit` is resolved by the cascade; the stored list stays as it is.
        log_accepted(Self::NAME, value);
        true
    }
}

impl ToCss for TransitionProperty {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        if self.transitions.is_empty() {
            return dest.write_str("none");
        }
        for (index, transition) in self.transitions.iter().enumerate() {
            if index > 0 {
                dest.write_str(", ")?;
            }
            transition.to_css(dest)?;
        }
        Ok(())
    }
}
