//! CSS Transitions Module Level 1: Implicit transitions between computed values.
//! W3C: <https://www.w3.org/TR/css-transitions-1/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the W3C module's table of contents.
pub mod chapter_2_1_transition_property;
pub mod chapter_2_5_transition_shorthand;

pub use chapter_2_1_transition_property::TransitionTarget;
pub use chapter_2_5_transition_shorthand::{Transition, TransitionProperty};
