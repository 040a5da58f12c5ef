//! CSS Easing Functions Level 1: Timing functions for transitions and animations.
//! W3C: <https://www.w3.org/TR/css-easing-1/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the W3C module's table of contents.
pub mod chapter_2_easing_functions;

pub use chapter_2_easing_functions::{StepPosition, TimingFunction};
