//! CSS Inline Layout Module Level 3: Line heights and inline box alignment.
//! W3C: <https://www.w3.org/TR/css-inline-3/>

#![forbid(unsafe_code)]

pub mod line_height;

pub use line_height::{LineHeight, LineHeightProperty};
