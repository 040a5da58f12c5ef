//! CSS Values and Units Module Level 3: Property definition syntax and unit types.
//! W3C: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the W3C module's table of contents.
// Each module links the section it implements.
pub mod chapter_3_identifiers;
pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;
pub mod chapter_7_time;
pub mod chapter_8_calc;

// Value model and property contract shared by the property crates.
pub mod component_value;
pub mod config;
pub mod property;

// Re-exports for ergonomic access from other crates.
pub use chapter_3_identifiers::Ident;
pub use chapter_4_numbers::Number;
pub use chapter_5_percentages::Percentage;
pub use chapter_6_dimensions::{Length, LengthUnit};
pub use chapter_7_time::{Time, TimeUnit, UnitlessTime};
pub use chapter_8_calc::CalcExpression;
pub use component_value::{CssValue, ValueList};
pub use config::GrammarConfig;
pub use property::{InvalidValueForProperty, Property, log_accepted, log_rejected};
