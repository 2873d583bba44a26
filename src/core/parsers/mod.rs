//! Resource table parsers.
//!
//! - `strings`: Apple `.strings` key/value tables

pub mod strings;
