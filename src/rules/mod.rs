//! Rule implementations for lct.
//!
//! Pure functions turning core results (diffs, usage reports, tables) into
//! issues. Each takes only the inputs it needs.
//!
//! ## Module Structure
//!
//! - `missing`: baseline keys absent from a target
//! - `extra`: target keys absent from the baseline
//! - `unused`: keys never referenced by the source tree
//! - `collision`: keys sharing a tail or a full symbol
//! - `helpers`: load failures as issues

pub mod collision;
pub mod extra;
pub mod helpers;
pub mod missing;
pub mod unused;

pub use helpers::load_error_issue;
