//! Core engine: table model, parsing, key/symbol mapping and the two
//! workflows built on them.
//!
//! ## Module Structure
//!
//! - `table`: parsed `.strings` table with lossless rendering
//! - `parsers`: table parsers
//! - `symbol`: key to generated-symbol mapping and collision detection
//! - `diff`: baseline/target key comparison
//! - `scanner`: source tree usage scanning
//! - `prune`: backup-first removal of unused entries
//! - `error`: typed errors
//! - `location`: entry positions for reporting

pub mod diff;
pub mod error;
pub mod location;
pub mod parsers;
pub mod prune;
pub mod scanner;
pub mod symbol;
pub mod table;

pub use diff::{DiffResult, DiffedTarget, TargetDiff, diff, diff_targets};
pub use error::{LctError, LctResult, ParseError, ParseErrorKind};
pub use location::{EntryContext, EntryLocation};
pub use prune::{PruneOptions, PruneReport, prune};
pub use scanner::{ScanOptions, UsageKind, UsageReport, find_unused};
pub use symbol::{
    CollisionKind, SymbolCollision, SymbolName, find_collisions, key_to_symbol, symbol_tail,
};
pub use table::{ResourceEntry, ResourceTable, TableItem};
