//! lct - Localization consistency toolkit for `.strings` resource tables
//!
//! lct is a CLI tool and library that keeps Apple-style `.strings` tables in
//! sync: it reports keys missing from translated tables, and finds and prunes
//! keys that no source file references through SwiftGen-style generated
//! symbols or string literals.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Table parsing, key diffing, usage scanning and pruning
//! - `issues`: Issue type definitions and reporting
//! - `logging`: Diagnostic logging setup
//! - `rules`: Turn core results into reportable issues

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
pub mod rules;
