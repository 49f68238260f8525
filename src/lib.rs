//! Reconstruct PostgreSQL database definitions and ACLs as a replayable SQL script.
#![warn(missing_docs)]

/// Catalog snapshot consumed by the dump.
pub mod catalog;
/// Error types shared by the parser, engine and driver.
pub mod error;
/// SQL generation: ACL reconstruction, database statements and literals.
pub mod generator;
/// Script output.
pub mod output;
/// ACL array and item parsing.
pub mod parser;
/// Privilege vocabulary, object types and server version gates.
pub mod privileges;
