/// GRANT/REVOKE reconstruction for a single object's ACL.
pub mod acl_commands;
/// `CREATE DATABASE` and per-database configuration statements.
pub mod database;
/// Whole-script driver with selection and error policy.
pub mod dump;
/// Server encodings and their multibyte character widths.
pub mod encoding;
/// SQL string literal escaping.
pub mod literal;
/// Identifier quoting.
pub mod quote;
