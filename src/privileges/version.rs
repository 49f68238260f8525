//! Server versions are the integers reported by `server_version_num`,
//! e.g. `90605` for 9.6.5 or `110002` for 11.2.

/// `*` (WITH GRANT OPTION) markers are meaningful from 7.4 on.
pub const GRANT_OPTIONS: u32 = 70400;

/// 7.2 split the combined UPDATE/DELETE code and added REFERENCES and TRIGGER.
pub const SPLIT_UPDATE_DELETE: u32 = 70200;

/// TRUNCATE became a grantable table privilege in 8.4.
pub const TRUNCATE: u32 = 80400;

/// CONNECT on databases exists, and is granted to PUBLIC by default, since 8.2.
pub const DATABASE_CONNECT: u32 = 80200;

/// `E'...'` escape string syntax is accepted from 8.1 on.
pub const ESCAPE_STRING_SYNTAX: u32 = 80100;

/// Per-database configuration settings exist since 7.3.
pub const DATABASE_CONFIG: u32 = 70300;

/// Whether the server records grant options in ACLs.
pub fn supports_grant_options(server_version: u32) -> bool {
    server_version >= GRANT_OPTIONS
}
