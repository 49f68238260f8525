use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DumpError;
use crate::generator::encoding::Encoding;
use crate::generator::literal::LiteralContext;

/// Everything read from the source cluster for one dump run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Source server version, e.g. `90605`.
    pub server_version: u32,
    /// Client encoding of the session the rows were read with.
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// Value of `standard_conforming_strings` on the source.
    #[serde(default)]
    pub standard_conforming_strings: bool,
    /// Encoding and locale of `template0`, when it could be read.
    #[serde(default)]
    pub template0: Option<DatabaseDefaults>,
    /// Databases that accept connections.
    #[serde(default)]
    pub databases: Vec<DatabaseRow>,
    /// Other objects whose ACLs should be replayed.
    #[serde(default)]
    pub objects: Vec<ObjectRow>,
}

/// Installation-wide defaults for new databases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseDefaults {
    /// Default encoding name.
    #[serde(default)]
    pub encoding: Option<String>,
    /// Default `LC_COLLATE`.
    #[serde(default)]
    pub collate: Option<String>,
    /// Default `LC_CTYPE`.
    #[serde(default)]
    pub ctype: Option<String>,
}

/// One row of `pg_database`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRow {
    /// Database name, unquoted.
    pub name: String,
    /// Owner role name, unquoted; empty when unknown.
    #[serde(default)]
    pub owner: String,
    /// Encoding name.
    #[serde(default)]
    pub encoding: String,
    /// `LC_COLLATE` setting.
    #[serde(default)]
    pub collate: String,
    /// `LC_CTYPE` setting.
    #[serde(default)]
    pub ctype: String,
    /// Whether the database is marked as a template.
    #[serde(default)]
    pub is_template: bool,
    /// Raw `datacl` text; empty for default privileges.
    #[serde(default)]
    pub acl: String,
    /// Connection limit, `-1` for unlimited.
    #[serde(default = "unlimited")]
    pub connection_limit: i32,
    /// Default tablespace name.
    #[serde(default = "default_tablespace")]
    pub tablespace: String,
    /// Per-database settings as `variable=value` entries.
    #[serde(default)]
    pub config: Vec<String>,
}

/// Any other object carrying an ACL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRow {
    /// Object type tag, e.g. `TABLE` or `FOREIGN DATA WRAPPER`.
    pub object_type: String,
    /// Object name, already quoted and qualified.
    pub name: String,
    /// Column name for column ACLs, already quoted.
    #[serde(default)]
    pub subname: Option<String>,
    /// Raw ACL text.
    #[serde(default)]
    pub acl: String,
    /// Owner role name, unquoted.
    #[serde(default)]
    pub owner: Option<String>,
    /// Text prepended to every GRANT and REVOKE.
    #[serde(default)]
    pub prefix: String,
}

fn default_encoding() -> String {
    "UTF8".to_string()
}

fn unlimited() -> i32 {
    -1
}

fn default_tablespace() -> String {
    "pg_default".to_string()
}

impl CatalogSnapshot {
    /// Parse a snapshot from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, DumpError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file.
    pub fn from_path(path: &Path) -> Result<Self, DumpError> {
        let json = std::fs::read_to_string(path).map_err(|source| DumpError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Client encoding the source session used.
    pub fn client_encoding(&self) -> Result<Encoding, DumpError> {
        self.encoding.parse()
    }

    /// Literal quoting rules for the session the snapshot was taken with.
    ///
    /// JSON text is always UTF-8, so the session encoding is only checked
    /// here and literals are built from the decoded text.
    pub fn literal_context(&self) -> Result<LiteralContext, DumpError> {
        self.client_encoding()?;
        Ok(LiteralContext {
            std_strings: self.standard_conforming_strings,
            server_version: self.server_version,
        })
    }
}
