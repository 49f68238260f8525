use std::fmt;
use std::str::FromStr;

use crate::error::AclError;

/// A kind of catalog object whose ACL can be reconstructed.
///
/// The plural variants are used for `ALTER DEFAULT PRIVILEGES` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// Tables, views and materialized views.
    Table,
    /// Default privileges for tables.
    Tables,
    /// Sequences.
    Sequence,
    /// Default privileges for sequences.
    Sequences,
    /// Functions and procedures.
    Function,
    /// Default privileges for functions.
    Functions,
    /// Procedural languages.
    Language,
    /// Schemas.
    Schema,
    /// Databases.
    Database,
    /// Tablespaces.
    Tablespace,
    /// Types and domains.
    Type,
    /// Default privileges for types.
    Types,
    /// Foreign-data wrappers.
    ForeignDataWrapper,
    /// Foreign servers.
    ForeignServer,
    /// Foreign tables.
    ForeignTable,
    /// Large objects.
    LargeObject,
}

impl ObjectType {
    /// Every supported object type.
    pub const ALL: [ObjectType; 16] = [
        ObjectType::Table,
        ObjectType::Tables,
        ObjectType::Sequence,
        ObjectType::Sequences,
        ObjectType::Function,
        ObjectType::Functions,
        ObjectType::Language,
        ObjectType::Schema,
        ObjectType::Database,
        ObjectType::Tablespace,
        ObjectType::Type,
        ObjectType::Types,
        ObjectType::ForeignDataWrapper,
        ObjectType::ForeignServer,
        ObjectType::ForeignTable,
        ObjectType::LargeObject,
    ];

    /// SQL keyword used after `ON` in GRANT and REVOKE.
    pub fn keyword(self) -> &'static str {
        match self {
            ObjectType::Table => "TABLE",
            ObjectType::Tables => "TABLES",
            ObjectType::Sequence => "SEQUENCE",
            ObjectType::Sequences => "SEQUENCES",
            ObjectType::Function => "FUNCTION",
            ObjectType::Functions => "FUNCTIONS",
            ObjectType::Language => "LANGUAGE",
            ObjectType::Schema => "SCHEMA",
            ObjectType::Database => "DATABASE",
            ObjectType::Tablespace => "TABLESPACE",
            ObjectType::Type => "TYPE",
            ObjectType::Types => "TYPES",
            ObjectType::ForeignDataWrapper => "FOREIGN DATA WRAPPER",
            ObjectType::ForeignServer => "FOREIGN SERVER",
            ObjectType::ForeignTable => "FOREIGN TABLE",
            ObjectType::LargeObject => "LARGE OBJECT",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ObjectType {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.split_whitespace().collect::<Vec<_>>().join(" ");
        ObjectType::ALL
            .into_iter()
            .find(|object_type| object_type.keyword().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| AclError::UnsupportedObjectType(s.to_string()))
    }
}
