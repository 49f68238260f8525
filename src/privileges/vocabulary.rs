use crate::privileges::object_type::ObjectType;
use crate::privileges::version::{SPLIT_UPDATE_DELETE, TRUNCATE};

/// One row of the privilege vocabulary: code `code` on any of
/// `object_types` means `keyword`, within a version window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivilegeRule {
    /// Object types the row applies to.
    pub object_types: &'static [ObjectType],
    /// ACL code character.
    pub code: char,
    /// SQL keyword(s) emitted for the code.
    pub keyword: &'static str,
    /// First server version where the row applies.
    pub min_version: u32,
    /// First server version where the row no longer applies.
    pub max_version: Option<u32>,
    /// Whether the privilege also exists on a single column.
    pub column_level: bool,
}

impl PrivilegeRule {
    const fn new(object_types: &'static [ObjectType], code: char, keyword: &'static str) -> Self {
        Self {
            object_types,
            code,
            keyword,
            min_version: 0,
            max_version: None,
            column_level: true,
        }
    }

    const fn since(mut self, version: u32) -> Self {
        self.min_version = version;
        self
    }

    const fn before(mut self, version: u32) -> Self {
        self.max_version = Some(version);
        self
    }

    const fn object_level_only(mut self) -> Self {
        self.column_level = false;
        self
    }

    /// Whether the row is in effect for this object, version and grant level.
    pub fn applies(&self, object_type: ObjectType, server_version: u32, on_column: bool) -> bool {
        self.object_types.contains(&object_type)
            && server_version >= self.min_version
            && self.max_version.map_or(true, |max| server_version < max)
            && (self.column_level || !on_column)
    }
}

const TABLES: &[ObjectType] = &[ObjectType::Table, ObjectType::Tables];
const SEQUENCES: &[ObjectType] = &[ObjectType::Sequence, ObjectType::Sequences];
const FUNCTIONS: &[ObjectType] = &[ObjectType::Function, ObjectType::Functions];
const TYPES: &[ObjectType] = &[ObjectType::Type, ObjectType::Types];

/// The complete vocabulary. Row order fixes the keyword order in emitted
/// statements.
pub static PRIVILEGE_RULES: &[PrivilegeRule] = &[
    PrivilegeRule::new(TABLES, 'r', "SELECT"),
    PrivilegeRule::new(TABLES, 'a', "INSERT"),
    PrivilegeRule::new(TABLES, 'x', "REFERENCES").since(SPLIT_UPDATE_DELETE),
    PrivilegeRule::new(TABLES, 'd', "DELETE")
        .since(SPLIT_UPDATE_DELETE)
        .object_level_only(),
    PrivilegeRule::new(TABLES, 't', "TRIGGER")
        .since(SPLIT_UPDATE_DELETE)
        .object_level_only(),
    PrivilegeRule::new(TABLES, 'D', "TRUNCATE")
        .since(TRUNCATE)
        .object_level_only(),
    PrivilegeRule::new(TABLES, 'w', "UPDATE").since(SPLIT_UPDATE_DELETE),
    // 7.0 and 7.1 used a single code for both.
    PrivilegeRule::new(TABLES, 'w', "UPDATE,DELETE").before(SPLIT_UPDATE_DELETE),
    PrivilegeRule::new(SEQUENCES, 'r', "SELECT"),
    PrivilegeRule::new(SEQUENCES, 'U', "USAGE"),
    PrivilegeRule::new(SEQUENCES, 'w', "UPDATE"),
    PrivilegeRule::new(FUNCTIONS, 'X', "EXECUTE"),
    PrivilegeRule::new(&[ObjectType::Language], 'U', "USAGE"),
    PrivilegeRule::new(&[ObjectType::Schema], 'C', "CREATE"),
    PrivilegeRule::new(&[ObjectType::Schema], 'U', "USAGE"),
    PrivilegeRule::new(&[ObjectType::Database], 'C', "CREATE"),
    PrivilegeRule::new(&[ObjectType::Database], 'c', "CONNECT"),
    PrivilegeRule::new(&[ObjectType::Database], 'T', "TEMPORARY"),
    PrivilegeRule::new(&[ObjectType::Tablespace], 'C', "CREATE"),
    PrivilegeRule::new(TYPES, 'U', "USAGE"),
    PrivilegeRule::new(&[ObjectType::ForeignDataWrapper], 'U', "USAGE"),
    PrivilegeRule::new(&[ObjectType::ForeignServer], 'U', "USAGE"),
    PrivilegeRule::new(&[ObjectType::ForeignTable], 'r', "SELECT"),
    PrivilegeRule::new(&[ObjectType::LargeObject], 'r', "SELECT"),
    PrivilegeRule::new(&[ObjectType::LargeObject], 'w', "UPDATE"),
];

/// Rows in effect for an object type at a server version, in table order.
/// `on_column` restricts the result to column-level privileges.
pub fn rules_for(
    object_type: ObjectType,
    server_version: u32,
    on_column: bool,
) -> impl Iterator<Item = &'static PrivilegeRule> {
    PRIVILEGE_RULES
        .iter()
        .filter(move |rule| rule.applies(object_type, server_version, on_column))
}
