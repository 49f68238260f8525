use std::fmt;

use tracing::{debug, warn};

use crate::catalog::snapshot::{CatalogSnapshot, DatabaseRow, ObjectRow};
use crate::error::{AclError, DumpError};
use crate::generator::acl_commands::{build_acl_commands, AclObject};
use crate::generator::database::{create_database_command, database_config_commands};
use crate::generator::quote::quote_identifier;
use crate::privileges::object_type::ObjectType;
use crate::privileges::version::DATABASE_CONFIG;

const BANNER: &str = "--\n-- Database creation\n--\n\n";
const SECTION_END: &str = "\n\n";

/// Which databases of the snapshot to dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseSelection {
    /// Every database, in name order.
    All,
    /// A single database by its unquoted name.
    Named(String),
}

/// What to do when one object's ACL cannot be reconstructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the whole dump.
    #[default]
    Halt,
    /// Leave the object out, log a warning and carry on.
    Skip,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Halt => write!(f, "halt"),
            ErrorPolicy::Skip => write!(f, "skip"),
        }
    }
}

impl std::str::FromStr for ErrorPolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "halt" => Ok(ErrorPolicy::Halt),
            "skip" => Ok(ErrorPolicy::Skip),
            _ => Err(format!("Invalid error policy: {s}")),
        }
    }
}

/// Knobs of a dump run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    /// Databases to include.
    pub selection: DatabaseSelection,
    /// Reaction to malformed ACLs.
    pub error_policy: ErrorPolicy,
    /// Also replay the ACLs of the snapshot's non-database objects.
    pub include_objects: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            selection: DatabaseSelection::All,
            error_policy: ErrorPolicy::Halt,
            include_objects: false,
        }
    }
}

/// Result of a dump run.
#[derive(Debug, Default)]
pub struct DumpReport {
    /// The SQL script.
    pub script: String,
    /// Objects left out under [`ErrorPolicy::Skip`].
    pub skipped: Vec<DumpError>,
}

/// Build the full script for `snapshot`.
pub fn dump(snapshot: &CatalogSnapshot, options: &DumpOptions) -> Result<DumpReport, DumpError> {
    let ctx = snapshot.literal_context()?;
    let databases = select_databases(snapshot, &options.selection)?;
    let mut report = DumpReport::default();

    report.script.push_str(BANNER);
    for row in databases {
        let mut block = create_database_command(row, snapshot.template0.as_ref(), &ctx);
        if let Err(err) = database_acl(row, snapshot.server_version, &mut block) {
            record_failure(options.error_policy, err, &mut report)?;
            continue;
        }
        if snapshot.server_version >= DATABASE_CONFIG {
            block.push_str(&database_config_commands(row, &ctx));
        }
        debug!(database = %row.name, bytes = block.len(), "database dumped");
        report.script.push_str(&block);
    }
    report.script.push_str(SECTION_END);

    if options.include_objects {
        for object in &snapshot.objects {
            if let Err(err) = object_acl(object, snapshot.server_version, &mut report.script) {
                record_failure(options.error_policy, err, &mut report)?;
            }
        }
    }

    Ok(report)
}

fn select_databases<'a>(
    snapshot: &'a CatalogSnapshot,
    selection: &DatabaseSelection,
) -> Result<Vec<&'a DatabaseRow>, DumpError> {
    let mut rows: Vec<&DatabaseRow> = match selection {
        DatabaseSelection::All => snapshot.databases.iter().collect(),
        DatabaseSelection::Named(name) => snapshot
            .databases
            .iter()
            .filter(|row| &row.name == name)
            .collect(),
    };
    if let DatabaseSelection::Named(name) = selection {
        if rows.is_empty() {
            return Err(DumpError::DatabaseNotFound(name.clone()));
        }
    }
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(rows)
}

fn database_acl(row: &DatabaseRow, server_version: u32, sql: &mut String) -> Result<(), DumpError> {
    let name = quote_identifier(&row.name);
    let object = AclObject {
        object_type: ObjectType::Database,
        name: &name,
        subname: None,
        acl: &row.acl,
        owner: Some(row.owner.as_str()),
        prefix: "",
        server_version,
    };
    build_acl_commands(&object, sql).map_err(|source| DumpError::Acl {
        kind: ObjectType::Database.keyword().to_string(),
        object: name.clone(),
        acl: row.acl.clone(),
        source,
    })
}

fn object_acl(row: &ObjectRow, server_version: u32, sql: &mut String) -> Result<(), DumpError> {
    let failure = |source: AclError| DumpError::Acl {
        kind: row.object_type.clone(),
        object: row.name.clone(),
        acl: row.acl.clone(),
        source,
    };
    let object_type = row.object_type.parse::<ObjectType>().map_err(failure)?;
    let object = AclObject {
        object_type,
        name: &row.name,
        subname: row.subname.as_deref(),
        acl: &row.acl,
        owner: row.owner.as_deref(),
        prefix: &row.prefix,
        server_version,
    };
    build_acl_commands(&object, sql).map_err(failure)
}

fn record_failure(
    policy: ErrorPolicy,
    err: DumpError,
    report: &mut DumpReport,
) -> Result<(), DumpError> {
    match policy {
        ErrorPolicy::Halt => Err(err),
        ErrorPolicy::Skip => {
            warn!(error = %err, "skipping object");
            report.skipped.push(err);
            Ok(())
        }
    }
}
