use std::fmt;

use tracing::debug;

use crate::error::AclError;
use crate::generator::quote::quote_identifier;
use crate::parser::acl_item::{parse_acl_item, Grantee};
use crate::parser::array::parse_pg_array;
use crate::privileges::mapper::{map_privileges, GrantSet};
use crate::privileges::object_type::ObjectType;
use crate::privileges::version::DATABASE_CONNECT;

/// One catalog object whose ACL should be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AclObject<'a> {
    /// Kind of object; selects the privilege vocabulary.
    pub object_type: ObjectType,
    /// Object name, already quoted/qualified for SQL output.
    pub name: &'a str,
    /// Column name for column-level ACLs, already quoted.
    pub subname: Option<&'a str>,
    /// Raw ACL array text; empty when the object has default privileges.
    pub acl: &'a str,
    /// Owner role; `None` or empty when unknown.
    pub owner: Option<&'a str>,
    /// Text prepended to every GRANT and REVOKE.
    pub prefix: &'a str,
    /// Version of the server the ACL was read from.
    pub server_version: u32,
}

/// Statements reconstructing one object's ACL.
///
/// Owner and PUBLIC baseline statements must run before the rest: other
/// grants may be replayed under the grantor's identity and rely on the
/// owner's privileges already being in their final state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconstructedSql {
    /// Baseline revoke, legacy defaults and owner statements.
    pub owner_stream: String,
    /// Statements for every other grantee.
    pub other_stream: String,
}

impl ReconstructedSql {
    /// True when nothing needs to be replayed.
    pub fn is_empty(&self) -> bool {
        self.owner_stream.is_empty() && self.other_stream.is_empty()
    }

    /// Final script text, owner statements first.
    pub fn into_sql(self) -> String {
        let mut sql = self.owner_stream;
        sql.push_str(&self.other_stream);
        sql
    }
}

impl fmt::Display for ReconstructedSql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.owner_stream)?;
        f.write_str(&self.other_stream)
    }
}

/// Rebuild the GRANT/REVOKE statements that reproduce `object`'s ACL.
///
/// An empty ACL means the object still has its built-in defaults and
/// yields no statements. Any parse failure aborts the whole object.
pub fn reconstruct_acl(object: &AclObject<'_>) -> Result<ReconstructedSql, AclError> {
    let mut out = ReconstructedSql::default();
    if object.acl.is_empty() {
        return Ok(out);
    }

    let owner = object.owner.filter(|owner| !owner.is_empty());
    let raw_items = parse_pg_array(object.acl)?;
    let kind = object.object_type.keyword();

    debug!(
        object_type = kind,
        name = object.name,
        items = raw_items.len(),
        "reconstructing ACL"
    );

    // Start from nothing so the destination's own defaults do not leak in.
    push_revoke_all(&mut out.owner_stream, object, "PUBLIC");

    // REVOKE ALL also drops CONNECT, which older sources granted implicitly.
    if object.object_type == ObjectType::Database && object.server_version < DATABASE_CONNECT {
        out.owner_stream.push_str(&format!(
            "{}GRANT CONNECT ON {kind} {} TO PUBLIC;\n",
            object.prefix, object.name
        ));
    }

    let mut found_owner_privileges = false;
    for raw in &raw_items {
        let item = parse_acl_item(raw)?;
        let grants = map_privileges(
            &item,
            object.object_type,
            object.server_version,
            object.subname,
        );
        if grants.is_empty() {
            continue;
        }

        let grantor = item.grantor.as_deref().or(owner);
        match owner {
            Some(owner) if item.grantee == owner && grantor == Some(owner) => {
                found_owner_privileges = true;
                push_owner_block(&mut out.owner_stream, object, owner, &grants);
            }
            _ => push_grantee_block(
                &mut out.other_stream,
                object,
                item.grantee(),
                grantor,
                owner,
                &grants,
            ),
        }
    }

    // No owner entry means the owner revoked their own privileges.
    if !found_owner_privileges {
        if let Some(owner) = owner {
            push_revoke_all(&mut out.owner_stream, object, &quote_identifier(owner));
        }
    }

    debug!(
        name = object.name,
        owner_statements = out.owner_stream.lines().count(),
        other_statements = out.other_stream.lines().count(),
        "ACL reconstructed"
    );
    Ok(out)
}

/// Append the statements for `object` to `sql`.
///
/// On error `sql` is left untouched.
pub fn build_acl_commands(object: &AclObject<'_>, sql: &mut String) -> Result<(), AclError> {
    let rebuilt = reconstruct_acl(object)?;
    sql.push_str(&rebuilt.owner_stream);
    sql.push_str(&rebuilt.other_stream);
    Ok(())
}

fn push_revoke_all(stream: &mut String, object: &AclObject<'_>, from: &str) {
    stream.push_str(object.prefix);
    stream.push_str("REVOKE ALL");
    if let Some(subname) = object.subname {
        stream.push_str(&format!("({subname})"));
    }
    stream.push_str(&format!(
        " ON {} {} FROM {from};\n",
        object.object_type.keyword(),
        object.name
    ));
}

fn push_grant(stream: &mut String, object: &AclObject<'_>, privileges: &str, to: &str, wgo: bool) {
    stream.push_str(&format!(
        "{}GRANT {privileges} ON {} {} TO {to}{};\n",
        object.prefix,
        object.object_type.keyword(),
        object.name,
        if wgo { " WITH GRANT OPTION" } else { "" }
    ));
}

fn push_owner_block(stream: &mut String, object: &AclObject<'_>, owner: &str, grants: &GrantSet) {
    if grants.is_owner_default(object.server_version, object.subname) {
        return;
    }

    let to = quote_identifier(owner);
    push_revoke_all(stream, object, &to);
    if !grants.privileges.is_empty() {
        push_grant(stream, object, &grants.privileges.render(object.subname), &to, false);
    }
    if !grants.grantable.is_empty() {
        push_grant(stream, object, &grants.grantable.render(object.subname), &to, true);
    }
}

fn push_grantee_block(
    stream: &mut String,
    object: &AclObject<'_>,
    grantee: Grantee<'_>,
    grantor: Option<&str>,
    owner: Option<&str>,
    grants: &GrantSet,
) {
    // Grants made by someone other than the owner are replayed as that role.
    let impersonate = grantor.filter(|grantor| owner != Some(*grantor));
    if let Some(grantor) = impersonate {
        stream.push_str(&format!(
            "SET SESSION AUTHORIZATION {};\n",
            quote_identifier(grantor)
        ));
    }

    let to = match grantee {
        Grantee::Public => "PUBLIC".to_string(),
        Grantee::Group(group) => format!("GROUP {}", quote_identifier(group)),
        Grantee::Role(role) => quote_identifier(role),
    };
    if !grants.privileges.is_empty() {
        push_grant(stream, object, &grants.privileges.render(object.subname), &to, false);
    }
    if !grants.grantable.is_empty() {
        push_grant(stream, object, &grants.grantable.render(object.subname), &to, true);
    }

    if impersonate.is_some() {
        stream.push_str("RESET SESSION AUTHORIZATION;\n");
    }
}
