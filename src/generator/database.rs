use crate::catalog::snapshot::{DatabaseDefaults, DatabaseRow};
use crate::generator::literal::LiteralContext;
use crate::generator::quote::quote_identifier;

/// Databases every destination cluster already has.
const PREEXISTING_DATABASES: [&str; 2] = ["template1", "postgres"];

/// Settings whose values are lists and must be replayed unquoted.
const LIST_SETTINGS: [&str; 2] = ["DateStyle", "search_path"];

/// Build the `CREATE DATABASE` statement (and template flag) for `row`.
///
/// Returns an empty string for databases that exist on any cluster.
/// Encoding and locale are only spelled out when the installation default
/// is known and differs.
pub fn create_database_command(
    row: &DatabaseRow,
    defaults: Option<&DatabaseDefaults>,
    ctx: &LiteralContext,
) -> String {
    if PREEXISTING_DATABASES.contains(&row.name.as_str()) {
        return String::new();
    }

    let defaults = defaults.cloned().unwrap_or_default();
    let mut sql = format!(
        "CREATE DATABASE {} WITH TEMPLATE = template0",
        quote_identifier(&row.name)
    );

    if !row.owner.is_empty() {
        sql.push_str(" OWNER = ");
        sql.push_str(&quote_identifier(&row.owner));
    }

    let locale = [
        (" ENCODING = ", &row.encoding, &defaults.encoding),
        (" LC_COLLATE = ", &row.collate, &defaults.collate),
        (" LC_CTYPE = ", &row.ctype, &defaults.ctype),
    ];
    for (option, value, default) in locale {
        if default.as_ref().is_some_and(|default| default != value) {
            sql.push_str(option);
            ctx.append_literal(&mut sql, value);
        }
    }

    if row.tablespace != "pg_default" {
        sql.push_str(" TABLESPACE = ");
        sql.push_str(&quote_identifier(&row.tablespace));
    }
    if row.connection_limit != -1 {
        sql.push_str(&format!(" CONNECTION LIMIT = {}", row.connection_limit));
    }
    sql.push_str(";\n");

    if row.is_template {
        sql.push_str("UPDATE pg_catalog.pg_database SET datistemplate = 't' WHERE datname = ");
        ctx.append_literal(&mut sql, &row.name);
        sql.push_str(";\n");
    }
    sql
}

/// Turn one `variable=value` config entry of database `name` into an
/// `ALTER DATABASE ... SET` statement. Entries without an `=` yield `None`.
pub fn alter_config_command(item: &str, name: &str, ctx: &LiteralContext) -> Option<String> {
    let (variable, value) = item.split_once('=')?;

    let mut sql = format!(
        "ALTER DATABASE {} SET {} TO ",
        quote_identifier(name),
        quote_identifier(variable)
    );

    if LIST_SETTINGS
        .iter()
        .any(|setting| setting.eq_ignore_ascii_case(variable))
    {
        sql.push_str(value);
    } else {
        ctx.append_literal(&mut sql, value);
    }
    sql.push_str(";\n");
    Some(sql)
}

/// All `ALTER DATABASE ... SET` statements for `row`, in stored order.
pub fn database_config_commands(row: &DatabaseRow, ctx: &LiteralContext) -> String {
    row.config
        .iter()
        .filter_map(|item| alter_config_command(item, &row.name, ctx))
        .collect()
}
