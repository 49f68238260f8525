#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use pg_dumpacl::catalog::snapshot::CatalogSnapshot;
use pg_dumpacl::generator::acl_commands::{reconstruct_acl, AclObject};
use pg_dumpacl::privileges::object_type::ObjectType;

pub(crate) const MODERN: u32 = 150004;

pub(crate) fn fixture_path(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(format!("{fixture}.json"))
}

pub(crate) fn load_snapshot(fixture: &str) -> CatalogSnapshot {
    let json = std::fs::read_to_string(fixture_path(fixture)).expect("fixture should be readable");
    CatalogSnapshot::from_json(&json).expect("fixture snapshot should parse")
}

/// ACL object with the defaults most scenarios share.
pub(crate) fn object<'a>(object_type: ObjectType, name: &'a str, acl: &'a str) -> AclObject<'a> {
    AclObject {
        object_type,
        name,
        subname: None,
        acl,
        owner: Some("alice"),
        prefix: "",
        server_version: MODERN,
    }
}

pub(crate) fn rebuild(object: &AclObject<'_>) -> String {
    reconstruct_acl(object)
        .expect("ACL should reconstruct")
        .into_sql()
}

pub(crate) fn unique_temp_file(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{nanos}.sql"))
}
