mod support;

use pg_dumpacl::catalog::snapshot::CatalogSnapshot;
use pg_dumpacl::error::DumpError;
use pg_dumpacl::generator::dump::{dump, DatabaseSelection, DumpOptions, ErrorPolicy};
use support::load_snapshot;

const CLUSTER_DATABASES: &str = "--\n-- Database creation\n--\n\n\
CREATE DATABASE \"Reports\" WITH TEMPLATE = template0 OWNER = carol;\n\
UPDATE pg_catalog.pg_database SET datistemplate = 't' WHERE datname = 'Reports';\n\
REVOKE ALL ON DATABASE \"Reports\" FROM PUBLIC;\n\
GRANT CONNECT ON DATABASE \"Reports\" TO PUBLIC;\n\
CREATE DATABASE sales WITH TEMPLATE = template0 OWNER = alice ENCODING = 'LATIN1' CONNECTION LIMIT = 20;\n\
REVOKE ALL ON DATABASE sales FROM PUBLIC;\n\
REVOKE ALL ON DATABASE sales FROM alice;\n\
GRANT ALL ON DATABASE sales TO alice;\n\
GRANT CONNECT,TEMPORARY ON DATABASE sales TO PUBLIC;\n\
GRANT CONNECT ON DATABASE sales TO bob;\n\
ALTER DATABASE sales SET search_path TO sales, public;\n\
ALTER DATABASE sales SET statement_timeout TO '30s';\n\
\n\n";

#[test]
fn full_cluster_dump() {
    let report = dump(&load_snapshot("cluster"), &DumpOptions::default()).unwrap();
    assert_eq!(report.script, CLUSTER_DATABASES);
    assert!(report.skipped.is_empty());
}

#[test]
fn object_acls_follow_the_database_section() {
    let options = DumpOptions {
        include_objects: true,
        ..DumpOptions::default()
    };
    let report = dump(&load_snapshot("cluster"), &options).unwrap();
    let objects = report
        .script
        .strip_prefix(CLUSTER_DATABASES)
        .expect("database section should come first");

    insta::assert_snapshot!(objects, @r"
    REVOKE ALL ON TABLE public.orders FROM PUBLIC;
    REVOKE ALL ON TABLE public.orders FROM alice;
    GRANT ALL ON TABLE public.orders TO alice;
    GRANT SELECT ON TABLE public.orders TO bob;
    SET SESSION AUTHORIZATION bob;
    GRANT UPDATE ON TABLE public.orders TO dave;
    RESET SESSION AUTHORIZATION;
    REVOKE ALL(price) ON TABLE public.orders FROM PUBLIC;
    REVOKE ALL(price) ON TABLE public.orders FROM alice;
    GRANT SELECT(price) ON TABLE public.orders TO bob;
    REVOKE ALL ON FUNCTION public.total(integer) FROM PUBLIC;
    REVOKE ALL ON FUNCTION public.total(integer) FROM alice;
    GRANT ALL ON FUNCTION public.total(integer) TO alice;
    GRANT ALL ON FUNCTION public.total(integer) TO PUBLIC;
    ");
}

#[test]
fn single_database_selection() {
    let options = DumpOptions {
        selection: DatabaseSelection::Named("Reports".to_string()),
        ..DumpOptions::default()
    };
    let report = dump(&load_snapshot("cluster"), &options).unwrap();
    assert!(report.script.contains("CREATE DATABASE \"Reports\""));
    assert!(!report.script.contains("sales"));
}

#[test]
fn builtin_database_keeps_acl_and_config() {
    let snapshot = CatalogSnapshot::from_json(
        r#"{"server_version": 90605, "databases": [{
            "name": "postgres", "owner": "postgres",
            "acl": "{=Tc/postgres,postgres=CTc/postgres}",
            "config": ["work_mem=4MB"]
        }]}"#,
    )
    .unwrap();
    let report = dump(&snapshot, &DumpOptions::default()).unwrap();
    insta::assert_snapshot!(report.script.trim(), @r"
    --
    -- Database creation
    --

    REVOKE ALL ON DATABASE postgres FROM PUBLIC;
    REVOKE ALL ON DATABASE postgres FROM postgres;
    GRANT ALL ON DATABASE postgres TO postgres;
    GRANT CONNECT,TEMPORARY ON DATABASE postgres TO PUBLIC;
    ALTER DATABASE postgres SET work_mem TO '4MB';
    ");
}

#[test]
fn halt_stops_at_the_first_bad_acl() {
    let err = dump(&load_snapshot("broken"), &DumpOptions::default()).unwrap_err();
    assert!(matches!(err, DumpError::Acl { ref object, .. } if object == "mangled"));
    assert_eq!(
        err.to_string(),
        "could not parse ACL list ({alice=CTc/alice) for DATABASE mangled"
    );
}

#[test]
fn skip_keeps_the_rest_of_the_script() {
    let options = DumpOptions {
        error_policy: ErrorPolicy::Skip,
        ..DumpOptions::default()
    };
    let report = dump(&load_snapshot("broken"), &options).unwrap();
    assert_eq!(
        report.script,
        "--\n-- Database creation\n--\n\n\
         CREATE DATABASE good WITH TEMPLATE = template0 OWNER = alice;\n\
         REVOKE ALL ON DATABASE good FROM PUBLIC;\n\
         GRANT CONNECT ON DATABASE good TO PUBLIC;\n\
         \n\n"
    );
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn backslash_settings_use_escape_strings_on_non_standard_servers() {
    let snapshot = CatalogSnapshot::from_json(
        r#"{"server_version": 80300, "standard_conforming_strings": false, "databases": [{
            "name": "postgres", "owner": "postgres",
            "config": ["lc_messages=C:\\msgs", "it's=o'clock"]
        }]}"#,
    )
    .unwrap();
    let report = dump(&snapshot, &DumpOptions::default()).unwrap();
    assert!(report
        .script
        .contains("ALTER DATABASE postgres SET lc_messages TO E'C:\\\\msgs';\n"));
    assert!(report
        .script
        .contains("ALTER DATABASE postgres SET \"it's\" TO 'o''clock';\n"));
}

#[test]
fn non_utf8_session_encoding_keeps_literals_intact() {
    let snapshot = CatalogSnapshot::from_json(
        r#"{"server_version": 90605, "encoding": "EUC_JP", "databases": [{
            "name": "postgres", "owner": "postgres",
            "config": ["application_name=café€"]
        }]}"#,
    )
    .unwrap();
    let report = dump(&snapshot, &DumpOptions::default()).unwrap();
    assert!(
        report
            .script
            .contains("ALTER DATABASE postgres SET application_name TO 'café€';\n"),
        "got:\n{}",
        report.script
    );
}
