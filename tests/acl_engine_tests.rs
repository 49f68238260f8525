mod support;

use pg_dumpacl::error::AclError;
use pg_dumpacl::generator::acl_commands::{build_acl_commands, reconstruct_acl};
use pg_dumpacl::privileges::object_type::ObjectType;
use support::{object, rebuild};

#[test]
fn public_and_grant_option_grants_on_table() {
    let sql = rebuild(&object(ObjectType::Table, "t", "{=r/alice,bob=a*/alice}"));
    insta::assert_snapshot!(sql, @r"
    REVOKE ALL ON TABLE t FROM PUBLIC;
    REVOKE ALL ON TABLE t FROM alice;
    GRANT SELECT ON TABLE t TO PUBLIC;
    GRANT INSERT ON TABLE t TO bob WITH GRANT OPTION;
    ");
}

#[test]
fn owner_statements_precede_other_grantees() {
    let sql = rebuild(&object(
        ObjectType::Table,
        "t",
        "{bob=r/alice,alice=arwdDxt/alice}",
    ));
    insta::assert_snapshot!(sql, @r"
    REVOKE ALL ON TABLE t FROM PUBLIC;
    REVOKE ALL ON TABLE t FROM alice;
    GRANT ALL ON TABLE t TO alice;
    GRANT SELECT ON TABLE t TO bob;
    ");
}

#[test]
fn owner_with_partial_grant_options_gets_both_grants() {
    let sql = rebuild(&object(ObjectType::Table, "t", "{alice=r*w/alice}"));
    insta::assert_snapshot!(sql, @r"
    REVOKE ALL ON TABLE t FROM PUBLIC;
    REVOKE ALL ON TABLE t FROM alice;
    GRANT UPDATE ON TABLE t TO alice;
    GRANT SELECT ON TABLE t TO alice WITH GRANT OPTION;
    ");
}

#[test]
fn group_grantee_with_grant_options() {
    let sql = rebuild(&object(
        ObjectType::Sequence,
        "seq",
        r#"{"group staff=U*r/alice"}"#,
    ));
    insta::assert_snapshot!(sql, @r"
    REVOKE ALL ON SEQUENCE seq FROM PUBLIC;
    REVOKE ALL ON SEQUENCE seq FROM alice;
    GRANT SELECT ON SEQUENCE seq TO GROUP staff;
    GRANT USAGE ON SEQUENCE seq TO GROUP staff WITH GRANT OPTION;
    ");
}

#[test]
fn grants_by_other_roles_are_replayed_as_that_role() {
    let sql = rebuild(&object(
        ObjectType::Schema,
        "app",
        "{alice=U*C*/alice,bob=U*/alice,carol=U/bob}",
    ));
    insta::assert_snapshot!(sql, @r"
    REVOKE ALL ON SCHEMA app FROM PUBLIC;
    GRANT USAGE ON SCHEMA app TO bob WITH GRANT OPTION;
    SET SESSION AUTHORIZATION bob;
    GRANT USAGE ON SCHEMA app TO carol;
    RESET SESSION AUTHORIZATION;
    ");
}

#[test]
fn legacy_database_keeps_public_connect() {
    let mut db = object(ObjectType::Database, "db", "{=T/alice,alice=CT/alice}");
    db.server_version = 80100;
    insta::assert_snapshot!(rebuild(&db), @r"
    REVOKE ALL ON DATABASE db FROM PUBLIC;
    GRANT CONNECT ON DATABASE db TO PUBLIC;
    REVOKE ALL ON DATABASE db FROM alice;
    GRANT CREATE,TEMPORARY ON DATABASE db TO alice;
    GRANT TEMPORARY ON DATABASE db TO PUBLIC;
    ");
}

#[test]
fn current_database_has_no_connect_regrant() {
    let sql = rebuild(&object(ObjectType::Database, "db", "{alice=C*T*c*/alice}"));
    assert_eq!(sql, "REVOKE ALL ON DATABASE db FROM PUBLIC;\n");
}

#[test]
fn column_grants_carry_the_column_everywhere() {
    let mut column = object(ObjectType::Table, "public.orders", "{bob=rw*/alice}");
    column.subname = Some("price");
    insta::assert_snapshot!(rebuild(&column), @r"
    REVOKE ALL(price) ON TABLE public.orders FROM PUBLIC;
    REVOKE ALL(price) ON TABLE public.orders FROM alice;
    GRANT SELECT(price) ON TABLE public.orders TO bob;
    GRANT UPDATE(price) ON TABLE public.orders TO bob WITH GRANT OPTION;
    ");
}

#[test]
fn groups_and_quoted_roles() {
    let sql = rebuild(&object(
        ObjectType::Sequence,
        "seq",
        r#"{"group staff=U/alice","\"Sales Team\"=r/alice"}"#,
    ));
    insta::assert_snapshot!(sql, @r#"
    REVOKE ALL ON SEQUENCE seq FROM PUBLIC;
    REVOKE ALL ON SEQUENCE seq FROM alice;
    GRANT USAGE ON SEQUENCE seq TO GROUP staff;
    GRANT SELECT ON SEQUENCE seq TO "Sales Team";
    "#);
}

#[test]
fn prefix_applies_to_grants_and_revokes_only() {
    let mut function = object(ObjectType::Function, "f()", "{=X/carol}");
    function.prefix = "/* acl */ ";
    insta::assert_snapshot!(rebuild(&function), @r"
    /* acl */ REVOKE ALL ON FUNCTION f() FROM PUBLIC;
    /* acl */ REVOKE ALL ON FUNCTION f() FROM alice;
    SET SESSION AUTHORIZATION carol;
    /* acl */ GRANT ALL ON FUNCTION f() TO PUBLIC;
    RESET SESSION AUTHORIZATION;
    ");
}

#[test]
fn pre_grant_option_servers() {
    let mut table = object(ObjectType::Table, "t", "{alice=arw/alice,bob=r*w/alice}");
    table.server_version = 70100;
    assert_eq!(
        rebuild(&table),
        "REVOKE ALL ON TABLE t FROM PUBLIC;\nGRANT SELECT,UPDATE,DELETE ON TABLE t TO bob;\n"
    );
}

#[test]
fn output_is_deterministic() {
    let table = object(ObjectType::Table, "t", "{=r/alice,bob=a*/carol,alice=r/alice}");
    assert_eq!(rebuild(&table), rebuild(&table));
}

#[test]
fn malformed_acls_produce_no_output() {
    for acl in ["alice=r/alice", "{alice=r/alice", "{\"alice=r/alice}", "{alice=r/alice}x"] {
        let mut sql = String::new();
        let result = build_acl_commands(&object(ObjectType::Table, "t", acl), &mut sql);
        assert!(
            matches!(result, Err(AclError::Decode { .. })),
            "expected decode failure for {acl}, got {result:?}"
        );
        assert!(sql.is_empty());
    }

    let result = reconstruct_acl(&object(ObjectType::Table, "t", "{alice}"));
    assert!(matches!(result, Err(AclError::ItemSyntax { .. })));
}
