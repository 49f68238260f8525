/// ACL item grammar: `grantee=codes/grantor`.
pub mod acl_item;
/// Decoder for the external `{item,item,...}` array text.
pub mod array;
/// Scanner for possibly-quoted role names inside ACL items.
pub mod names;
