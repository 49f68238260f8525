/// Maps the codes of one ACL item to SQL privilege keywords.
pub mod mapper;
/// Closed set of object types that carry ACLs.
pub mod object_type;
/// Server-version thresholds that change privilege semantics.
pub mod version;
/// Declarative table of privilege codes per object type.
pub mod vocabulary;
