/// Serde model of the catalog rows a dump is built from.
pub mod snapshot;
