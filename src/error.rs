use std::path::PathBuf;

use thiserror::Error;

/// Why an ACL array literal could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    /// Input is shorter than `{}` or is not wrapped in braces.
    #[error("expected text of the form {{item,...}}")]
    MissingBraces,
    /// Input ended inside an item or a quoted segment.
    #[error("premature end of array text")]
    PrematureEnd,
    /// An unquoted `}` closed the array before the end of the text.
    #[error("unexpected characters after closing brace")]
    TrailingCharacters,
}

/// Why a single ACL item could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItemFailure {
    /// No unquoted `=` follows the grantee.
    #[error("missing '=' after grantee")]
    MissingEquals,
    /// A quoted grantee or grantor name is never closed.
    #[error("unterminated quoted role name")]
    UnterminatedQuote,
    /// Something other than end of item follows the grantor.
    #[error("unexpected characters after grantor")]
    TrailingGrantorCharacters,
}

/// Failure while reconstructing the ACL of one catalog object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AclError {
    /// The ACL array text is malformed.
    #[error("could not decode ACL array {text:?}: {reason}")]
    Decode {
        /// Raw array text as received from the catalog.
        text: String,
        /// What was wrong with it.
        reason: DecodeFailure,
    },
    /// One item of the array is malformed.
    #[error("could not parse ACL item {item:?}: {reason}")]
    ItemSyntax {
        /// Raw item text.
        item: String,
        /// What was wrong with it.
        reason: ItemFailure,
    },
    /// The object type tag has no privilege vocabulary.
    #[error("unsupported object type {0:?}")]
    UnsupportedObjectType(String),
}

/// Failure of a whole dump run.
#[derive(Debug, Error)]
pub enum DumpError {
    /// ACL reconstruction failed for a named object.
    #[error("could not parse ACL list ({acl}) for {kind} {object}")]
    Acl {
        /// Object type keyword, e.g. `DATABASE`.
        kind: String,
        /// Formatted object name.
        object: String,
        /// Raw ACL array text that failed.
        acl: String,
        /// Underlying engine error.
        #[source]
        source: AclError,
    },
    /// The snapshot names an encoding this tool does not know.
    #[error("unknown encoding {0:?}")]
    UnknownEncoding(String),
    /// `--database` named a database absent from the snapshot.
    #[error("database {0:?} not found in catalog snapshot")]
    DatabaseNotFound(String),
    /// The snapshot file is not valid JSON for the expected shape.
    #[error("invalid catalog snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    /// Reading input or writing the script failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved, or `-` for standard streams.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
