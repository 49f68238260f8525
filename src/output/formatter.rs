use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::DumpError;

/// Write `script` to `path`, or to stdout when no path is given.
///
/// An existing file is truncated.
pub fn write_script(path: Option<&Path>, script: &str) -> Result<(), DumpError> {
    match path {
        Some(path) => std::fs::write(path, script).map_err(|source| DumpError::Io {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(script.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| DumpError::Io {
                    path: PathBuf::from("-"),
                    source,
                })
        }
    }
}
