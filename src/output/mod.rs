/// Writes the generated script to stdout or a file.
pub mod formatter;
