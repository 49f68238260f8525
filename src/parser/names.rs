use crate::error::ItemFailure;

/// A role name consumed from the front of an ACL item segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedName {
    /// Unescaped name. Empty for the `PUBLIC` pseudo-role.
    pub name: String,
    /// Byte offset just past the consumed text, i.e. at the delimiter.
    pub end: usize,
}

/// Read a role name from the start of `input`, stopping at an unquoted `=`
/// or at the end of the text.
///
/// Unquoted characters are copied verbatim. A `"` opens a quoted span in
/// which `""` stands for one literal quote and a lone `"` closes the span.
pub fn scan_role_name(input: &str) -> Result<ScannedName, ItemFailure> {
    let mut name = String::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(idx, ch)) = chars.peek() {
        match ch {
            '=' => return Ok(ScannedName { name, end: idx }),
            '"' => {
                chars.next();
                loop {
                    match chars.next() {
                        None => return Err(ItemFailure::UnterminatedQuote),
                        Some((_, '"')) => {
                            if matches!(chars.peek(), Some((_, '"'))) {
                                chars.next();
                                name.push('"');
                            } else {
                                break;
                            }
                        }
                        Some((_, other)) => name.push(other),
                    }
                }
            }
            _ => {
                name.push(ch);
                chars.next();
            }
        }
    }

    Ok(ScannedName {
        name,
        end: input.len(),
    })
}
