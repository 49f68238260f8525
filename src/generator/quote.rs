/// Quote an identifier for SQL output when it is not a plain lowercase name.
///
/// A name is left bare only if it starts with `a-z` or `_` and continues
/// with `a-z`, `0-9` or `_`. Otherwise it is wrapped in double quotes with
/// embedded quotes doubled. Every call returns a fresh string.
pub fn quote_identifier(raw: &str) -> String {
    if !needs_quoting(raw) {
        return raw.to_string();
    }

    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for ch in raw.chars() {
        if ch == '"' {
            quoted.push('"');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

fn needs_quoting(raw: &str) -> bool {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first == '_' => {}
        _ => return true,
    }
    !chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
}
