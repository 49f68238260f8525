use crate::error::{AclError, DecodeFailure};

/// Split the external text of a one-dimensional array into its items.
///
/// Accepts `{item,item,...}` where any item may be wrapped in double quotes;
/// inside quotes a backslash escapes the next character. `{}` decodes to an
/// empty list. Anything after the closing brace is rejected.
pub fn parse_pg_array(text: &str) -> Result<Vec<String>, AclError> {
    let fail = |reason| AclError::Decode {
        text: text.to_string(),
        reason,
    };

    if text.len() < 2 || !text.starts_with('{') || !text.ends_with('}') {
        return Err(fail(DecodeFailure::MissingBraces));
    }

    let mut chars = text[1..].chars().peekable();
    let mut items = Vec::new();

    loop {
        match chars.peek() {
            None => return Err(fail(DecodeFailure::PrematureEnd)),
            Some('}') => break,
            Some(_) => {}
        }

        let mut item = String::new();
        loop {
            match chars.peek().copied() {
                None => return Err(fail(DecodeFailure::PrematureEnd)),
                Some('}' | ',') => break,
                Some('"') => {
                    chars.next();
                    loop {
                        match chars.next() {
                            None => return Err(fail(DecodeFailure::PrematureEnd)),
                            Some('"') => break,
                            Some('\\') => match chars.next() {
                                None => return Err(fail(DecodeFailure::PrematureEnd)),
                                Some(escaped) => item.push(escaped),
                            },
                            Some(ch) => item.push(ch),
                        }
                    }
                }
                Some(ch) => {
                    item.push(ch);
                    chars.next();
                }
            }
        }
        items.push(item);

        if chars.peek() == Some(&',') {
            chars.next();
        }
    }

    // Consume the closing brace; it must be the last character.
    chars.next();
    if chars.next().is_some() {
        return Err(fail(DecodeFailure::TrailingCharacters));
    }

    Ok(items)
}
