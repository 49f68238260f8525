use crate::generator::encoding::Encoding;
use crate::privileges::version::ESCAPE_STRING_SYNTAX;

/// Append `value` to `buf` as a single-quoted SQL string literal.
///
/// Quotes are always doubled; backslashes are doubled unless
/// `std_strings` is set. Multibyte characters are copied whole, sized by
/// `encoding`. A character truncated by the end of the value is padded
/// with spaces to its full width so that the destination server rejects
/// the literal instead of silently swallowing the closing quote.
pub fn append_string_literal_bytes(
    buf: &mut Vec<u8>,
    value: &[u8],
    encoding: Encoding,
    std_strings: bool,
) {
    buf.reserve(2 * value.len() + 2);
    buf.push(b'\'');

    let mut pos = 0;
    while pos < value.len() {
        let byte = value[pos];
        if byte & 0x80 == 0 {
            if byte == b'\'' || (byte == b'\\' && !std_strings) {
                buf.push(byte);
            }
            buf.push(byte);
            pos += 1;
            continue;
        }

        let width = encoding.char_len(&value[pos..]);
        let available = width.min(value.len() - pos);
        buf.extend_from_slice(&value[pos..pos + available]);
        pos += available;

        if available < width {
            buf.resize(buf.len() + (width - available), b' ');
            break;
        }
    }

    buf.push(b'\'');
}

/// [`append_string_literal_bytes`] for text already held as a `str`.
///
/// A `str` is UTF-8 whatever the session encoding was, so characters are
/// always sized as UTF-8 and never count as truncated.
pub fn append_string_literal(buf: &mut String, value: &str, std_strings: bool) {
    let mut bytes = Vec::with_capacity(2 * value.len() + 2);
    append_string_literal_bytes(&mut bytes, value.as_bytes(), Encoding::Utf8, std_strings);
    buf.push_str(&String::from_utf8_lossy(&bytes));
}

/// Session properties of the source server that affect literal syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralContext {
    /// Whether `standard_conforming_strings` is on.
    pub std_strings: bool,
    /// Source server version.
    pub server_version: u32,
}

impl LiteralContext {
    /// Append `value` as a literal suited to this server.
    ///
    /// Values containing a backslash use `E'...'` syntax where available,
    /// separated from any preceding token by a space.
    pub fn append_literal(&self, buf: &mut String, value: &str) {
        if value.contains('\\') && self.server_version >= ESCAPE_STRING_SYNTAX {
            if !buf.is_empty() && !buf.ends_with(' ') {
                buf.push(' ');
            }
            buf.push('E');
            append_string_literal(buf, value, false);
            return;
        }
        append_string_literal(buf, value, self.std_strings);
    }

    /// Convenience wrapper returning the literal as a new string.
    pub fn literal(&self, value: &str) -> String {
        let mut buf = String::new();
        self.append_literal(&mut buf, value);
        buf
    }
}
