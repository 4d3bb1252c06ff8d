use std::borrow::Cow;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::{errors::Error, NULL_PLACEHOLDER};

/// Decodes a base64 field and requires every byte to be ASCII.
pub fn decode_ascii(field: &str, encoded: &str) -> Result<String, Error> {
    let bytes = decode_bytes(field, encoded)?;
    ascii_text(field, bytes)
}

/// Like [`decode_ascii`], but an absent field becomes `"null"`.
pub fn decode_optional(field: &str, encoded: Option<&str>) -> Result<String, Error> {
    match encoded {
        Some(encoded) => decode_ascii(field, encoded),
        None => Ok(NULL_PLACEHOLDER.to_string()),
    }
}

pub fn decode_bytes(field: &str, encoded: &str) -> Result<Vec<u8>, Error> {
    STANDARD
        .decode(encoded)
        .map_err(|source| Error::InvalidBase64 {
            field: field.to_string(),
            source,
        })
}

pub fn ascii_text(field: &str, bytes: Vec<u8>) -> Result<String, Error> {
    if let Some(position) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(Error::NonAscii {
            field: field.to_string(),
            position,
        });
    }

    Ok(bytes.into_iter().map(char::from).collect())
}

/// Uppercase hex, a space after every 4 bytes and a line break after every 16.
///
/// `max_len == 0` dumps everything. Otherwise the dump stops after `max_len`
/// bytes and notes how many were left out.
pub fn hex_dump(bytes: &[u8], max_len: usize) -> String {
    let len = if max_len > 0 && max_len < bytes.len() {
        max_len
    } else {
        bytes.len()
    };

    let mut out = String::with_capacity(len * 3);
    for (i, byte) in bytes[..len].iter().enumerate() {
        out.push_str(&format!("{:02X}", byte));
        if i % 16 == 15 {
            out.push('\n');
        } else if i % 4 == 3 {
            out.push(' ');
        }
    }

    if len < bytes.len() {
        out.push_str(&format!("... ({} more bytes)", bytes.len() - len));
    }

    out
}

/// Cuts `text` to `max_chars` characters, marking the cut with `...`.
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => Cow::Owned(format!("{}...", &text[..end])),
        None => Cow::Borrowed(text),
    }
}

/// Header values arrive as signed JVM bytes.
pub fn header_text(bytes: &[i8]) -> String {
    let bytes: Vec<u8> = bytes.iter().map(|b| *b as u8).collect();
    String::from_utf8_lossy(&bytes).into_owned()
}
