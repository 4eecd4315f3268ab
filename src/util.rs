//! Text loading helpers.

use std::borrow::Cow;
use std::path::Path;

use crate::error::Result;

/// Decode bytes to a string, handling various encodings.
///
/// Tries UTF-8 first (handles BOM automatically via encoding_rs), then
/// falls back to Windows-1252, which is common in old book files and a
/// superset of ISO-8859-1.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Read a text file, decoding tolerantly via [`decode_text`].
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(decode_text(&bytes).into_owned())
}
