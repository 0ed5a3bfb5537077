//! Helpers for detecting the character set of a document and transcoding it.
//!
//! _Requires Cargo feature `charset`._
//!
//! Encodings are named by their WHATWG labels, so `latin1` and `ISO-8859-1`
//! both select `windows-1252`, which is a superset of it.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;

/// An error detecting a character set or transcoding from it.
#[derive(Debug, Error)]
pub enum CharsetError {
    /// The document names an encoding with no known decoder.
    #[error("Unknown encoding ({0}).")]
    UnknownEncoding(String),
    /// The document contains bytes invalid in its encoding.
    #[error("Found byte sequences invalid in {encoding}.")]
    Malformed { encoding: &'static str },
}

/// Upper bound on the length of an XML declaration searched for an encoding.
const DECLARATION_LIMIT: usize = 256;

/// Detect the character set of a document.
///
/// A byte order mark takes precedence over the `encoding` pseudo-attribute of
/// the XML declaration. Without either, the document is taken to be UTF-8.
///
/// Returns the encoding and the length of the byte order mark, if any.
pub fn detect(r: &[u8]) -> Result<(&'static Encoding, usize), CharsetError> {
    if let Some((encoding, bom)) = Encoding::for_bom(r) {
        log::trace!("Found {} byte order mark.", encoding.name());
        return Ok((encoding, bom));
    }

    let Some(label) = declared_label(r) else {
        return Ok((UTF_8, 0));
    };

    let encoding = for_label(label)?;
    log::trace!("Found declared encoding {}.", encoding.name());

    Ok((encoding, 0))
}

/// Look up an encoding by its label.
pub fn for_label(label: &[u8]) -> Result<&'static Encoding, CharsetError> {
    Encoding::for_label(label)
        .ok_or_else(|| CharsetError::UnknownEncoding(String::from_utf8_lossy(label).into_owned()))
}

/// Transcode a document, without its byte order mark, to UTF-8.
///
/// UTF-8 documents are borrowed rather than copied.
pub fn transcode<'a>(
    r: &'a [u8],
    encoding: &'static Encoding,
) -> Result<Cow<'a, str>, CharsetError> {
    if encoding != UTF_8 {
        log::debug!("Transcoding {} bytes from {}.", r.len(), encoding.name());
    }

    encoding
        .decode_without_bom_handling_and_without_replacement(r)
        .ok_or(CharsetError::Malformed {
            encoding: encoding.name(),
        })
}

/// Extract the `encoding` pseudo-attribute from an XML declaration.
fn declared_label(r: &[u8]) -> Option<&[u8]> {
    let r = r.strip_prefix(b"<?xml")?;
    let r = &r[..r.len().min(DECLARATION_LIMIT)];
    let end = r.windows(2).position(|w| w == b"?>")?;
    let declaration = &r[..end];

    let start = declaration.windows(8).position(|w| w == b"encoding")?;
    let rest = trim_start(&declaration[start + 8..]);
    let rest = trim_start(rest.strip_prefix(b"=")?);

    let (&quote, rest) = rest.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }

    let len = rest.iter().position(|&b| b == quote)?;
    Some(&rest[..len])
}

fn trim_start(r: &[u8]) -> &[u8] {
    let n = r.iter().take_while(|b| b.is_ascii_whitespace()).count();
    &r[n..]
}
