//! Slice-based decoder implementation.

use std::str::Utf8Error;

use thiserror::Error;

use crate::schema::KismetRun;

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// The slice does not hold UTF-8 text.
    #[error("Found invalid UTF-8: {0}.")]
    Utf8(#[from] Utf8Error),
    /// The document is not well-formed, or a value does not fit its field.
    #[error("Malformed document: {0}.")]
    Xml(#[from] quick_xml::DeError),
}

/// Decode a run from a slice of a document.
///
/// The slice must hold UTF-8, whatever encoding the document declares. Use
/// [`decode_reader`](super::decode_reader) for documents in other character
/// sets.
///
/// This method is also re-exported as `kismet_netxml::decode::decode_slice`.
pub fn decode(r: &[u8]) -> Result<KismetRun, Error> {
    let text = std::str::from_utf8(r)?;
    Ok(super::deserialize(text)?)
}
