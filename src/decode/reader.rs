//! Reader-based, charset-aware decoder implementation.
//!
//! _Requires Cargo feature `charset`._

use std::io::Read;

use encoding_rs::Encoding;
use thiserror::Error;

use crate::schema::KismetRun;

use super::charset::{self, CharsetError};

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The character set could not be detected or decoded.
    #[error("Incorrect character set: {0}")]
    Charset(#[from] CharsetError),
    /// The document is not well-formed, or a value does not fit its field.
    #[error("Malformed document: {0}.")]
    Xml(#[from] quick_xml::DeError),
}

/// Decode a run from a reader of a document, detecting its character set.
///
/// The reader is consumed to its end before decoding begins.
///
/// This method is also re-exported as `kismet_netxml::decode::decode_reader`.
///
/// _Requires Cargo feature `charset`._
pub fn decode(r: &mut impl Read) -> Result<KismetRun, Error> {
    let buf = read(r)?;
    let (encoding, bom) = charset::detect(&buf)?;

    decode_as(&buf[bom..], encoding)
}

/// Decode a run from a reader of a document in a named character set.
///
/// The label takes precedence over any encoding the document declares.
/// Labels are those of the WHATWG Encoding Standard, such as `utf-8` or
/// `iso-8859-1`.
///
/// _Requires Cargo feature `charset`._
pub fn decode_labelled(r: &mut impl Read, label: &str) -> Result<KismetRun, Error> {
    let encoding = charset::for_label(label.as_bytes())?;
    let buf = read(r)?;

    // Only skip a byte order mark belonging to the named encoding.
    let bom = match Encoding::for_bom(&buf) {
        Some((found, bom)) if found == encoding => bom,
        _ => 0,
    };

    decode_as(&buf[bom..], encoding)
}

fn decode_as(r: &[u8], encoding: &'static Encoding) -> Result<KismetRun, Error> {
    let text = charset::transcode(r, encoding)?;
    Ok(super::deserialize(&text)?)
}

/// Read a document to its end.
fn read(r: &mut impl Read) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;

    log::trace!("Read {} document bytes.", buf.len());

    Ok(buf)
}
