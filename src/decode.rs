//! Entry points decoding a complete netxml document into a [`KismetRun`].
//!
//! The functions in this module are suited to decoding runs from files and
//! data slices. Each takes the whole document and makes a single pass over it,
//! returning either a fully populated run or an error.
//!
//! - [`decode_reader`] reads a document to its end, and transcodes it to UTF-8
//!   if it declares another character set. Prefer this function when the
//!   origin of a document is unknown.
//! - [`decode_slice`] decodes a buffer already known to hold UTF-8.
//!
//! Unknown elements and attributes are skipped, and missing ones leave their
//! fields at zero values. Text that cannot be converted to the type of its
//! field fails the decode.

#[cfg(feature = "charset")]
pub mod charset;
#[cfg(feature = "charset")]
pub mod reader;
pub mod slice;

#[cfg(feature = "charset")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

use crate::schema::KismetRun;

/// Deserialize a run from UTF-8 text.
fn deserialize(text: &str) -> Result<KismetRun, quick_xml::DeError> {
    // A leading byte order mark is not part of the document.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let run: KismetRun = quick_xml::de::from_str(text)?;

    log::debug!(
        "Decoded Kismet {} run with {} networks.",
        run.version,
        run.networks.len()
    );

    Ok(run)
}
