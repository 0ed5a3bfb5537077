//! A typed deserializer for the `netxml` detection runs written by the Kismet
//! wireless scanner.
//!
//! A run is decoded in one pass into a [`KismetRun`](schema::KismetRun): the
//! capture card, every observed network, and the clients seen on each network.
//! Fields keep the shape and names of the document, and are populated with
//! zero values when their tags are missing. Interpreting the values is left to
//! the caller.
//!
//! Most users should begin with the functions in the [`decode`] module. The
//! record types are found in the [`schema`] module.
//!
//! ```
//! let file = std::fs::File::open("capture.netxml")?;
//! let run = kismet_netxml::decode::decode_reader(&mut std::io::BufReader::new(file))?;
//!
//! for network in &run.networks {
//!     println!("{} {}", network.bssid, network.ssid.essid.name);
//! }
//! ```
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `charset`: enable the reader-based decoder, which transcodes documents
//!   declared in encodings other than UTF-8 (default).

pub mod decode;
pub mod schema;
