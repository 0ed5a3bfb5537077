//! Record types mirroring the tag hierarchy of a netxml document.
//!
//! Each field names its source tag in a `serde` attribute: attribute-valued
//! fields are prefixed with `@`, element text is bound to `$text`, and
//! everything else binds to a child element. Scalars are converted by the
//! helpers in `value`, so missing or empty tags yield zero values while
//! malformed text fails the decode.
//!
//! ```text
//! <detection-run kismet-version start-time>      KismetRun
//!   <card-source uuid>                            CardSource
//!   <wireless-network number type first-time..>   Network (repeated)
//!     <SSID first-time last-time>                 Ssid
//!       <essid cloaked>                           Essid
//!     <packets> <snr-info> <gps-info> <seen-card> Packets, SnrInfo, GpsInfo, SeenCard
//!     <wireless-clients number type ..>           Client (repeated)
//! ```
//!
//! Records are only ever populated by the decoders in [`crate::decode`].

pub mod client;
pub mod network;
pub mod run;
pub mod stats;

mod value;

pub use client::Client;
pub use network::{Essid, Network, Ssid};
pub use run::{CardSource, KismetRun};
pub use stats::{GpsInfo, Packets, SeenCard, SnrInfo};
