//! Observed networks and their advertised identity.

use serde::Deserialize;

use super::{
    client::Client,
    stats::{GpsInfo, Packets, SeenCard, SnrInfo},
    value,
};

/// A wireless network observed during a run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Network {
    /// Sequence number assigned by Kismet, kept as written.
    #[serde(rename = "@number")]
    pub number: String,
    /// Network type, such as `infrastructure` or `probe`.
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@first-time")]
    pub first_time: String,
    #[serde(rename = "@last-time")]
    pub last_time: String,

    /// The last of the advertised identities, one per frame type.
    #[serde(rename = "SSID", deserialize_with = "value::last")]
    pub ssid: Ssid,
    #[serde(rename = "BSSID")]
    pub bssid: String,
    #[serde(rename = "manuf")]
    pub manufacturer: String,
    #[serde(deserialize_with = "value::number")]
    pub channel: u32,
    /// The last frequency entry, one of `<freqmhz>` per frequency seen.
    #[serde(rename = "freqmhz", deserialize_with = "value::last")]
    pub freq_mhz: String,
    #[serde(rename = "maxseenrate", deserialize_with = "value::number")]
    pub max_seen_rate: u64,
    pub packets: Packets,
    #[serde(rename = "datasize", deserialize_with = "value::number")]
    pub data_size: u64,
    #[serde(rename = "snr-info")]
    pub snr_info: SnrInfo,
    #[serde(rename = "gps-info")]
    pub gps_info: GpsInfo,
    #[serde(rename = "bsstimestamp")]
    pub bss_timestamp: String,
    #[serde(rename = "cdp-device")]
    pub cdp_device: String,
    #[serde(rename = "cdp-portid")]
    pub cdp_port_id: String,
    /// The last card to see the network, one of `<seen-card>` per card.
    #[serde(rename = "seen-card", deserialize_with = "value::last")]
    pub seen_card: SeenCard,

    /// Clients in document order.
    #[serde(rename = "wireless-clients")]
    pub clients: Vec<Client>,
}

/// Broadcast identity of a network.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Ssid {
    #[serde(rename = "@first-time")]
    pub first_time: String,
    #[serde(rename = "@last-time")]
    pub last_time: String,
    /// Frame type the identity was learned from, such as `Beacon`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "max-rate")]
    pub max_rate: String,
    #[serde(deserialize_with = "value::number")]
    pub packets: u64,
    /// Encryption method names, in document order.
    pub encryption: Vec<String>,
    pub essid: Essid,
}

/// The advertised network name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Essid {
    #[serde(rename = "@cloaked", deserialize_with = "value::flag")]
    pub cloaked: bool,
    #[serde(rename = "$text")]
    pub name: String,
}
