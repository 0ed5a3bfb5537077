//! Client devices associated with a network.

use serde::Deserialize;

use super::{
    stats::{GpsInfo, Packets, SeenCard, SnrInfo},
    value,
};

/// A device seen talking to a network.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Client {
    #[serde(rename = "@number")]
    pub number: String,
    /// Traffic direction, such as `fromds` or `established`.
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@first-time")]
    pub first_time: String,
    #[serde(rename = "@last-time")]
    pub last_time: String,

    #[serde(rename = "client-mac")]
    pub mac: String,
    #[serde(rename = "client-manuf")]
    pub manufacturer: String,
    #[serde(deserialize_with = "value::number")]
    pub channel: u32,
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
    #[serde(rename = "seen-card", deserialize_with = "value::last")]
    pub seen_card: SeenCard,
}
