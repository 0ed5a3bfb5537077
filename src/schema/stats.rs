//! Statistics shared by networks and clients.

use serde::Deserialize;

use super::value;

/// Frame counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Packets {
    #[serde(rename = "LLC", deserialize_with = "value::number")]
    pub llc: u64,
    #[serde(deserialize_with = "value::number")]
    pub data: u64,
    #[serde(deserialize_with = "value::number")]
    pub crypt: u64,
    #[serde(deserialize_with = "value::number")]
    pub total: u64,
    #[serde(deserialize_with = "value::number")]
    pub fragments: u64,
    #[serde(deserialize_with = "value::number")]
    pub retries: u64,
}

/// Signal and noise levels: the most recent reading and the extrema.
///
/// Levels are signed. Readings in dBm are normally negative; RSSI readings
/// depend on the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SnrInfo {
    #[serde(deserialize_with = "value::number")]
    pub last_signal_dbm: i32,
    #[serde(deserialize_with = "value::number")]
    pub last_noise_dbm: i32,
    #[serde(deserialize_with = "value::number")]
    pub last_signal_rssi: i32,
    #[serde(deserialize_with = "value::number")]
    pub last_noise_rssi: i32,
    #[serde(deserialize_with = "value::number")]
    pub min_signal_dbm: i32,
    #[serde(deserialize_with = "value::number")]
    pub min_noise_dbm: i32,
    #[serde(deserialize_with = "value::number")]
    pub min_signal_rssi: i32,
    #[serde(deserialize_with = "value::number")]
    pub min_noise_rssi: i32,
    #[serde(deserialize_with = "value::number")]
    pub max_signal_dbm: i32,
    #[serde(deserialize_with = "value::number")]
    pub max_noise_dbm: i32,
    #[serde(deserialize_with = "value::number")]
    pub max_signal_rssi: i32,
    #[serde(deserialize_with = "value::number")]
    pub max_noise_rssi: i32,
}

/// Position extrema and averages, in degrees, metres and kilometres per hour.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GpsInfo {
    #[serde(rename = "min-lat", deserialize_with = "value::number")]
    pub min_lat: f64,
    #[serde(rename = "min-lon", deserialize_with = "value::number")]
    pub min_lon: f64,
    #[serde(rename = "min-alt", deserialize_with = "value::number")]
    pub min_alt: f64,
    #[serde(rename = "min-spd", deserialize_with = "value::number")]
    pub min_spd: f64,
    #[serde(rename = "max-lat", deserialize_with = "value::number")]
    pub max_lat: f64,
    #[serde(rename = "max-lon", deserialize_with = "value::number")]
    pub max_lon: f64,
    #[serde(rename = "max-alt", deserialize_with = "value::number")]
    pub max_alt: f64,
    #[serde(rename = "max-spd", deserialize_with = "value::number")]
    pub max_spd: f64,
    #[serde(rename = "peak-lat", deserialize_with = "value::number")]
    pub peak_lat: f64,
    #[serde(rename = "peak-lon", deserialize_with = "value::number")]
    pub peak_lon: f64,
    #[serde(rename = "peak-alt", deserialize_with = "value::number")]
    pub peak_alt: f64,
    #[serde(rename = "avg-lat", deserialize_with = "value::number")]
    pub avg_lat: f64,
    #[serde(rename = "avg-lon", deserialize_with = "value::number")]
    pub avg_lon: f64,
    #[serde(rename = "avg-alt", deserialize_with = "value::number")]
    pub avg_alt: f64,
}

/// The capture card that observed a network or client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeenCard {
    #[serde(rename = "seen-uuid")]
    pub uuid: String,
    #[serde(rename = "seen-time")]
    pub time: String,
    #[serde(rename = "seen-packets", deserialize_with = "value::number")]
    pub packets: u64,
}
