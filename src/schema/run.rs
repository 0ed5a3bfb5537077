//! The document root and its capture card.

use serde::Deserialize;

use super::{client::Client, network::Network, value};

/// A single detection run, the root of a netxml document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KismetRun {
    #[serde(rename = "@kismet-version")]
    pub version: String,
    #[serde(rename = "@start-time")]
    pub start_time: String,
    /// The last capture card, one of `<card-source>` per card.
    #[serde(rename = "card-source", deserialize_with = "value::last")]
    pub card_source: CardSource,
    /// Networks in document order.
    #[serde(rename = "wireless-network")]
    pub networks: Vec<Network>,
}

impl KismetRun {
    /// Iterate over the clients of every network, in document order, paired
    /// with the network they were seen on.
    pub fn clients(&self) -> impl Iterator<Item = (&Network, &Client)> {
        self.networks
            .iter()
            .flat_map(|n| n.clients.iter().map(move |c| (n, c)))
    }
}

/// The interface used to capture a run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "CardSourceTags")]
pub struct CardSource {
    pub uuid: String,
    pub source: String,
    pub name: String,
    pub kind: String,
    pub packets: u64,
    /// Whether the card was channel hopping.
    pub hop: bool,
    /// The raw channel list, as written by Kismet.
    pub channels: String,
}

/// Tags of a `<card-source>`, before the UUID is settled.
#[derive(Default, Deserialize)]
#[serde(default)]
struct CardSourceTags {
    #[serde(rename = "@uuid")]
    uuid_attribute: String,
    #[serde(rename = "uuid")]
    uuid_element: String,
    #[serde(rename = "card-source")]
    source: String,
    #[serde(rename = "card-name")]
    name: String,
    #[serde(rename = "card-type")]
    kind: String,
    #[serde(rename = "card-packets", deserialize_with = "value::number")]
    packets: u64,
    #[serde(rename = "card-hop", deserialize_with = "value::flag")]
    hop: bool,
    #[serde(rename = "card-channels")]
    channels: String,
}

impl From<CardSourceTags> for CardSource {
    fn from(tags: CardSourceTags) -> Self {
        // Kismet writes the attribute; the element is only read without it.
        let uuid = if tags.uuid_attribute.is_empty() {
            tags.uuid_element
        } else {
            tags.uuid_attribute
        };

        Self {
            uuid,
            source: tags.source,
            name: tags.name,
            kind: tags.kind,
            packets: tags.packets,
            hop: tags.hop,
            channels: tags.channels,
        }
    }
}

impl CardSource {
    /// Iterate over the entries of the comma-separated channel list.
    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.channels
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
