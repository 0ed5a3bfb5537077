#![cfg(feature = "charset")]

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use kismet_netxml::{
    decode::{reader, slice},
    schema::{GpsInfo, KismetRun, SeenCard, SnrInfo, Ssid},
};

const PATH: &str = "fixtures/survey.netxml";

#[test]
fn decode_reader_survey() {
    let mut file = std::fs::File::open(PATH).unwrap();
    let run = kismet_netxml::decode::decode_reader(&mut file).unwrap();
    Validator::new(PATH).validate(&run);
}

#[test]
fn decode_labelled_survey() {
    let mut file = std::fs::File::open(PATH).unwrap();
    let run = reader::decode_labelled(&mut file, "latin1").unwrap();
    Validator::new(PATH).validate(&run);
}

#[test]
fn decode_slice_survey_is_not_utf8() {
    let data = std::fs::read(PATH).unwrap();
    let err = kismet_netxml::decode::decode_slice(&data).unwrap_err();
    assert!(matches!(err, slice::Error::Utf8(_)), "{err}");
}

#[test]
fn survey_card_source() {
    let run = decode_survey();

    assert_eq!(run.version, "2016.07.R1");
    assert_eq!(run.start_time, "Sat Oct 17 08:30:02 2026");

    let card = &run.card_source;
    assert_eq!(card.uuid, "ef0e6ed6-8b2f-11e6-a64f-ea3c3e4ea801");
    assert_eq!(card.source, "wlan1mon");
    assert_eq!(card.name, "wlan1mon");
    assert_eq!(card.kind, "linuxieee80211");
    assert_eq!(card.packets, 4821);
    assert!(card.hop);
    assert_eq!(card.channels().count(), 15);
    assert_eq!(card.channels().last(), Some("48"));
}

#[test]
fn survey_network_detail() {
    let run = decode_survey();
    let network = &run.networks[0];

    assert_eq!(network.first_time, "Sat Oct 17 08:30:04 2026");
    assert_eq!(network.ssid.kind, "Beacon");
    assert_eq!(network.ssid.max_rate, "54.000000");
    assert_eq!(network.ssid.packets, 1503);
    assert_eq!(network.ssid.encryption, ["WPA+PSK", "WPA+AES-CCM"]);
    assert_eq!(network.manufacturer, "Cisco");
    assert_eq!(network.freq_mhz, "2437 1522");
    assert_eq!(network.max_seen_rate, 54000);
    assert_eq!(network.packets.llc, 1503);
    assert_eq!(network.packets.retries, 2);
    assert_eq!(network.data_size, 2841);
    assert_eq!(network.snr_info.min_signal_dbm, -79);
    assert_eq!(network.snr_info.min_signal_rssi, 1024);
    assert_eq!(network.snr_info.max_noise_dbm, -90);
    assert_eq!(network.gps_info.min_lon, -0.129011);
    assert_eq!(network.gps_info.avg_lat, 51.49854);
    assert_eq!(network.gps_info.max_spd, 4.2);
    assert_eq!(network.bss_timestamp, "183729110");
    assert_eq!(network.cdp_device, "");
    assert_eq!(network.seen_card.packets, 1522);

    // Partial records leave the remaining fields at zero.
    let hidden = &run.networks[1];
    assert_eq!(hidden.snr_info.last_noise_dbm, -95);
    assert_eq!(hidden.snr_info.max_noise_dbm, 0);
    assert_eq!(hidden.gps_info, GpsInfo::default());

    let probe = &run.networks[2];
    assert_eq!(probe.ssid, Ssid::default());
    assert_eq!(probe.seen_card, SeenCard::default());
}

#[test]
fn survey_clients() {
    let run = decode_survey();

    let clients: Vec<_> = run.clients().collect();
    assert_eq!(clients.len(), 3);
    let numbers: Vec<_> = clients.iter().map(|(n, _)| n.number.as_str()).collect();
    assert_eq!(numbers, ["1", "1", "4"]);

    let (_, first) = clients[0];
    assert_eq!(first.number, "1");
    assert_eq!(first.kind, "fromds");
    assert_eq!(first.mac, "F0:18:98:0A:1B:2C");
    assert_eq!(first.manufacturer, "Apple");
    assert_eq!(first.max_seen_rate, 24000);
    assert_eq!(first.packets.crypt, 12);
    assert_eq!(first.data_size, 1410);
    assert_eq!(first.snr_info.last_signal_dbm, -70);
    assert_eq!(first.seen_card.time, "Sat Oct 17 09:01:33 2026");
    assert_eq!(first.seen_card.packets, 12);

    let (_, second) = clients[1];
    assert_eq!(second.kind, "established");
    assert_eq!(second.packets.total, 7);
    assert_eq!(second.snr_info, SnrInfo::default());
    assert_eq!(second.seen_card, SeenCard::default());
}

#[test]
fn survey_repeated_elements() {
    let run = decode_survey();
    let network = &run.networks[3];

    // The second advertised identity replaces the beacon.
    assert_eq!(network.ssid.kind, "Probe Response");
    assert_eq!(network.ssid.packets, 18);
    assert_eq!(network.ssid.first_time, "Sat Oct 17 08:35:02 2026");
    assert_eq!(network.ssid.encryption, ["WPA+PSK", "WPA+AES-CCM"]);
    assert_eq!(network.ssid.essid.name, "Library");

    assert_eq!(network.freq_mhz, "2407 3");
    assert_eq!(network.seen_card.uuid, "3f1a9c20-8b30-11e6-9d1c-ea3c3e4ea801");
    assert_eq!(network.seen_card.packets, 57);
    assert_eq!(network.bss_timestamp, "5521098811");

    let client = &network.clients[0];
    assert_eq!(client.mac, "60:F8:1D:A1:B2:C3");
    assert_eq!(client.freq_mhz, "2417 1");
    assert_eq!(client.seen_card.packets, 1);
    assert_eq!(client.packets.total, 3);
}

fn decode_survey() -> KismetRun {
    let mut file = std::fs::File::open(PATH).unwrap();
    kismet_netxml::decode::decode_reader(&mut file).unwrap()
}

/// Expected network summaries, one row per network in document order.
struct Validator(Vec<StringRecord>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .unwrap();

        Self(reader.records().map(|r| r.unwrap()).collect())
    }

    fn validate(&self, run: &KismetRun) {
        assert_eq!(run.networks.len(), self.0.len());

        for (network, expected) in run.networks.iter().zip(&self.0) {
            let found = [
                network.number.clone(),
                network.kind.clone(),
                network.bssid.clone(),
                network.ssid.essid.name.clone(),
                network.ssid.essid.cloaked.to_string(),
                network.channel.to_string(),
                network.packets.total.to_string(),
                network.snr_info.last_signal_dbm.to_string(),
                network.clients.len().to_string(),
            ];

            assert_eq!(expected.iter().collect::<Vec<_>>(), found);
        }
    }
}
