// crates/cwmp-datamodel/src/device/wifi.rs

//! `Device.WiFi.`: radios, access points and their associated stations.

use super::{EnableStatus, InterfaceStatus};
use crate::macros::{entity, wire_enum};
use crate::schema::{ActiveNotify, FieldSpec};
use crate::types::{Counter32, Counter64, Dbm, MacAddress};

wire_enum! {
    pub enum FrequencyBand {
        Band2Dot4GHz = "2.4GHz",
        Band5GHz = "5GHz",
        Band6GHz = "6GHz",
    }
}

entity! {
    pub struct WiFi {
        path: "Device.WiFi.",
        version: "2.0",
        unique: [],
        fields: {
            scalar radio_number_of_entries: u32 = "RadioNumberOfEntries",
                set_radio_number_of_entries, with_radio_number_of_entries
                => FieldSpec::number_of_entries("Radio"),
            scalar access_point_number_of_entries: u32 = "AccessPointNumberOfEntries",
                set_access_point_number_of_entries, with_access_point_number_of_entries
                => FieldSpec::number_of_entries("AccessPoint"),
        },
        tables: {
            radios: Radio = "Radio", radios_mut, set_radios, with_radio
                => FieldSpec::table(),
            access_points: AccessPoint = "AccessPoint", access_points_mut, set_access_points, with_access_point
                => FieldSpec::table(),
        },
    }
}

entity! {
    /// One physical radio.
    pub struct Radio {
        path: "Device.WiFi.Radio.{i}.",
        version: "2.0",
        unique: [["Alias"], ["Name"]],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable(),
            scalar status: InterfaceStatus = "Status", set_status, with_status
                => FieldSpec::enumeration(InterfaceStatus::VALUES),
            text alias: String = "Alias", set_alias, with_alias
                => FieldSpec::string().writable().max_length(64),
            text name: String = "Name", set_name, with_name
                => FieldSpec::string().max_length(64),
            scalar last_change: u32 = "LastChange", set_last_change, with_last_change
                => FieldSpec::unsigned_int().units("seconds").notify(ActiveNotify::CanDeny),
            scalar max_bit_rate: u32 = "MaxBitRate", set_max_bit_rate, with_max_bit_rate
                => FieldSpec::unsigned_int().units("Mbps"),
            scalar operating_frequency_band: FrequencyBand = "OperatingFrequencyBand",
                set_operating_frequency_band, with_operating_frequency_band
                => FieldSpec::enumeration(FrequencyBand::VALUES).writable(),
            scalar channel: u32 = "Channel", set_channel, with_channel
                => FieldSpec::unsigned_int().writable().min(1).max(255),
            scalar auto_channel_enable: bool = "AutoChannelEnable", set_auto_channel_enable, with_auto_channel_enable
                => FieldSpec::boolean().writable(),
            /// Percentage of the maximum transmit power; `-1` means auto.
            scalar transmit_power: i32 = "TransmitPower", set_transmit_power, with_transmit_power
                => FieldSpec::int().writable().min(-1).max(100).units("percentage"),
            object stats: RadioStats = "Stats", stats_mut, set_stats, with_stats
                => FieldSpec::object(),
        },
    }
}

entity! {
    pub struct RadioStats {
        path: "Device.WiFi.Radio.{i}.Stats.",
        version: "2.0",
        unique: [],
        fields: {
            scalar bytes_sent: Counter64 = "BytesSent", set_bytes_sent, with_bytes_sent
                => FieldSpec::counter64().units("bytes").notify(ActiveNotify::CanDeny),
            scalar bytes_received: Counter64 = "BytesReceived", set_bytes_received, with_bytes_received
                => FieldSpec::counter64().units("bytes").notify(ActiveNotify::CanDeny),
            scalar packets_sent: Counter64 = "PacketsSent", set_packets_sent, with_packets_sent
                => FieldSpec::counter64().units("packets").notify(ActiveNotify::CanDeny),
            scalar packets_received: Counter64 = "PacketsReceived", set_packets_received, with_packets_received
                => FieldSpec::counter64().units("packets").notify(ActiveNotify::CanDeny),
            scalar errors_sent: Counter32 = "ErrorsSent", set_errors_sent, with_errors_sent
                => FieldSpec::counter32().notify(ActiveNotify::CanDeny),
            scalar errors_received: Counter32 = "ErrorsReceived", set_errors_received, with_errors_received
                => FieldSpec::counter32().notify(ActiveNotify::CanDeny),
            /// Average noise floor on the operating channel.
            scalar noise: Dbm = "Noise", set_noise, with_noise
                => FieldSpec::dbm().notify(ActiveNotify::CanDeny),
        },
    }
}

entity! {
    pub struct AccessPoint {
        path: "Device.WiFi.AccessPoint.{i}.",
        version: "2.0",
        unique: [["Alias"], ["SSIDReference"]],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable().default_value("false"),
            scalar status: EnableStatus = "Status", set_status, with_status
                => FieldSpec::enumeration(EnableStatus::VALUES).default_value("Disabled"),
            text alias: String = "Alias", set_alias, with_alias
                => FieldSpec::string().writable().max_length(64),
            text ssid_reference: String = "SSIDReference", set_ssid_reference, with_ssid_reference
                => FieldSpec::path_ref(256).writable(),
            scalar ssid_advertisement_enabled: bool = "SSIDAdvertisementEnabled",
                set_ssid_advertisement_enabled, with_ssid_advertisement_enabled
                => FieldSpec::boolean().writable(),
            scalar associated_device_number_of_entries: u32 = "AssociatedDeviceNumberOfEntries",
                set_associated_device_number_of_entries, with_associated_device_number_of_entries
                => FieldSpec::number_of_entries("AssociatedDevice"),
        },
        tables: {
            associated_devices: AssociatedDevice = "AssociatedDevice",
                associated_devices_mut, set_associated_devices, with_associated_device
                => FieldSpec::table(),
        },
    }
}

entity! {
    /// A station associated with an access point.
    pub struct AssociatedDevice {
        path: "Device.WiFi.AccessPoint.{i}.AssociatedDevice.{i}.",
        version: "2.0",
        unique: [["MACAddress"]],
        fields: {
            scalar mac_address: MacAddress = "MACAddress", set_mac_address, with_mac_address
                => FieldSpec::mac_address(),
            scalar authentication_state: bool = "AuthenticationState",
                set_authentication_state, with_authentication_state
                => FieldSpec::boolean(),
            scalar last_data_downlink_rate: u32 = "LastDataDownlinkRate",
                set_last_data_downlink_rate, with_last_data_downlink_rate
                => FieldSpec::unsigned_int().min(1000).max(600000).units("Kbps"),
            scalar last_data_uplink_rate: u32 = "LastDataUplinkRate",
                set_last_data_uplink_rate, with_last_data_uplink_rate
                => FieldSpec::unsigned_int().min(1000).max(600000).units("Kbps"),
            scalar signal_strength: Dbm = "SignalStrength", set_signal_strength, with_signal_strength
                => FieldSpec::dbm().min(-200).max(0).notify(ActiveNotify::CanDeny),
            scalar retransmissions: u32 = "Retransmissions", set_retransmissions, with_retransmissions
                => FieldSpec::unsigned_int().max(100).notify(ActiveNotify::CanDeny),
            scalar active: bool = "Active", set_active, with_active
                => FieldSpec::boolean(),
        },
    }
}

impl AccessPoint {
    /// The station with the given MAC address, if associated.
    pub fn associated_device(&self, mac: MacAddress) -> Option<&AssociatedDevice> {
        self.associated_devices
            .iter()
            .find(|d| d.mac_address == Some(mac))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Entity, ParameterValue};
    use crate::validate::{ViolationKind, validate};

    #[test]
    fn test_signal_strength_is_signed_dbm() {
        let sta = AssociatedDevice::new().with_signal_strength(Dbm(-67));
        assert_eq!(sta.signal_strength(), Some(Dbm(-67)));
        assert_eq!(sta.parameter("SignalStrength"), Some(ParameterValue::Signed(-67)));
        assert_eq!(
            AssociatedDevice::schema().field("SignalStrength").and_then(|f| f.units),
            Some("dBm")
        );
    }

    #[test]
    fn test_positive_signal_strength_is_reported() {
        let sta = AssociatedDevice::new().with_signal_strength(Dbm(3));
        assert_eq!(
            validate(&sta)[0].kind,
            ViolationKind::AboveMaximum { value: 3, max: 0 }
        );
    }

    #[test]
    fn test_lookup_by_mac() {
        let mac: MacAddress = "00:11:22:33:44:55".parse().unwrap();
        let ap = AccessPoint::new()
            .with_associated_device(AssociatedDevice::new().with_mac_address(mac).with_active(true))
            .with_associated_device(AssociatedDevice::new());
        assert_eq!(ap.associated_device(mac).and_then(AssociatedDevice::active), Some(true));
        assert!(ap.associated_device(MacAddress([0xff; 6])).is_none());
    }

    #[test]
    fn test_frequency_band_wire_values() {
        assert_eq!(FrequencyBand::Band2Dot4GHz.as_str(), "2.4GHz");
        assert_eq!("6GHz".parse::<FrequencyBand>(), Ok(FrequencyBand::Band6GHz));
    }
}
