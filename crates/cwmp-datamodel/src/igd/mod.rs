// crates/cwmp-datamodel/src/igd/mod.rs

//! TR-098 `InternetGatewayDevice.` data model.

pub mod diagnostics;
pub mod lan;
pub mod layer3;

use self::diagnostics::{DownloadDiagnostics, IpPingDiagnostics};
use self::lan::LanDevice;
use self::layer3::Layer3Forwarding;
use crate::macros::entity;
use crate::schema::{ActiveNotify, FieldSpec};
use crate::types::DateTime;

entity! {
    /// Root object of a TR-098 Internet Gateway Device.
    pub struct InternetGatewayDevice {
        path: "InternetGatewayDevice.",
        version: "1.0",
        unique: [],
        fields: {
            text device_summary: String = "DeviceSummary", set_device_summary, with_device_summary
                => FieldSpec::string().max_length(1024),
            scalar lan_device_number_of_entries: u32 = "LANDeviceNumberOfEntries",
                set_lan_device_number_of_entries, with_lan_device_number_of_entries
                => FieldSpec::number_of_entries("LANDevice"),
            scalar wan_device_number_of_entries: u32 = "WANDeviceNumberOfEntries",
                set_wan_device_number_of_entries, with_wan_device_number_of_entries
                => FieldSpec::unsigned_int(),
            object device_info: DeviceInfo = "DeviceInfo",
                device_info_mut, set_device_info, with_device_info
                => FieldSpec::object(),
            object management_server: ManagementServer = "ManagementServer",
                management_server_mut, set_management_server, with_management_server
                => FieldSpec::object(),
            object layer3_forwarding: Layer3Forwarding = "Layer3Forwarding",
                layer3_forwarding_mut, set_layer3_forwarding, with_layer3_forwarding
                => FieldSpec::object(),
            object ip_ping_diagnostics: IpPingDiagnostics = "IPPingDiagnostics",
                ip_ping_diagnostics_mut, set_ip_ping_diagnostics, with_ip_ping_diagnostics
                => FieldSpec::object(),
            object download_diagnostics: DownloadDiagnostics = "DownloadDiagnostics",
                download_diagnostics_mut, set_download_diagnostics, with_download_diagnostics
                => FieldSpec::object(),
        },
        tables: {
            lan_devices: LanDevice = "LANDevice",
                lan_devices_mut, set_lan_devices, with_lan_device
                => FieldSpec::table(),
        },
    }
}

entity! {
    /// General device information.
    pub struct DeviceInfo {
        path: "InternetGatewayDevice.DeviceInfo.",
        version: "1.0",
        unique: [],
        fields: {
            text manufacturer: String = "Manufacturer", set_manufacturer, with_manufacturer
                => FieldSpec::string().max_length(64),
            /// Organizationally unique identifier of the manufacturer, six
            /// upper-case hex digits.
            text manufacturer_oui: String = "ManufacturerOUI", set_manufacturer_oui, with_manufacturer_oui
                => FieldSpec::string().max_length(6).pattern("[0-9A-F]{6}"),
            text model_name: String = "ModelName", set_model_name, with_model_name
                => FieldSpec::string().max_length(64),
            text description: String = "Description", set_description, with_description
                => FieldSpec::string().max_length(256),
            text product_class: String = "ProductClass", set_product_class, with_product_class
                => FieldSpec::string().max_length(64),
            text serial_number: String = "SerialNumber", set_serial_number, with_serial_number
                => FieldSpec::string().max_length(64),
            text hardware_version: String = "HardwareVersion", set_hardware_version, with_hardware_version
                => FieldSpec::string().max_length(64),
            text software_version: String = "SoftwareVersion", set_software_version, with_software_version
                => FieldSpec::string().max_length(64).notify(ActiveNotify::ForceEnabled),
            text spec_version: String = "SpecVersion", set_spec_version, with_spec_version
                => FieldSpec::string().max_length(16),
            text provisioning_code: String = "ProvisioningCode", set_provisioning_code, with_provisioning_code
                => FieldSpec::string().writable().max_length(64).notify(ActiveNotify::ForceEnabled),
            scalar up_time: u32 = "UpTime", set_up_time, with_up_time
                => FieldSpec::unsigned_int().units("seconds").notify(ActiveNotify::CanDeny),
            scalar first_use_date: DateTime = "FirstUseDate", set_first_use_date, with_first_use_date
                => FieldSpec::date_time(),
            text device_log: String = "DeviceLog", set_device_log, with_device_log
                => FieldSpec::string().max_length(32768).notify(ActiveNotify::CanDeny),
        },
    }
}

entity! {
    /// CWMP client configuration: how and when the CPE contacts the ACS.
    pub struct ManagementServer {
        path: "InternetGatewayDevice.ManagementServer.",
        version: "1.0",
        unique: [],
        fields: {
            text url: String = "URL", set_url, with_url
                => FieldSpec::string().writable().max_length(256),
            text username: String = "Username", set_username, with_username
                => FieldSpec::string().writable().max_length(256),
            /// Reads always return an empty string on the wire.
            text password: String = "Password", set_password, with_password
                => FieldSpec::string().writable().max_length(256),
            scalar periodic_inform_enable: bool = "PeriodicInformEnable",
                set_periodic_inform_enable, with_periodic_inform_enable
                => FieldSpec::boolean().writable(),
            scalar periodic_inform_interval: u32 = "PeriodicInformInterval",
                set_periodic_inform_interval, with_periodic_inform_interval
                => FieldSpec::unsigned_int().writable().min(1).units("seconds"),
            scalar periodic_inform_time: DateTime = "PeriodicInformTime",
                set_periodic_inform_time, with_periodic_inform_time
                => FieldSpec::date_time().writable(),
            text parameter_key: String = "ParameterKey", set_parameter_key, with_parameter_key
                => FieldSpec::string().max_length(32).notify(ActiveNotify::CanDeny),
            text connection_request_url: String = "ConnectionRequestURL",
                set_connection_request_url, with_connection_request_url
                => FieldSpec::string().max_length(256).notify(ActiveNotify::ForceEnabled),
            text connection_request_username: String = "ConnectionRequestUsername",
                set_connection_request_username, with_connection_request_username
                => FieldSpec::string().writable().max_length(256),
            text connection_request_password: String = "ConnectionRequestPassword",
                set_connection_request_password, with_connection_request_password
                => FieldSpec::string().writable().max_length(256),
            scalar upgrades_managed: bool = "UpgradesManaged", set_upgrades_managed, with_upgrades_managed
                => FieldSpec::boolean().writable(),
            scalar default_active_notification_throttle: u32 = "DefaultActiveNotificationThrottle",
                set_default_active_notification_throttle, with_default_active_notification_throttle
                => FieldSpec::unsigned_int().writable().units("seconds"),
            scalar cwmp_retry_minimum_wait_interval: u32 = "CWMPRetryMinimumWaitInterval",
                set_cwmp_retry_minimum_wait_interval, with_cwmp_retry_minimum_wait_interval
                => FieldSpec::unsigned_int().writable().min(1).max(65535).default_value("5").units("seconds"),
            scalar cwmp_retry_interval_multiplier: u32 = "CWMPRetryIntervalMultiplier",
                set_cwmp_retry_interval_multiplier, with_cwmp_retry_interval_multiplier
                => FieldSpec::unsigned_int().writable().min(1000).max(65535).default_value("2000"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Entity, ValueType};

    #[test]
    fn test_root_tables_start_empty() {
        let igd = InternetGatewayDevice::new();
        assert!(igd.lan_devices().is_empty());
        assert!(igd.device_info().is_none());
        assert_eq!(igd.table_len("LANDevice"), Some(0));
        assert_eq!(igd.table_len("DeviceInfo"), None);
    }

    #[test]
    fn test_mut_accessor_creates_object() {
        let mut igd = InternetGatewayDevice::new();
        igd.device_info_mut().set_serial_number("SN0001");
        assert_eq!(
            igd.device_info().and_then(DeviceInfo::serial_number),
            Some("SN0001")
        );
    }

    #[test]
    fn test_root_schema() {
        let spec = InternetGatewayDevice::schema();
        assert_eq!(spec.path, "InternetGatewayDevice.");
        assert!(!spec.is_multi_instance());
        assert_eq!(spec.field("LANDevice").map(|f| f.value_type), Some(ValueType::Table));
        assert_eq!(
            spec.field("LANDeviceNumberOfEntries").and_then(|f| f.counts),
            Some("LANDevice")
        );
    }

    #[test]
    fn test_management_server_defaults_are_metadata_only() {
        let ms = ManagementServer::new();
        assert_eq!(ms.cwmp_retry_minimum_wait_interval(), None);
        let spec = ManagementServer::schema()
            .field("CWMPRetryMinimumWaitInterval")
            .unwrap();
        assert_eq!(spec.default, Some("5"));
    }

    #[test]
    fn test_children_in_declaration_order() {
        let igd = InternetGatewayDevice::new()
            .with_device_info(DeviceInfo::new())
            .with_layer3_forwarding(Layer3Forwarding::new())
            .with_lan_device(LanDevice::new())
            .with_lan_device(LanDevice::new());
        let names: Vec<(&str, Option<usize>)> =
            igd.children().iter().map(|c| (c.name, c.index)).collect();
        assert_eq!(
            names,
            vec![
                ("DeviceInfo", None),
                ("Layer3Forwarding", None),
                ("LANDevice", Some(1)),
                ("LANDevice", Some(2)),
            ]
        );
    }
}
