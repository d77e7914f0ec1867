// crates/cwmp-datamodel/src/device/mod.rs

//! TR-181 `Device.` data model.

pub mod dhcpv4;
pub mod dns;
pub mod ip;
pub mod wifi;

use self::dhcpv4::Dhcpv4;
use self::dns::Dns;
use self::ip::Ip;
use self::wifi::WiFi;
use crate::macros::{entity, wire_enum};
use crate::schema::{ActiveNotify, FieldSpec};
use crate::types::DateTime;

wire_enum! {
    /// Status of an enableable object that can fail to apply its
    /// configuration.
    pub enum EnableStatus {
        Disabled = "Disabled",
        Enabled = "Enabled",
        ErrorMisconfigured = "Error_Misconfigured",
        Error = "Error",
    }
}

wire_enum! {
    /// Operational state of a network interface (RFC 2863 `ifOperStatus`).
    pub enum InterfaceStatus {
        Up = "Up",
        Down = "Down",
        Unknown = "Unknown",
        Dormant = "Dormant",
        NotPresent = "NotPresent",
        LowerLayerDown = "LowerLayerDown",
        Error = "Error",
    }
}

impl InterfaceStatus {
    /// Whether the interface can pass packets.
    pub fn is_up(&self) -> bool {
        *self == InterfaceStatus::Up
    }
}

entity! {
    /// Root object of a TR-181 device.
    pub struct Device {
        path: "Device.",
        version: "2.0",
        unique: [],
        fields: {
            /// Data-model version the device implements, e.g. `2.12`.
            text root_data_model_version: String = "RootDataModelVersion",
                set_root_data_model_version, with_root_data_model_version
                => FieldSpec::string().max_length(32).pattern("2\\.\\d+"),
            scalar interface_stack_number_of_entries: u32 = "InterfaceStackNumberOfEntries",
                set_interface_stack_number_of_entries, with_interface_stack_number_of_entries
                => FieldSpec::unsigned_int(),
            object device_info: DeviceInfo = "DeviceInfo", device_info_mut, set_device_info, with_device_info
                => FieldSpec::object(),
            object dns: Dns = "DNS", dns_mut, set_dns, with_dns
                => FieldSpec::object(),
            object dhcpv4: Dhcpv4 = "DHCPv4", dhcpv4_mut, set_dhcpv4, with_dhcpv4
                => FieldSpec::object(),
            object ip: Ip = "IP", ip_mut, set_ip, with_ip
                => FieldSpec::object(),
            object wifi: WiFi = "WiFi", wifi_mut, set_wifi, with_wifi
                => FieldSpec::object(),
        },
    }
}

entity! {
    pub struct DeviceInfo {
        path: "Device.DeviceInfo.",
        version: "2.0",
        unique: [],
        fields: {
            text manufacturer: String = "Manufacturer", set_manufacturer, with_manufacturer
                => FieldSpec::string().max_length(64),
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
            text provisioning_code: String = "ProvisioningCode", set_provisioning_code, with_provisioning_code
                => FieldSpec::string().writable().max_length(64).notify(ActiveNotify::ForceEnabled),
            scalar up_time: u32 = "UpTime", set_up_time, with_up_time
                => FieldSpec::unsigned_int().units("seconds").notify(ActiveNotify::CanDeny),
            scalar first_use_date: DateTime = "FirstUseDate", set_first_use_date, with_first_use_date
                => FieldSpec::date_time(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Entity;

    #[test]
    fn test_device_children() {
        let mut device = Device::new().with_device_info(DeviceInfo::new().with_model_name("X1"));
        device.dns_mut().client_mut().set_enable(true);
        let names: Vec<&str> = device.children().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["DeviceInfo", "DNS"]);
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(EnableStatus::ErrorMisconfigured.as_str(), "Error_Misconfigured");
        assert!(InterfaceStatus::Up.is_up());
        assert!(!"LowerLayerDown".parse::<InterfaceStatus>().unwrap().is_up());
    }
}
