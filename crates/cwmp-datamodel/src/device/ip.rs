// crates/cwmp-datamodel/src/device/ip.rs

//! `Device.IP.`: IP interfaces, their IPv4 addresses and counters, and the
//! ping diagnostic.

use super::{EnableStatus, InterfaceStatus};
use crate::diagnostics::{DiagnosticsState, IP_PING_STATES};
use crate::macros::{entity, wire_enum};
use crate::schema::{ActiveNotify, FieldSpec};
use crate::types::{Counter32, Counter64, IpPrefix};
use std::net::{IpAddr, Ipv4Addr};

wire_enum! {
    pub enum Ipv4Status {
        Disabled = "Disabled",
        Enabled = "Enabled",
        Error = "Error",
    }
}

wire_enum! {
    pub enum InterfaceType {
        Normal = "Normal",
        Loopback = "Loopback",
        Tunnel = "Tunnel",
        Tunneled = "Tunneled",
    }
}

wire_enum! {
    pub enum AddressingType {
        Dhcp = "DHCP",
        Ikev2 = "IKEv2",
        AutoIp = "AutoIP",
        Ipcp = "IPCP",
        Static = "Static",
    }
}

wire_enum! {
    pub enum ProtocolVersion {
        Any = "Any",
        Ipv4 = "IPv4",
        Ipv6 = "IPv6",
    }
}

entity! {
    pub struct Ip {
        path: "Device.IP.",
        version: "2.0",
        unique: [],
        fields: {
            scalar ipv4_capable: bool = "IPv4Capable", set_ipv4_capable, with_ipv4_capable
                => FieldSpec::boolean(),
            scalar ipv4_enable: bool = "IPv4Enable", set_ipv4_enable, with_ipv4_enable
                => FieldSpec::boolean().writable(),
            scalar ipv4_status: Ipv4Status = "IPv4Status", set_ipv4_status, with_ipv4_status
                => FieldSpec::enumeration(Ipv4Status::VALUES),
            /// IPv6 unique local address prefix of the device.
            scalar ula_prefix: IpPrefix = "ULAPrefix", set_ula_prefix, with_ula_prefix
                => FieldSpec::ip_prefix().writable(),
            scalar interface_number_of_entries: u32 = "InterfaceNumberOfEntries",
                set_interface_number_of_entries, with_interface_number_of_entries
                => FieldSpec::number_of_entries("Interface"),
            object diagnostics: IpDiagnostics = "Diagnostics", diagnostics_mut, set_diagnostics, with_diagnostics
                => FieldSpec::object(),
        },
        tables: {
            interfaces: IpInterface = "Interface", interfaces_mut, set_interfaces, with_interface
                => FieldSpec::table(),
        },
    }
}

entity! {
    /// An IP-layer interface stacked on a lower layer.
    pub struct IpInterface {
        path: "Device.IP.Interface.{i}.",
        version: "2.0",
        unique: [["Alias"], ["Name"]],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable().default_value("false"),
            scalar ipv4_enable: bool = "IPv4Enable", set_ipv4_enable, with_ipv4_enable
                => FieldSpec::boolean().writable(),
            scalar status: InterfaceStatus = "Status", set_status, with_status
                => FieldSpec::enumeration(InterfaceStatus::VALUES).default_value("Down"),
            text alias: String = "Alias", set_alias, with_alias
                => FieldSpec::string().writable().max_length(64),
            text name: String = "Name", set_name, with_name
                => FieldSpec::string().max_length(64),
            scalar last_change: u32 = "LastChange", set_last_change, with_last_change
                => FieldSpec::unsigned_int().units("seconds").notify(ActiveNotify::CanDeny),
            text lower_layers: String = "LowerLayers", set_lower_layers, with_lower_layers
                => FieldSpec::path_ref(1024).writable().list(),
            text router: String = "Router", set_router, with_router
                => FieldSpec::path_ref(256).writable(),
            /// Command parameter: writing `true` resets the interface.
            scalar reset: bool = "Reset", set_reset, with_reset
                => FieldSpec::boolean().writable(),
            scalar max_mtu_size: u32 = "MaxMTUSize", set_max_mtu_size, with_max_mtu_size
                => FieldSpec::unsigned_int().writable().min(64).max(65535),
            scalar interface_type: InterfaceType = "Type", set_interface_type, with_interface_type
                => FieldSpec::enumeration(InterfaceType::VALUES),
            scalar loopback: bool = "Loopback", set_loopback, with_loopback
                => FieldSpec::boolean().writable(),
            scalar ipv4_address_number_of_entries: u32 = "IPv4AddressNumberOfEntries",
                set_ipv4_address_number_of_entries, with_ipv4_address_number_of_entries
                => FieldSpec::number_of_entries("IPv4Address"),
            object stats: IpInterfaceStats = "Stats", stats_mut, set_stats, with_stats
                => FieldSpec::object(),
        },
        tables: {
            ipv4_addresses: Ipv4Address = "IPv4Address", ipv4_addresses_mut, set_ipv4_addresses, with_ipv4_address
                => FieldSpec::table(),
        },
    }
}

entity! {
    pub struct Ipv4Address {
        path: "Device.IP.Interface.{i}.IPv4Address.{i}.",
        version: "2.0",
        unique: [["Alias"], ["IPAddress"]],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable().default_value("false"),
            scalar status: EnableStatus = "Status", set_status, with_status
                => FieldSpec::enumeration(EnableStatus::VALUES).default_value("Disabled"),
            text alias: String = "Alias", set_alias, with_alias
                => FieldSpec::string().writable().max_length(64),
            scalar ip_address: Ipv4Addr = "IPAddress", set_ip_address, with_ip_address
                => FieldSpec::ip_address().writable(),
            scalar subnet_mask: Ipv4Addr = "SubnetMask", set_subnet_mask, with_subnet_mask
                => FieldSpec::ip_address().writable(),
            scalar addressing_type: AddressingType = "AddressingType", set_addressing_type, with_addressing_type
                => FieldSpec::enumeration(AddressingType::VALUES),
        },
    }
}

impl Ipv4Address {
    /// The address as a prefix, when both address and mask are set and the
    /// mask is contiguous.
    pub fn prefix(&self) -> Option<IpPrefix> {
        let mask = u32::from(self.subnet_mask?);
        let length = mask.leading_ones();
        if mask.checked_shl(length).unwrap_or(0) != 0 {
            return None;
        }
        IpPrefix::new(IpAddr::V4(self.ip_address?), length as u8).ok()
    }
}

entity! {
    /// Interface throughput and error counters.
    pub struct IpInterfaceStats {
        path: "Device.IP.Interface.{i}.Stats.",
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
            scalar discard_packets_sent: Counter32 = "DiscardPacketsSent",
                set_discard_packets_sent, with_discard_packets_sent
                => FieldSpec::counter32().notify(ActiveNotify::CanDeny),
            scalar discard_packets_received: Counter32 = "DiscardPacketsReceived",
                set_discard_packets_received, with_discard_packets_received
                => FieldSpec::counter32().notify(ActiveNotify::CanDeny),
        },
    }
}

entity! {
    pub struct IpDiagnostics {
        path: "Device.IP.Diagnostics.",
        version: "2.0",
        unique: [],
        fields: {
            scalar ipv4_ping_supported: bool = "IPv4PingSupported", set_ipv4_ping_supported, with_ipv4_ping_supported
                => FieldSpec::boolean(),
            object ip_ping: IpPing = "IPPing", ip_ping_mut, set_ip_ping, with_ip_ping
                => FieldSpec::object(),
        },
    }
}

entity! {
    /// ICMP echo test.
    pub struct IpPing {
        path: "Device.IP.Diagnostics.IPPing.",
        version: "2.0",
        unique: [],
        fields: {
            scalar diagnostics_state: DiagnosticsState = "DiagnosticsState",
                set_diagnostics_state, with_diagnostics_state
                => FieldSpec::enumeration(IP_PING_STATES).writable(),
            text interface: String = "Interface", set_interface, with_interface
                => FieldSpec::path_ref(256).writable(),
            scalar protocol_version: ProtocolVersion = "ProtocolVersion", set_protocol_version, with_protocol_version
                => FieldSpec::enumeration(ProtocolVersion::VALUES).writable(),
            text host: String = "Host", set_host, with_host
                => FieldSpec::string().writable().max_length(256),
            scalar number_of_repetitions: u32 = "NumberOfRepetitions",
                set_number_of_repetitions, with_number_of_repetitions
                => FieldSpec::unsigned_int().writable().min(1),
            scalar timeout: u32 = "Timeout", set_timeout, with_timeout
                => FieldSpec::unsigned_int().writable().min(1).units("milliseconds"),
            scalar data_block_size: u32 = "DataBlockSize", set_data_block_size, with_data_block_size
                => FieldSpec::unsigned_int().writable().min(1).max(65535).units("bytes"),
            scalar dscp: u32 = "DSCP", set_dscp, with_dscp
                => FieldSpec::unsigned_int().writable().min(0).max(63),
            scalar ip_address_used: IpAddr = "IPAddressUsed", set_ip_address_used, with_ip_address_used
                => FieldSpec::ip_address(),
            scalar success_count: u32 = "SuccessCount", set_success_count, with_success_count
                => FieldSpec::unsigned_int(),
            scalar failure_count: u32 = "FailureCount", set_failure_count, with_failure_count
                => FieldSpec::unsigned_int(),
            scalar average_response_time: u32 = "AverageResponseTime",
                set_average_response_time, with_average_response_time
                => FieldSpec::unsigned_int().units("milliseconds"),
            scalar minimum_response_time: u32 = "MinimumResponseTime",
                set_minimum_response_time, with_minimum_response_time
                => FieldSpec::unsigned_int().units("milliseconds"),
            scalar maximum_response_time: u32 = "MaximumResponseTime",
                set_maximum_response_time, with_maximum_response_time
                => FieldSpec::unsigned_int().units("milliseconds"),
            scalar average_response_time_detailed: u32 = "AverageResponseTimeDetailed",
                set_average_response_time_detailed, with_average_response_time_detailed
                => FieldSpec::unsigned_int().units("microseconds"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Entity, ParameterValue};

    #[test]
    fn test_ipv4_prefix() {
        let addr = Ipv4Address::new()
            .with_ip_address(Ipv4Addr::new(192, 168, 1, 1))
            .with_subnet_mask(Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(addr.prefix().map(|p| p.to_string()), Some("192.168.1.1/24".into()));

        let holey = addr.clone().with_subnet_mask(Ipv4Addr::new(255, 0, 255, 0));
        assert_eq!(holey.prefix(), None);
        assert_eq!(Ipv4Address::new().prefix(), None);
    }

    #[test]
    fn test_ula_prefix_parameter() {
        let ip = Ip::new().with_ula_prefix("fd00:1234::/48".parse().unwrap());
        assert_eq!(
            ip.parameter("ULAPrefix"),
            Some(ParameterValue::Text("fd00:1234::/48".into()))
        );
    }

    #[test]
    fn test_counter64_parameter() {
        let stats = IpInterfaceStats::new().with_bytes_sent(Counter64(u64::MAX));
        assert_eq!(stats.parameter("BytesSent"), Some(ParameterValue::Unsigned(u64::MAX)));
    }

    #[test]
    fn test_interface_nesting() {
        let ip = Ip::new().with_interface(
            IpInterface::new()
                .with_name("br-lan")
                .with_ipv4_address(Ipv4Address::new().with_alias("lan"))
                .with_stats(IpInterfaceStats::new()),
        );
        let iface = &ip.interfaces()[0];
        assert_eq!(iface.ipv4_addresses()[0].alias(), Some("lan"));
        let names: Vec<&str> = iface.children().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Stats", "IPv4Address"]);
    }

    #[test]
    fn test_ping_state_values() {
        let canceled = IpPing::new().with_diagnostics_state(DiagnosticsState::Canceled);
        assert!(crate::validate(&canceled).is_empty());
        let timeout = IpPing::new().with_diagnostics_state(DiagnosticsState::ErrorTimeout);
        let violations = crate::validate(&timeout);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "Device.IP.Diagnostics.IPPing.DiagnosticsState");
    }
}
