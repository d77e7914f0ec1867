// crates/cwmp-datamodel/src/igd/lan.rs

//! `InternetGatewayDevice.LANDevice.{i}.` and the LAN-side objects below it.

use crate::macros::{entity, wire_enum};
use crate::order::Ordered;
use crate::schema::{ActiveNotify, FieldSpec};
use crate::types::{Counter32, MacAddress};
use std::net::Ipv4Addr;

wire_enum! {
    pub enum PoolStatus {
        Disabled = "Disabled",
        Enabled = "Enabled",
        ErrorMisconfigured = "Error_Misconfigured",
        Error = "Error",
    }
}

wire_enum! {
    /// How `VendorClassID` is compared with DHCP option 60.
    pub enum VendorClassIdMode {
        Exact = "Exact",
        Prefix = "Prefix",
        Suffix = "Suffix",
        Substring = "Substring",
    }
}

wire_enum! {
    pub enum AddressSource {
        Dhcp = "DHCP",
        Static = "Static",
        AutoIp = "AutoIP",
    }
}

wire_enum! {
    pub enum HostInterfaceType {
        Ethernet = "Ethernet",
        Usb = "USB",
        Ieee80211 = "802.11",
        HomePna = "HomePNA",
        HomePlug = "HomePlug",
        Other = "Other",
    }
}

wire_enum! {
    pub enum EthernetStatus {
        Up = "Up",
        NoLink = "NoLink",
        Error = "Error",
        Disabled = "Disabled",
    }
}

wire_enum! {
    pub enum MaxBitRate {
        Mbps10 = "10",
        Mbps100 = "100",
        Mbps1000 = "1000",
        Auto = "Auto",
    }
}

wire_enum! {
    pub enum DuplexMode {
        Half = "Half",
        Full = "Full",
        Auto = "Auto",
    }
}

entity! {
    /// One LAN side of the gateway.
    pub struct LanDevice {
        path: "InternetGatewayDevice.LANDevice.{i}.",
        version: "1.0",
        unique: [],
        fields: {
            scalar lan_ethernet_interface_number_of_entries: u32 = "LANEthernetInterfaceNumberOfEntries",
                set_lan_ethernet_interface_number_of_entries, with_lan_ethernet_interface_number_of_entries
                => FieldSpec::number_of_entries("LANEthernetInterfaceConfig"),
            scalar lan_usb_interface_number_of_entries: u32 = "LANUSBInterfaceNumberOfEntries",
                set_lan_usb_interface_number_of_entries, with_lan_usb_interface_number_of_entries
                => FieldSpec::unsigned_int(),
            scalar lan_wlan_configuration_number_of_entries: u32 = "LANWLANConfigurationNumberOfEntries",
                set_lan_wlan_configuration_number_of_entries, with_lan_wlan_configuration_number_of_entries
                => FieldSpec::unsigned_int(),
            object lan_host_config_management: LanHostConfigManagement = "LANHostConfigManagement",
                lan_host_config_management_mut, set_lan_host_config_management, with_lan_host_config_management
                => FieldSpec::object(),
            object hosts: Hosts = "Hosts", hosts_mut, set_hosts, with_hosts
                => FieldSpec::object(),
        },
        tables: {
            lan_ethernet_interface_configs: LanEthernetInterfaceConfig = "LANEthernetInterfaceConfig",
                lan_ethernet_interface_configs_mut, set_lan_ethernet_interface_configs,
                with_lan_ethernet_interface_config
                => FieldSpec::table(),
        },
    }
}

entity! {
    /// DHCP server and addressing configuration of a LAN.
    pub struct LanHostConfigManagement {
        path: "InternetGatewayDevice.LANDevice.{i}.LANHostConfigManagement.",
        version: "1.0",
        unique: [],
        fields: {
            scalar mac_address: MacAddress = "MACAddress", set_mac_address, with_mac_address
                => FieldSpec::mac_address(),
            scalar dhcp_server_configurable: bool = "DHCPServerConfigurable",
                set_dhcp_server_configurable, with_dhcp_server_configurable
                => FieldSpec::boolean().writable(),
            scalar dhcp_server_enable: bool = "DHCPServerEnable", set_dhcp_server_enable, with_dhcp_server_enable
                => FieldSpec::boolean().writable(),
            scalar dhcp_relay: bool = "DHCPRelay", set_dhcp_relay, with_dhcp_relay
                => FieldSpec::boolean(),
            scalar min_address: Ipv4Addr = "MinAddress", set_min_address, with_min_address
                => FieldSpec::ip_address().writable(),
            scalar max_address: Ipv4Addr = "MaxAddress", set_max_address, with_max_address
                => FieldSpec::ip_address().writable(),
            text reserved_addresses: String = "ReservedAddresses", set_reserved_addresses, with_reserved_addresses
                => FieldSpec::string().writable().list().max_length(256),
            scalar subnet_mask: Ipv4Addr = "SubnetMask", set_subnet_mask, with_subnet_mask
                => FieldSpec::ip_address().writable(),
            text dns_servers: String = "DNSServers", set_dns_servers, with_dns_servers
                => FieldSpec::string().writable().list().max_length(64),
            text domain_name: String = "DomainName", set_domain_name, with_domain_name
                => FieldSpec::string().writable().max_length(64),
            text ip_routers: String = "IPRouters", set_ip_routers, with_ip_routers
                => FieldSpec::string().writable().list().max_length(64),
            /// Lease time in seconds; `-1` is an infinite lease.
            scalar dhcp_lease_time: i32 = "DHCPLeaseTime", set_dhcp_lease_time, with_dhcp_lease_time
                => FieldSpec::int().writable().min(-1).units("seconds"),
            scalar dhcp_option_number_of_entries: u32 = "DHCPOptionNumberOfEntries",
                set_dhcp_option_number_of_entries, with_dhcp_option_number_of_entries
                => FieldSpec::number_of_entries("DHCPOption"),
            scalar dhcp_conditional_serving_pool_number_of_entries: u32 = "DHCPConditionalServingPoolNumberOfEntries",
                set_dhcp_conditional_serving_pool_number_of_entries,
                with_dhcp_conditional_serving_pool_number_of_entries
                => FieldSpec::number_of_entries("DHCPConditionalServingPool"),
        },
        tables: {
            dhcp_options: DhcpOption = "DHCPOption",
                dhcp_options_mut, set_dhcp_options, with_dhcp_option
                => FieldSpec::table(),
            conditional_serving_pools: DhcpConditionalServingPool = "DHCPConditionalServingPool",
                conditional_serving_pools_mut, set_conditional_serving_pools, with_conditional_serving_pool
                => FieldSpec::table(),
        },
    }
}

entity! {
    /// A DHCP option the server hands out to every client.
    pub struct DhcpOption {
        path: "InternetGatewayDevice.LANDevice.{i}.LANHostConfigManagement.DHCPOption.{i}.",
        version: "1.1",
        unique: [["Tag"]],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable().default_value("false"),
            scalar tag: u32 = "Tag", set_tag, with_tag
                => FieldSpec::unsigned_int().writable().min(1).max(254),
            /// Base64-encoded option payload.
            text value: String = "Value", set_value, with_value
                => FieldSpec::string().writable().max_length(340),
        },
    }
}

entity! {
    /// A DHCP server pool selected by client classification.
    ///
    /// Pools are evaluated in ascending `PoolOrder`; see [`crate::order`].
    pub struct DhcpConditionalServingPool {
        path: "InternetGatewayDevice.LANDevice.{i}.LANHostConfigManagement.DHCPConditionalServingPool.{i}.",
        version: "1.1",
        unique: [["Alias"], ["PoolOrder"]],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable().default_value("false"),
            scalar status: PoolStatus = "Status", set_status, with_status
                => FieldSpec::enumeration(PoolStatus::VALUES).default_value("Disabled"),
            text alias: String = "Alias", set_alias, with_alias
                => FieldSpec::string().writable().max_length(64),
            scalar pool_order: u32 = "PoolOrder", set_pool_order, with_pool_order
                => FieldSpec::unsigned_int().writable().min(1),
            text source_interface: String = "SourceInterface", set_source_interface, with_source_interface
                => FieldSpec::string().writable().list().max_length(1024),
            text vendor_class_id: String = "VendorClassID", set_vendor_class_id, with_vendor_class_id
                => FieldSpec::string().writable().max_length(255),
            scalar vendor_class_id_exclude: bool = "VendorClassIDExclude",
                set_vendor_class_id_exclude, with_vendor_class_id_exclude
                => FieldSpec::boolean().writable().default_value("false"),
            scalar vendor_class_id_mode: VendorClassIdMode = "VendorClassIDMode",
                set_vendor_class_id_mode, with_vendor_class_id_mode
                => FieldSpec::enumeration(VendorClassIdMode::VALUES).writable().default_value("Exact"),
            text client_id: String = "ClientID", set_client_id, with_client_id
                => FieldSpec::string().writable().max_length(255),
            text user_class_id: String = "UserClassID", set_user_class_id, with_user_class_id
                => FieldSpec::string().writable().max_length(255),
            scalar chaddr: MacAddress = "Chaddr", set_chaddr, with_chaddr
                => FieldSpec::mac_address().writable(),
            scalar chaddr_mask: MacAddress = "ChaddrMask", set_chaddr_mask, with_chaddr_mask
                => FieldSpec::mac_address().writable(),
            scalar locally_served: bool = "LocallyServed", set_locally_served, with_locally_served
                => FieldSpec::boolean().writable().default_value("false"),
            scalar min_address: Ipv4Addr = "MinAddress", set_min_address, with_min_address
                => FieldSpec::ip_address().writable(),
            scalar max_address: Ipv4Addr = "MaxAddress", set_max_address, with_max_address
                => FieldSpec::ip_address().writable(),
            scalar subnet_mask: Ipv4Addr = "SubnetMask", set_subnet_mask, with_subnet_mask
                => FieldSpec::ip_address().writable(),
            text dns_servers: String = "DNSServers", set_dns_servers, with_dns_servers
                => FieldSpec::string().writable().list().max_length(64),
            text domain_name: String = "DomainName", set_domain_name, with_domain_name
                => FieldSpec::string().writable().max_length(64),
            text ip_routers: String = "IPRouters", set_ip_routers, with_ip_routers
                => FieldSpec::string().writable().list().max_length(64),
            scalar dhcp_lease_time: i32 = "DHCPLeaseTime", set_dhcp_lease_time, with_dhcp_lease_time
                => FieldSpec::int().writable().min(-1).units("seconds").default_value("86400"),
        },
    }
}

impl Ordered for DhcpConditionalServingPool {
    const ORDER_FIELD: &'static str = "PoolOrder";

    fn order_key(&self) -> Option<u32> {
        self.pool_order
    }

    fn set_order_key(&mut self, order: u32) {
        self.pool_order = Some(order);
    }
}

entity! {
    pub struct Hosts {
        path: "InternetGatewayDevice.LANDevice.{i}.Hosts.",
        version: "1.0",
        unique: [],
        fields: {
            scalar host_number_of_entries: u32 = "HostNumberOfEntries",
                set_host_number_of_entries, with_host_number_of_entries
                => FieldSpec::number_of_entries("Host"),
        },
        tables: {
            hosts: Host = "Host", hosts_mut, set_hosts, with_host
                => FieldSpec::table(),
        },
    }
}

entity! {
    /// A LAN client seen by the gateway.
    pub struct Host {
        path: "InternetGatewayDevice.LANDevice.{i}.Hosts.Host.{i}.",
        version: "1.0",
        unique: [["MACAddress"]],
        fields: {
            scalar ip_address: Ipv4Addr = "IPAddress", set_ip_address, with_ip_address
                => FieldSpec::ip_address(),
            scalar address_source: AddressSource = "AddressSource", set_address_source, with_address_source
                => FieldSpec::enumeration(AddressSource::VALUES),
            scalar lease_time_remaining: i32 = "LeaseTimeRemaining",
                set_lease_time_remaining, with_lease_time_remaining
                => FieldSpec::int().min(-1).units("seconds").notify(ActiveNotify::CanDeny),
            scalar mac_address: MacAddress = "MACAddress", set_mac_address, with_mac_address
                => FieldSpec::mac_address(),
            text host_name: String = "HostName", set_host_name, with_host_name
                => FieldSpec::string().max_length(64),
            scalar interface_type: HostInterfaceType = "InterfaceType", set_interface_type, with_interface_type
                => FieldSpec::enumeration(HostInterfaceType::VALUES),
            scalar active: bool = "Active", set_active, with_active
                => FieldSpec::boolean(),
        },
    }
}

entity! {
    /// A LAN Ethernet port.
    pub struct LanEthernetInterfaceConfig {
        path: "InternetGatewayDevice.LANDevice.{i}.LANEthernetInterfaceConfig.{i}.",
        version: "1.0",
        unique: [],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable(),
            scalar status: EthernetStatus = "Status", set_status, with_status
                => FieldSpec::enumeration(EthernetStatus::VALUES),
            scalar mac_address: MacAddress = "MACAddress", set_mac_address, with_mac_address
                => FieldSpec::mac_address(),
            scalar mac_address_control_enabled: bool = "MACAddressControlEnabled",
                set_mac_address_control_enabled, with_mac_address_control_enabled
                => FieldSpec::boolean().writable(),
            scalar max_bit_rate: MaxBitRate = "MaxBitRate", set_max_bit_rate, with_max_bit_rate
                => FieldSpec::enumeration(MaxBitRate::VALUES).writable().units("Mbps"),
            scalar duplex_mode: DuplexMode = "DuplexMode", set_duplex_mode, with_duplex_mode
                => FieldSpec::enumeration(DuplexMode::VALUES).writable(),
            object stats: LanEthernetStats = "Stats", stats_mut, set_stats, with_stats
                => FieldSpec::object(),
        },
    }
}

entity! {
    pub struct LanEthernetStats {
        path: "InternetGatewayDevice.LANDevice.{i}.LANEthernetInterfaceConfig.{i}.Stats.",
        version: "1.0",
        unique: [],
        fields: {
            scalar bytes_sent: Counter32 = "BytesSent", set_bytes_sent, with_bytes_sent
                => FieldSpec::counter32().units("bytes").notify(ActiveNotify::CanDeny),
            scalar bytes_received: Counter32 = "BytesReceived", set_bytes_received, with_bytes_received
                => FieldSpec::counter32().units("bytes").notify(ActiveNotify::CanDeny),
            scalar packets_sent: Counter32 = "PacketsSent", set_packets_sent, with_packets_sent
                => FieldSpec::counter32().units("packets").notify(ActiveNotify::CanDeny),
            scalar packets_received: Counter32 = "PacketsReceived", set_packets_received, with_packets_received
                => FieldSpec::counter32().units("packets").notify(ActiveNotify::CanDeny),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order;
    use crate::schema::{Entity, ParameterValue};

    #[test]
    fn test_nested_mut_accessors() {
        let mut lan = LanDevice::new();
        lan.lan_host_config_management_mut()
            .dhcp_options_mut()
            .push(DhcpOption::new().with_tag(42).with_value("AQID"));
        let mgmt = lan.lan_host_config_management().unwrap();
        assert_eq!(mgmt.dhcp_options().len(), 1);
        assert_eq!(mgmt.dhcp_options()[0].tag(), Some(42));
        assert_eq!(mgmt.dhcp_options()[0].value(), Some("AQID"));
    }

    #[test]
    fn test_mac_address_parameter_is_text() {
        let host = Host::new().with_mac_address(MacAddress([0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]));
        assert_eq!(
            host.parameter("MACAddress"),
            Some(ParameterValue::Text("00:1A:2B:3C:4D:5E".into()))
        );
    }

    #[test]
    fn test_interface_type_wire_value() {
        assert_eq!(HostInterfaceType::Ieee80211.as_str(), "802.11");
        assert_eq!("802.11".parse::<HostInterfaceType>(), Ok(HostInterfaceType::Ieee80211));
        assert_eq!(MaxBitRate::Mbps100.to_string(), "100");
    }

    #[test]
    fn test_pools_follow_pool_order() {
        let mut pools = Vec::new();
        order::push_ordered(&mut pools, DhcpConditionalServingPool::new().with_alias("a")).unwrap();
        order::push_ordered(&mut pools, DhcpConditionalServingPool::new().with_alias("b")).unwrap();
        order::push_ordered(
            &mut pools,
            DhcpConditionalServingPool::new().with_alias("c").with_pool_order(1),
        )
        .unwrap();
        let orders: Vec<(Option<&str>, Option<u32>)> =
            pools.iter().map(|p| (p.alias(), p.pool_order())).collect();
        assert_eq!(
            orders,
            vec![(Some("a"), Some(2)), (Some("b"), Some(3)), (Some("c"), Some(1))]
        );
    }
}
