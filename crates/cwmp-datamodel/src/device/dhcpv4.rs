// crates/cwmp-datamodel/src/device/dhcpv4.rs

//! `Device.DHCPv4.`: DHCP clients with the options they send and request.

use super::EnableStatus;
use crate::macros::{entity, wire_enum};
use crate::order::Ordered;
use crate::schema::{ActiveNotify, FieldSpec};
use crate::types::HexBinary;
use std::net::Ipv4Addr;

wire_enum! {
    /// RFC 2131 client state machine.
    pub enum DhcpStatus {
        Init = "Init",
        Selecting = "Selecting",
        Requesting = "Requesting",
        Rebinding = "Rebinding",
        Bound = "Bound",
        Renewing = "Renewing",
    }
}

entity! {
    pub struct Dhcpv4 {
        path: "Device.DHCPv4.",
        version: "2.0",
        unique: [],
        fields: {
            scalar client_number_of_entries: u32 = "ClientNumberOfEntries",
                set_client_number_of_entries, with_client_number_of_entries
                => FieldSpec::number_of_entries("Client"),
        },
        tables: {
            clients: Dhcpv4Client = "Client", clients_mut, set_clients, with_client
                => FieldSpec::table(),
        },
    }
}

entity! {
    /// A DHCP client bound to one IP interface.
    pub struct Dhcpv4Client {
        path: "Device.DHCPv4.Client.{i}.",
        version: "2.0",
        unique: [["Alias"], ["Interface"]],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable(),
            text alias: String = "Alias", set_alias, with_alias
                => FieldSpec::string().writable().max_length(64),
            text interface: String = "Interface", set_interface, with_interface
                => FieldSpec::path_ref(256).writable(),
            scalar status: EnableStatus = "Status", set_status, with_status
                => FieldSpec::enumeration(EnableStatus::VALUES).default_value("Disabled"),
            scalar dhcp_status: DhcpStatus = "DHCPStatus", set_dhcp_status, with_dhcp_status
                => FieldSpec::enumeration(DhcpStatus::VALUES),
            /// Command parameter: writing `true` renews the lease. Reads as
            /// `false`.
            scalar renew: bool = "Renew", set_renew, with_renew
                => FieldSpec::boolean().writable(),
            scalar ip_address: Ipv4Addr = "IPAddress", set_ip_address, with_ip_address
                => FieldSpec::ip_address(),
            scalar subnet_mask: Ipv4Addr = "SubnetMask", set_subnet_mask, with_subnet_mask
                => FieldSpec::ip_address(),
            text ip_routers: String = "IPRouters", set_ip_routers, with_ip_routers
                => FieldSpec::string().list().max_length(256),
            text dns_servers: String = "DNSServers", set_dns_servers, with_dns_servers
                => FieldSpec::string().list().max_length(256),
            scalar lease_time_remaining: i32 = "LeaseTimeRemaining",
                set_lease_time_remaining, with_lease_time_remaining
                => FieldSpec::int().min(-1).units("seconds").notify(ActiveNotify::CanDeny),
            scalar dhcp_server: Ipv4Addr = "DHCPServer", set_dhcp_server, with_dhcp_server
                => FieldSpec::ip_address(),
            scalar passthrough_enable: bool = "PassthroughEnable", set_passthrough_enable, with_passthrough_enable
                => FieldSpec::boolean().writable().default_value("false"),
            text passthrough_dhcp_pool: String = "PassthroughDHCPPool",
                set_passthrough_dhcp_pool, with_passthrough_dhcp_pool
                => FieldSpec::path_ref(256).writable(),
            scalar sent_option_number_of_entries: u32 = "SentOptionNumberOfEntries",
                set_sent_option_number_of_entries, with_sent_option_number_of_entries
                => FieldSpec::number_of_entries("SentOption"),
            scalar req_option_number_of_entries: u32 = "ReqOptionNumberOfEntries",
                set_req_option_number_of_entries, with_req_option_number_of_entries
                => FieldSpec::number_of_entries("ReqOption"),
        },
        tables: {
            sent_options: SentOption = "SentOption", sent_options_mut, set_sent_options, with_sent_option
                => FieldSpec::table(),
            req_options: ReqOption = "ReqOption", req_options_mut, set_req_options, with_req_option
                => FieldSpec::table(),
        },
    }
}

entity! {
    /// An option the client includes in its requests.
    pub struct SentOption {
        path: "Device.DHCPv4.Client.{i}.SentOption.{i}.",
        version: "2.0",
        unique: [["Alias"], ["Tag"]],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable().default_value("false"),
            text alias: String = "Alias", set_alias, with_alias
                => FieldSpec::string().writable().max_length(64),
            scalar tag: u32 = "Tag", set_tag, with_tag
                => FieldSpec::unsigned_int().writable().min(1).max(254),
            value value: HexBinary = "Value", set_value, with_value
                => FieldSpec::hex_binary().writable().max_length(255),
        },
    }
}

entity! {
    /// An option the client asks the server for.
    ///
    /// Options are requested in ascending `Order`; see [`crate::order`].
    pub struct ReqOption {
        path: "Device.DHCPv4.Client.{i}.ReqOption.{i}.",
        version: "2.0",
        unique: [["Alias"], ["Tag"]],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable().default_value("false"),
            scalar order: u32 = "Order", set_order, with_order
                => FieldSpec::unsigned_int().writable().min(1),
            text alias: String = "Alias", set_alias, with_alias
                => FieldSpec::string().writable().max_length(64),
            scalar tag: u32 = "Tag", set_tag, with_tag
                => FieldSpec::unsigned_int().writable().min(1).max(254),
            /// Most recent value received from the server.
            value value: HexBinary = "Value", set_value, with_value
                => FieldSpec::hex_binary().max_length(255),
        },
    }
}

impl Ordered for ReqOption {
    const ORDER_FIELD: &'static str = "Order";

    fn order_key(&self) -> Option<u32> {
        self.order
    }

    fn set_order_key(&mut self, order: u32) {
        self.order = Some(order);
    }
}

impl Dhcpv4Client {
    /// Enabled request options in the order they go on the wire.
    pub fn requested_tags(&self) -> Vec<u32> {
        crate::order::precedence(&self.req_options)
            .into_iter()
            .map(|i| &self.req_options[i])
            .filter(|o| o.enable == Some(true))
            .filter_map(|o| o.tag)
            .collect()
    }
}
