// crates/cwmp-datamodel/src/device/dns.rs

//! `Device.DNS.`: the DNS client and its configured servers.

use crate::macros::{entity, wire_enum};
use crate::schema::FieldSpec;
use std::net::IpAddr;

/// Record types a `SupportedRecordTypes` list may name.
pub const RECORD_TYPES: &[&str] = &["A", "AAAA", "SRV", "PTR"];

wire_enum! {
    pub enum ClientStatus {
        Disabled = "Disabled",
        Enabled = "Enabled",
        Error = "Error",
    }
}

wire_enum! {
    /// How a DNS server entry was configured.
    pub enum ServerType {
        Dhcpv4 = "DHCPv4",
        Dhcpv6 = "DHCPv6",
        RouterAdvertisement = "RouterAdvertisement",
        Ipcp = "IPCP",
        Static = "Static",
    }
}

entity! {
    pub struct Dns {
        path: "Device.DNS.",
        version: "2.0",
        unique: [],
        fields: {
            /// Comma-separated subset of [`RECORD_TYPES`].
            text supported_record_types: String = "SupportedRecordTypes",
                set_supported_record_types, with_supported_record_types
                => FieldSpec::enumeration(RECORD_TYPES).list(),
            object client: DnsClient = "Client", client_mut, set_client, with_client
                => FieldSpec::object(),
        },
    }
}

entity! {
    pub struct DnsClient {
        path: "Device.DNS.Client.",
        version: "2.0",
        unique: [],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable(),
            scalar status: ClientStatus = "Status", set_status, with_status
                => FieldSpec::enumeration(ClientStatus::VALUES),
            scalar server_number_of_entries: u32 = "ServerNumberOfEntries",
                set_server_number_of_entries, with_server_number_of_entries
                => FieldSpec::number_of_entries("Server"),
        },
        tables: {
            servers: DnsServer = "Server", servers_mut, set_servers, with_server
                => FieldSpec::table(),
        },
    }
}

entity! {
    /// A DNS server the client may query.
    pub struct DnsServer {
        path: "Device.DNS.Client.Server.{i}.",
        version: "2.0",
        unique: [["Alias"], ["DNSServer"]],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable().default_value("false"),
            scalar status: ClientStatus = "Status", set_status, with_status
                => FieldSpec::enumeration(ClientStatus::VALUES).default_value("Disabled"),
            text alias: String = "Alias", set_alias, with_alias
                => FieldSpec::string().writable().max_length(64),
            scalar dns_server: IpAddr = "DNSServer", set_dns_server, with_dns_server
                => FieldSpec::ip_address().writable(),
            text interface: String = "Interface", set_interface, with_interface
                => FieldSpec::path_ref(256).writable(),
            /// Entries learned dynamically cannot be written by the ACS.
            scalar server_type: ServerType = "Type", set_server_type, with_server_type
                => FieldSpec::enumeration(ServerType::VALUES).default_value("Static"),
        },
    }
}

impl DnsClient {
    /// Servers that are enabled, in table order.
    pub fn enabled_servers(&self) -> impl Iterator<Item = &DnsServer> {
        self.servers.iter().filter(|s| s.enable == Some(true))
    }
}
