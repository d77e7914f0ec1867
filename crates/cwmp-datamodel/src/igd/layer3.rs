// crates/cwmp-datamodel/src/igd/layer3.rs

//! `InternetGatewayDevice.Layer3Forwarding.`: the static routing table.

use crate::macros::{entity, wire_enum};
use crate::schema::FieldSpec;
use std::net::Ipv4Addr;

wire_enum! {
    /// Operational status of a forwarding entry.
    pub enum ForwardingStatus {
        Disabled = "Disabled",
        Enabled = "Enabled",
        Error = "Error",
    }
}

wire_enum! {
    /// Kind of destination a forwarding entry matches.
    pub enum ForwardingType {
        Default = "Default",
        Network = "Network",
        Host = "Host",
    }
}

entity! {
    pub struct Layer3Forwarding {
        path: "InternetGatewayDevice.Layer3Forwarding.",
        version: "1.0",
        unique: [],
        fields: {
            /// Path of the WAN connection service used as the default route.
            text default_connection_service: String = "DefaultConnectionService",
                set_default_connection_service, with_default_connection_service
                => FieldSpec::path_ref(256).writable(),
            scalar forward_number_of_entries: u32 = "ForwardNumberOfEntries",
                set_forward_number_of_entries, with_forward_number_of_entries
                => FieldSpec::number_of_entries("Forwarding"),
        },
        tables: {
            forwardings: Forwarding = "Forwarding",
                forwardings_mut, set_forwardings, with_forwarding
                => FieldSpec::table(),
        },
    }
}

entity! {
    /// One static route.
    ///
    /// An address left unset is treated by the device as the empty string,
    /// i.e. a wildcard. Two routes whose key parts differ only in being
    /// unset therefore collide in the unique-key check.
    pub struct Forwarding {
        path: "InternetGatewayDevice.Layer3Forwarding.Forwarding.{i}.",
        version: "1.0",
        unique: [
            ["Alias"],
            ["DestIPAddress", "DestSubnetMask", "SourceIPAddress", "SourceSubnetMask", "ForwardingPolicy"],
        ],
        fields: {
            scalar enable: bool = "Enable", set_enable, with_enable
                => FieldSpec::boolean().writable().default_value("false"),
            scalar status: ForwardingStatus = "Status", set_status, with_status
                => FieldSpec::enumeration(ForwardingStatus::VALUES).default_value("Disabled"),
            text alias: String = "Alias", set_alias, with_alias
                => FieldSpec::string().writable().max_length(64),
            scalar static_route: bool = "StaticRoute", set_static_route, with_static_route
                => FieldSpec::boolean().default_value("true"),
            scalar forwarding_type: ForwardingType = "Type", set_forwarding_type, with_forwarding_type
                => FieldSpec::enumeration(ForwardingType::VALUES).writable().default_value("Host"),
            scalar dest_ip_address: Ipv4Addr = "DestIPAddress", set_dest_ip_address, with_dest_ip_address
                => FieldSpec::ip_address().writable(),
            scalar dest_subnet_mask: Ipv4Addr = "DestSubnetMask", set_dest_subnet_mask, with_dest_subnet_mask
                => FieldSpec::ip_address().writable(),
            scalar source_ip_address: Ipv4Addr = "SourceIPAddress",
                set_source_ip_address, with_source_ip_address
                => FieldSpec::ip_address().writable(),
            scalar source_subnet_mask: Ipv4Addr = "SourceSubnetMask",
                set_source_subnet_mask, with_source_subnet_mask
                => FieldSpec::ip_address().writable(),
            /// Class of traffic this route applies to; `-1` matches all.
            scalar forwarding_policy: i32 = "ForwardingPolicy", set_forwarding_policy, with_forwarding_policy
                => FieldSpec::int().writable().min(-1).default_value("-1"),
            scalar gateway_ip_address: Ipv4Addr = "GatewayIPAddress",
                set_gateway_ip_address, with_gateway_ip_address
                => FieldSpec::ip_address().writable(),
            text interface: String = "Interface", set_interface, with_interface
                => FieldSpec::path_ref(256).writable(),
            /// Route metric. [`Forwarding::METRIC_UNUSED`] when the metric is
            /// not used.
            scalar forwarding_metric: i32 = "ForwardingMetric", set_forwarding_metric, with_forwarding_metric
                => FieldSpec::int().writable().min(-1).default_value("-1"),
            scalar mtu: u32 = "MTU", set_mtu, with_mtu
                => FieldSpec::unsigned_int().writable().min(1).max(1540),
        },
    }
}

impl Forwarding {
    /// `ForwardingMetric` value meaning the metric is not used.
    pub const METRIC_UNUSED: i32 = -1;

    /// A route is usable when enabled and reported up by the device.
    pub fn is_active(&self) -> bool {
        self.enable == Some(true) && self.status == Some(ForwardingStatus::Enabled)
    }
}
