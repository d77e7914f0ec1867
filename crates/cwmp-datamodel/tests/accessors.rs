// crates/cwmp-datamodel/tests/accessors.rs

//! Accessor contract of the generated entities: empty construction,
//! get/set identity, fluent `with_*` chains and append-only table `with_*`.

use cwmp_datamodel::device::dhcpv4::{Dhcpv4Client, ReqOption};
use cwmp_datamodel::device::dns::{DnsClient, DnsServer};
use cwmp_datamodel::device::wifi::RadioStats;
use cwmp_datamodel::igd::InternetGatewayDevice;
use cwmp_datamodel::igd::lan::{LanDevice, LanHostConfigManagement};
use cwmp_datamodel::igd::layer3::{Forwarding, Layer3Forwarding};
use cwmp_datamodel::{Counter32, DiagnosticsState, Dbm, Entity, HexBinary, MacAddress};
use std::net::{IpAddr, Ipv4Addr};

#[test]
fn forwarding_fluent_chain() {
    let route = Forwarding::new()
        .with_enable(true)
        .with_mtu(1500)
        .with_forwarding_metric(-1);

    assert_eq!(route.enable(), Some(true));
    assert_eq!(route.mtu(), Some(1500));
    assert_eq!(route.forwarding_metric(), Some(Forwarding::METRIC_UNUSED));
}

#[test]
fn table_getter_is_stable_and_empty() {
    let igd = InternetGatewayDevice::new();
    let first = igd.lan_devices();
    let second = igd.lan_devices();
    assert!(first.is_empty());
    assert!(std::ptr::eq(first, second));

    let lan = LanDevice::new().with_lan_ethernet_interface_number_of_entries(4);
    let igd = igd.with_lan_device(lan.clone());
    assert_eq!(igd.lan_devices().len(), 1);
    assert_eq!(igd.lan_devices()[0], lan);
}

#[test]
fn table_with_appends() {
    let client = DnsClient::new()
        .with_server(DnsServer::new().with_alias("one"))
        .with_server(DnsServer::new().with_alias("two"));
    let client = client.with_server(DnsServer::new().with_alias("three"));

    let aliases: Vec<_> = client.servers().iter().map(DnsServer::alias).collect();
    assert_eq!(aliases, vec![Some("one"), Some("two"), Some("three")]);
}

#[test]
fn set_then_get_returns_same_value() {
    let mut server = DnsServer::new();
    let addr = IpAddr::V4(Ipv4Addr::new(9, 9, 9, 9));
    server.set_dns_server(addr);
    server.set_alias("quad9");
    assert_eq!(server.dns_server(), Some(addr));
    assert_eq!(server.alias(), Some("quad9"));

    let mut option = ReqOption::new();
    option.set_value(HexBinary(vec![0xde, 0xad]));
    assert_eq!(option.value(), Some(&HexBinary(vec![0xde, 0xad])));

    let mut stats = RadioStats::new();
    stats.set_noise(Dbm(-95));
    stats.set_errors_sent(Counter32::NOT_AVAILABLE);
    assert_eq!(stats.noise(), Some(Dbm(-95)));
    assert!(!stats.errors_sent().unwrap().is_available());
}

#[test]
fn setters_store_out_of_range_values_unchanged() {
    let mut mgmt = LanHostConfigManagement::new();
    mgmt.set_dhcp_lease_time(-42);
    mgmt.set_domain_name("x".repeat(500));
    assert_eq!(mgmt.dhcp_lease_time(), Some(-42));
    assert_eq!(mgmt.domain_name().map(str::len), Some(500));
}

#[test]
fn table_mut_and_set() {
    let mut l3 = Layer3Forwarding::new();
    l3.forwardings_mut().push(Forwarding::new().with_mtu(1400));
    assert_eq!(l3.forwardings().len(), 1);

    l3.set_forwardings(vec![Forwarding::new(), Forwarding::new(), Forwarding::new()]);
    assert_eq!(l3.forwardings().len(), 3);
    assert_eq!(l3.table_len("Forwarding"), Some(3));
}

#[test]
fn object_mut_creates_once() {
    let mut client = Dhcpv4Client::new();
    assert!(client.alias().is_none());

    let mut igd = InternetGatewayDevice::new();
    assert!(igd.ip_ping_diagnostics().is_none());
    igd.ip_ping_diagnostics_mut().set_host("192.0.2.10");
    igd.ip_ping_diagnostics_mut()
        .set_diagnostics_state(DiagnosticsState::Requested);

    let ping = igd.ip_ping_diagnostics().unwrap();
    assert_eq!(ping.host(), Some("192.0.2.10"));
    assert_eq!(ping.diagnostics_state(), Some(DiagnosticsState::Requested));

    client.set_alias("wan");
    assert_eq!(client.alias(), Some("wan"));
}

#[test]
fn mac_address_round_trips_through_setter() {
    let mac: MacAddress = "a0:b1:c2:d3:e4:f5".parse().unwrap();
    let host = cwmp_datamodel::igd::lan::Host::new().with_mac_address(mac);
    assert_eq!(host.mac_address(), Some(mac));
    assert_eq!(mac.to_string(), "A0:B1:C2:D3:E4:F5");
}
