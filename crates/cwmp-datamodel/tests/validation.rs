// crates/cwmp-datamodel/tests/validation.rs

//! Validating whole parameter trees from their root objects.

use cwmp_datamodel::device::Device;
use cwmp_datamodel::device::dhcpv4::{Dhcpv4, Dhcpv4Client, ReqOption};
use cwmp_datamodel::device::ip::{Ip, IpInterface};
use cwmp_datamodel::device::wifi::{AccessPoint, AssociatedDevice, WiFi};
use cwmp_datamodel::igd::InternetGatewayDevice;
use cwmp_datamodel::igd::layer3::{Forwarding, Layer3Forwarding};
use cwmp_datamodel::order;
use cwmp_datamodel::validate::Scope;
use cwmp_datamodel::{
    Dbm, MacAddress, ModelError, ValidationOptions, Validator, ViolationKind, validate,
};

fn init_logger() {
    env_logger::try_init().ok(); // Ignore error if already initialized
}

#[test]
fn igd_tree_reports_concrete_paths() {
    init_logger();
    let igd = InternetGatewayDevice::new().with_layer3_forwarding(
        Layer3Forwarding::new()
            .with_forward_number_of_entries(2)
            .with_forwarding(Forwarding::new().with_mtu(1500))
            .with_forwarding(Forwarding::new().with_mtu(1600)),
    );

    let violations = validate(&igd);
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].path,
        "InternetGatewayDevice.Layer3Forwarding.Forwarding.2.MTU"
    );
    assert_eq!(
        violations[0].to_string(),
        "InternetGatewayDevice.Layer3Forwarding.Forwarding.2.MTU: value 1600 is above the maximum 1540"
    );
}

#[test]
fn device_tree_collects_violations_from_every_subtree() {
    init_logger();
    let mac: MacAddress = "00:11:22:33:44:55".parse().unwrap();
    let device = Device::new()
        .with_ip(
            Ip::new()
                .with_interface_number_of_entries(1)
                .with_interface(IpInterface::new().with_alias("lan").with_max_mtu_size(70000)),
        )
        .with_wifi(
            WiFi::new().with_access_point(
                AccessPoint::new()
                    .with_associated_device(AssociatedDevice::new().with_mac_address(mac))
                    .with_associated_device(
                        AssociatedDevice::new()
                            .with_mac_address(mac)
                            .with_signal_strength(Dbm(-60)),
                    ),
            ),
        );

    let violations = validate(&device);
    let summary: Vec<(&str, &ViolationKind)> =
        violations.iter().map(|v| (v.path.as_str(), &v.kind)).collect();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].0, "Device.IP.Interface.1.MaxMTUSize");
    assert_eq!(
        summary[0].1,
        &ViolationKind::AboveMaximum {
            value: 70000,
            max: 65535
        }
    );
    assert_eq!(summary[1].0, "Device.WiFi.AccessPoint.1.AssociatedDevice.2.");
    assert!(matches!(summary[1].1, ViolationKind::DuplicateKey { first: 1, .. }));
}

#[test]
fn ensure_valid_on_clean_tree() {
    init_logger();
    let mut rows = Vec::new();
    for tag in [1, 3, 6, 15] {
        order::push_ordered(&mut rows, ReqOption::new().with_tag(tag).with_enable(true)).unwrap();
    }
    let mut client = Dhcpv4Client::new().with_req_option_number_of_entries(4);
    client.set_req_options(rows);
    let device = Device::new().with_dhcpv4(
        Dhcpv4::new()
            .with_client_number_of_entries(1)
            .with_client(client),
    );
    assert_eq!(Validator::default().ensure_valid(&device), Ok(()));
}

#[test]
fn reordered_table_stays_unique() {
    init_logger();
    let mut client = Dhcpv4Client::new();
    for tag in [1, 3, 6] {
        order::push_ordered(client.req_options_mut(), ReqOption::new().with_tag(tag)).unwrap();
    }
    order::reorder(client.req_options_mut(), 2, 1).unwrap();
    order::remove_ordered(client.req_options_mut(), 0).unwrap();

    let orders: Vec<_> = client
        .req_options()
        .iter()
        .map(|o| (o.tag(), o.order()))
        .collect();
    assert_eq!(orders, vec![(Some(3), Some(2)), (Some(6), Some(1))]);
    assert!(validate(&client).is_empty());
}

#[test]
fn writable_scope_before_set_parameter_values() {
    init_logger();
    let ap = AccessPoint::new()
        .with_alias("a".repeat(80))
        .with_associated_device(AssociatedDevice::new().with_retransmissions(500));

    let all = validate(&ap);
    assert_eq!(all.len(), 2);

    let writable = Validator::new(ValidationOptions {
        scope: Scope::Writable,
        ..Default::default()
    })
    .validate(&ap);
    assert_eq!(writable.len(), 1);
    assert!(writable[0].path.ends_with("Alias"));
}

#[test]
fn validation_error_is_reported_through_model_error() {
    init_logger();
    let igd = InternetGatewayDevice::new().with_lan_device_number_of_entries(1);
    match Validator::default().ensure_valid(&igd) {
        Err(ModelError::Validation(violations)) => {
            assert_eq!(
                violations[0].kind,
                ViolationKind::EntryCountMismatch {
                    table: "LANDevice",
                    declared: 1,
                    actual: 0,
                }
            );
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
}
