// crates/cwmp-datamodel/src/types.rs

//! Shared primitive value types reused across the data models.
//!
//! Each type wraps a single primitive and renders to and from the string
//! form used on the wire.

use crate::error::ModelError;
use crate::schema::{ParameterType, ParameterValue};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::net::IpAddr;

/// TR-106 `dateTime`, always carried in UTC.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Seconds from the Unix epoch to `0001-01-01T00:00:00Z`, the "Unknown Time"
/// value of TR-106.
pub const UNKNOWN_TIME_SECS: i64 = -62_135_596_800;

/// Seconds from the Unix epoch to `9999-12-31T23:59:59Z`, the "Infinite Time"
/// value of TR-106.
pub const INFINITE_TIME_SECS: i64 = 253_402_300_799;

/// True for the TR-106 "Unknown Time" value.
pub fn is_unknown_time(t: &DateTime) -> bool {
    t.timestamp() == UNKNOWN_TIME_SECS
}

/// True for the TR-106 "Infinite Time" value.
pub fn is_infinite_time(t: &DateTime) -> bool {
    t.timestamp() == INFINITE_TIME_SECS
}

/// Implements string-based serde for a type with `Display` and `FromStr`.
macro_rules! serde_as_string {
    ($t:ty) => {
        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

// --- MacAddress ---

/// Size of an IEEE 802 MAC address in bytes.
pub const MAC_ADDRESS_SIZE: usize = 6;

/// A 6-byte IEEE 802 MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MacAddress(pub [u8; MAC_ADDRESS_SIZE]);

impl MacAddress {
    /// Creates a new `MacAddress` from a 6-byte array.
    pub const fn new(bytes: [u8; MAC_ADDRESS_SIZE]) -> Self {
        MacAddress(bytes)
    }

    /// Checks if the address is a multicast address.
    pub fn is_multicast(&self) -> bool {
        // The first bit of the first octet is 1 for multicast addresses.
        (self.0[0] & 0x01) != 0
    }

    /// Checks if the address is the broadcast address (FF:FF:FF:FF:FF:FF).
    pub fn is_broadcast(&self) -> bool {
        self.0 == [0xFF; MAC_ADDRESS_SIZE]
    }
}

impl fmt::Display for MacAddress {
    /// Formats the MAC address as "XX:XX:XX:XX:XX:XX".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = ModelError;

    /// Parses six colon-separated octets of two hex digits each, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidMacAddress { value: s.into() };
        let mut bytes = [0u8; MAC_ADDRESS_SIZE];
        let mut parts = s.split(':');
        for byte in bytes.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *byte = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(MacAddress(bytes))
    }
}

serde_as_string!(MacAddress);

impl ParameterType for MacAddress {
    fn to_value(&self) -> ParameterValue {
        ParameterValue::Text(self.to_string())
    }
}

// --- IpPrefix ---

/// An IPv4 or IPv6 prefix, e.g. `192.168.1.0/24` or `fd00:1::/48`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpPrefix {
    pub address: IpAddr,
    pub length: u8,
}

impl IpPrefix {
    pub fn new(address: IpAddr, length: u8) -> Result<Self, ModelError> {
        let max = if address.is_ipv4() { 32 } else { 128 };
        if length > max {
            return Err(ModelError::InvalidIpPrefix {
                value: format!("{}/{}", address, length),
            });
        }
        Ok(Self { address, length })
    }
}

impl fmt::Display for IpPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.length)
    }
}

impl FromStr for IpPrefix {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidIpPrefix { value: s.into() };
        let (address, length) = s.split_once('/').ok_or_else(invalid)?;
        let address: IpAddr = address.parse().map_err(|_| invalid())?;
        let length: u8 = length.parse().map_err(|_| invalid())?;
        IpPrefix::new(address, length)
    }
}

serde_as_string!(IpPrefix);

impl ParameterType for IpPrefix {
    fn to_value(&self) -> ParameterValue {
        ParameterValue::Text(self.to_string())
    }
}

// --- Dbm ---

/// A power level in whole dBm, e.g. a Wi-Fi signal strength or noise floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dbm(pub i32);

impl ParameterType for Dbm {
    fn to_value(&self) -> ParameterValue {
        ParameterValue::Signed(i64::from(self.0))
    }
}

// --- Rolling Counters ---

/// A 32-bit statistics counter that wraps to zero on overflow
/// (TR-181 `StatsCounter32`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counter32(pub u32);

impl Counter32 {
    /// Reported when the counter is not available.
    pub const NOT_AVAILABLE: Counter32 = Counter32(u32::MAX);

    pub fn is_available(&self) -> bool {
        *self != Self::NOT_AVAILABLE
    }

    /// Increase since an earlier sample, allowing for one wrap-around.
    pub fn delta_since(&self, earlier: Counter32) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

impl ParameterType for Counter32 {
    fn to_value(&self) -> ParameterValue {
        ParameterValue::Unsigned(u64::from(self.0))
    }
}

/// A 64-bit statistics counter that wraps to zero on overflow
/// (TR-181 `StatsCounter64`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counter64(pub u64);

impl Counter64 {
    /// Increase since an earlier sample, allowing for one wrap-around.
    pub fn delta_since(&self, earlier: Counter64) -> u64 {
        self.0.wrapping_sub(earlier.0)
    }
}

impl ParameterType for Counter64 {
    fn to_value(&self) -> ParameterValue {
        ParameterValue::Unsigned(self.0)
    }
}

// --- HexBinary ---

/// An opaque byte string carried as hex on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HexBinary(pub Vec<u8>);

impl HexBinary {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBinary {
    fn from(bytes: Vec<u8>) -> Self {
        HexBinary(bytes)
    }
}

impl fmt::Display for HexBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl FromStr for HexBinary {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(HexBinary(hex::decode(s)?))
    }
}

serde_as_string!(HexBinary);

impl ParameterType for HexBinary {
    fn to_value(&self) -> ParameterValue {
        ParameterValue::Binary(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_address_parse_and_display() {
        let mac: MacAddress = "00:1a:2B:3c:4D:5e".parse().unwrap();
        assert_eq!(mac, MacAddress([0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]));
        assert_eq!(mac.to_string(), "00:1A:2B:3C:4D:5E");
        assert!(!mac.is_multicast());
        assert!(MacAddress([0xFF; 6]).is_broadcast());
    }

    #[test]
    fn test_mac_address_rejects_malformed() {
        for bad in ["", "00:11:22:33:44", "00:11:22:33:44:55:66", "0:11:22:33:44:55", "zz:11:22:33:44:55", "00-11-22-33-44-55"] {
            assert!(
                matches!(bad.parse::<MacAddress>(), Err(ModelError::InvalidMacAddress { .. })),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_ip_prefix() {
        let p: IpPrefix = "192.168.1.0/24".parse().unwrap();
        assert_eq!(p.length, 24);
        assert_eq!(p.to_string(), "192.168.1.0/24");

        let v6: IpPrefix = "fd00:1::/48".parse().unwrap();
        assert!(v6.address.is_ipv6());

        assert!("10.0.0.0/33".parse::<IpPrefix>().is_err());
        assert!("fd00::/129".parse::<IpPrefix>().is_err());
        assert!("10.0.0.0".parse::<IpPrefix>().is_err());
    }

    #[test]
    fn test_counter32_wraps() {
        let earlier = Counter32(u32::MAX - 9);
        let later = Counter32(5);
        assert_eq!(later.delta_since(earlier), 15);
        assert!(!Counter32::NOT_AVAILABLE.is_available());
        assert!(Counter32(0).is_available());
    }

    #[test]
    fn test_counter64_wraps() {
        assert_eq!(Counter64(3).delta_since(Counter64(u64::MAX)), 4);
    }

    #[test]
    fn test_hex_binary() {
        let hb: HexBinary = "0aFF10".parse().unwrap();
        assert_eq!(hb.as_bytes(), &[0x0a, 0xff, 0x10]);
        assert_eq!(hb.to_string(), "0aff10");
        assert!(matches!("abc".parse::<HexBinary>(), Err(ModelError::HexParsing(_))));
    }

    #[test]
    fn test_sentinel_times() {
        let unknown = chrono::DateTime::parse_from_rfc3339("0001-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert!(is_unknown_time(&unknown));
        let infinite = chrono::DateTime::parse_from_rfc3339("9999-12-31T23:59:59Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert!(is_infinite_time(&infinite));
        assert!(!is_unknown_time(&infinite));
    }

    #[test]
    fn test_parameter_values() {
        assert_eq!(Dbm(-70).to_value(), ParameterValue::Signed(-70));
        assert_eq!(Counter32(7).to_value(), ParameterValue::Unsigned(7));
        assert_eq!(
            MacAddress([1, 2, 3, 4, 5, 6]).to_value(),
            ParameterValue::Text("01:02:03:04:05:06".into())
        );
    }
}
