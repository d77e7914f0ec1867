// crates/cwmp-datamodel/src/schema.rs

//! The meta-model every generated entity conforms to.
//!
//! Each entity carries a static [`EntitySpec`] describing its path template
//! and the [`FieldSpec`] of every parameter, object and table it declares.
//! The tables are plain data: nothing here enforces them. The
//! [`crate::validate`] module and external protocol layers read them.

use crate::types::DateTime;
use core::fmt;
use std::net::{IpAddr, Ipv4Addr};

// --- Field Metadata ---

/// Whether an ACS may target a parameter with `SetParameterValues`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reported by the CPE only.
    ReadOnly,
    /// Configurable by the ACS.
    ReadWrite,
}

/// Active notification policy of a parameter (TR-106 `activeNotify`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveNotify {
    /// `normal`: the ACS may enable or disable active notification.
    Normal,
    /// `canDeny`: the CPE may reject requests for active notification.
    CanDeny,
    /// `forceEnabled`: active notification is always on.
    ForceEnabled,
    /// `forceDefaultEnabled`: active notification is on by default.
    ForceDefaultEnabled,
}

/// Semantic type of a field, as named by the data-model schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Boolean,
    String,
    UnsignedInt,
    Int,
    UnsignedLong,
    Long,
    DateTime,
    HexBinary,
    IpAddress,
    IpPrefix,
    MacAddress,
    StatsCounter32,
    StatsCounter64,
    Dbm,
    /// A single nested entity.
    Object,
    /// A multi-instance table of nested entities.
    Table,
}

/// Metadata for one field of an entity.
///
/// Built with `const` methods so that whole schema tables live in statics:
///
/// ```
/// use cwmp_datamodel::schema::{Access, FieldSpec};
///
/// const MTU: FieldSpec = FieldSpec::unsigned_int()
///     .writable()
///     .min(1)
///     .max(1540)
///     .named("MTU");
/// assert_eq!(MTU.access, Access::ReadWrite);
/// assert_eq!(MTU.max, Some(1540));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name, e.g. `DestIPAddress` or `LANDevice`.
    pub name: &'static str,
    pub value_type: ValueType,
    pub access: Access,
    pub notify: ActiveNotify,
    pub units: Option<&'static str>,
    pub default: Option<&'static str>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Characters for strings, bytes for hexBinary.
    pub max_length: Option<usize>,
    pub pattern: Option<&'static str>,
    /// Legal values of an enumerated string. Empty when unrestricted.
    pub values: &'static [&'static str],
    /// Comma-separated list of items.
    pub list: bool,
    /// The value is a path to another entity in the tree.
    pub reference: bool,
    /// For `...NumberOfEntries` parameters, the wire name of the counted table.
    pub counts: Option<&'static str>,
}

impl FieldSpec {
    /// A read-only field of the given type with no constraints.
    pub const fn new(value_type: ValueType) -> Self {
        Self {
            name: "",
            value_type,
            access: Access::ReadOnly,
            notify: ActiveNotify::Normal,
            units: None,
            default: None,
            min: None,
            max: None,
            max_length: None,
            pattern: None,
            values: &[],
            list: false,
            reference: false,
            counts: None,
        }
    }

    pub const fn boolean() -> Self {
        Self::new(ValueType::Boolean)
    }

    pub const fn string() -> Self {
        Self::new(ValueType::String)
    }

    pub const fn unsigned_int() -> Self {
        Self::new(ValueType::UnsignedInt)
    }

    pub const fn int() -> Self {
        Self::new(ValueType::Int)
    }

    pub const fn unsigned_long() -> Self {
        Self::new(ValueType::UnsignedLong)
    }

    pub const fn long() -> Self {
        Self::new(ValueType::Long)
    }

    pub const fn date_time() -> Self {
        Self::new(ValueType::DateTime)
    }

    pub const fn hex_binary() -> Self {
        Self::new(ValueType::HexBinary)
    }

    /// An IPv4 or IPv6 address, at most 45 characters (TR-181 `IPAddress`).
    pub const fn ip_address() -> Self {
        Self::new(ValueType::IpAddress).max_length(45)
    }

    /// An IP prefix, at most 49 characters (TR-181 `IPPrefix`).
    pub const fn ip_prefix() -> Self {
        Self::new(ValueType::IpPrefix).max_length(49)
    }

    pub const fn mac_address() -> Self {
        Self::new(ValueType::MacAddress)
            .max_length(17)
            .pattern("([0-9A-Fa-f][0-9A-Fa-f]:){5}([0-9A-Fa-f][0-9A-Fa-f])")
    }

    pub const fn counter32() -> Self {
        Self::new(ValueType::StatsCounter32)
    }

    pub const fn counter64() -> Self {
        Self::new(ValueType::StatsCounter64)
    }

    pub const fn dbm() -> Self {
        Self::new(ValueType::Dbm).units("dBm")
    }

    /// A string restricted to the given values.
    pub const fn enumeration(values: &'static [&'static str]) -> Self {
        Self::string().values(values)
    }

    /// A string holding a path reference to another entity.
    pub const fn path_ref(max_length: usize) -> Self {
        Self::string().max_length(max_length).reference()
    }

    /// A `...NumberOfEntries` parameter counting the instances of `table`.
    pub const fn number_of_entries(table: &'static str) -> Self {
        Self {
            counts: Some(table),
            ..Self::unsigned_int()
        }
    }

    pub const fn object() -> Self {
        Self::new(ValueType::Object)
    }

    pub const fn table() -> Self {
        Self::new(ValueType::Table)
    }

    // --- Builder Methods ---

    pub const fn named(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    pub const fn writable(self) -> Self {
        Self {
            access: Access::ReadWrite,
            ..self
        }
    }

    pub const fn notify(self, notify: ActiveNotify) -> Self {
        Self { notify, ..self }
    }

    pub const fn units(self, units: &'static str) -> Self {
        Self {
            units: Some(units),
            ..self
        }
    }

    pub const fn default_value(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    pub const fn min(self, min: i64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn max(self, max: i64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }

    pub const fn max_length(self, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    pub const fn pattern(self, pattern: &'static str) -> Self {
        Self {
            pattern: Some(pattern),
            ..self
        }
    }

    pub const fn values(self, values: &'static [&'static str]) -> Self {
        Self { values, ..self }
    }

    pub const fn list(self) -> Self {
        Self { list: true, ..self }
    }

    pub const fn reference(self) -> Self {
        Self {
            reference: true,
            ..self
        }
    }

    // --- Queries ---

    pub fn is_writable(&self) -> bool {
        self.access == Access::ReadWrite
    }

    /// True for objects and tables, false for parameters.
    pub fn is_container(&self) -> bool {
        matches!(self.value_type, ValueType::Object | ValueType::Table)
    }

    /// Whether an ACS request to enable active notification must be honoured.
    pub fn accepts_active_notification(&self) -> bool {
        self.notify != ActiveNotify::CanDeny
    }
}

// --- Entity Metadata ---

/// Metadata for one entity (object or table row) of the data model.
#[derive(Debug, PartialEq, Eq)]
pub struct EntitySpec {
    /// Rust type name of the entity.
    pub name: &'static str,
    /// Dotted path template, e.g. `Device.DNS.Client.Server.{i}.`.
    pub path: &'static str,
    /// Data-model version that introduced the entity.
    pub version: &'static str,
    /// Sets of parameters whose combined value is unique among siblings.
    pub unique: &'static [&'static [&'static str]],
    pub fields: &'static [FieldSpec],
}

impl EntitySpec {
    /// Looks up a field by wire name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Parameters (not objects or tables) in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| !f.is_container())
    }

    /// Parameters an ACS may set.
    pub fn writable_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.parameters().filter(|f| f.is_writable())
    }

    /// True when this entity is a table row (its path ends in `{i}.`).
    pub fn is_multi_instance(&self) -> bool {
        self.path.ends_with("{i}.")
    }

    /// Checks a concrete object path against the template, where each `{i}`
    /// matches a non-empty decimal instance number.
    pub fn matches_path(&self, concrete: &str) -> bool {
        let template: Vec<&str> = self.path.split('.').collect();
        let actual: Vec<&str> = concrete.split('.').collect();
        template.len() == actual.len()
            && template.iter().zip(&actual).all(|(t, a)| {
                if *t == "{i}" {
                    !a.is_empty() && a.bytes().all(|b| b.is_ascii_digit())
                } else {
                    t == a
                }
            })
    }
}

// --- Entity Trait ---

/// A nested entity reached from its parent.
pub struct Child<'a> {
    /// Wire name of the object or table field in the parent.
    pub name: &'static str,
    /// 1-based instance number for table rows, `None` for single objects.
    pub index: Option<usize>,
    pub entity: &'a dyn Entity,
}

impl fmt::Debug for Child<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Child")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("entity", &self.entity.spec().name)
            .finish()
    }
}

/// Uniform, object-safe view over every generated entity.
pub trait Entity {
    /// The static schema table of this entity type.
    fn spec(&self) -> &'static EntitySpec;

    /// The current value of a parameter, by wire name. `None` when the
    /// parameter is unset, unknown, or names an object or table.
    fn parameter(&self, name: &str) -> Option<ParameterValue>;

    /// Present child objects followed by all table rows, in declaration order.
    fn children(&self) -> Vec<Child<'_>>;

    /// Number of rows in a table, by wire name.
    fn table_len(&self, name: &str) -> Option<usize>;
}

/// Used by the generated serde attributes to skip unset fields.
pub(crate) trait Slot {
    fn is_unset(&self) -> bool;
}

impl<T> Slot for Option<T> {
    fn is_unset(&self) -> bool {
        self.is_none()
    }
}

impl<T> Slot for Vec<T> {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

pub(crate) fn is_unset<T: Slot>(slot: &T) -> bool {
    slot.is_unset()
}

// --- Parameter Values ---

/// A parameter value in a type-erased form suitable for validation and for
/// rendering wire strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Boolean(bool),
    Unsigned(u64),
    Signed(i64),
    Text(String),
    Binary(Vec<u8>),
    DateTime(DateTime),
}

impl ParameterValue {
    /// The numeric value, for range checks.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            ParameterValue::Unsigned(v) => Some(i128::from(*v)),
            ParameterValue::Signed(v) => Some(i128::from(*v)),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParameterValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterValue {
    /// Formats the value the way it appears in a CWMP `ParameterValueStruct`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Boolean(v) => write!(f, "{}", v),
            ParameterValue::Unsigned(v) => write!(f, "{}", v),
            ParameterValue::Signed(v) => write!(f, "{}", v),
            ParameterValue::Text(v) => f.write_str(v),
            ParameterValue::Binary(v) => f.write_str(&hex::encode(v)),
            ParameterValue::DateTime(v) => f.write_str(
                &v.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true),
            ),
        }
    }
}

/// Conversion of a field's Rust type into a [`ParameterValue`].
pub trait ParameterType {
    fn to_value(&self) -> ParameterValue;
}

impl ParameterType for bool {
    fn to_value(&self) -> ParameterValue {
        ParameterValue::Boolean(*self)
    }
}

macro_rules! impl_unsigned {
    ($($t:ty),+) => {
        $(impl ParameterType for $t {
            fn to_value(&self) -> ParameterValue {
                ParameterValue::Unsigned(u64::from(*self))
            }
        })+
    };
}

macro_rules! impl_signed {
    ($($t:ty),+) => {
        $(impl ParameterType for $t {
            fn to_value(&self) -> ParameterValue {
                ParameterValue::Signed(i64::from(*self))
            }
        })+
    };
}

impl_unsigned!(u8, u16, u32, u64);
impl_signed!(i8, i16, i32, i64);

impl ParameterType for String {
    fn to_value(&self) -> ParameterValue {
        ParameterValue::Text(self.clone())
    }
}

impl ParameterType for DateTime {
    fn to_value(&self) -> ParameterValue {
        ParameterValue::DateTime(*self)
    }
}

impl ParameterType for Ipv4Addr {
    fn to_value(&self) -> ParameterValue {
        ParameterValue::Text(self.to_string())
    }
}

impl ParameterType for IpAddr {
    fn to_value(&self) -> ParameterValue {
        ParameterValue::Text(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::dns::DnsServer;
    use crate::igd::layer3::Forwarding;

    #[test]
    fn test_builder_keeps_previous_settings() {
        const SPEC: FieldSpec = FieldSpec::string()
            .writable()
            .max_length(64)
            .notify(ActiveNotify::CanDeny)
            .named("Alias");
        assert_eq!(SPEC.name, "Alias");
        assert_eq!(SPEC.access, Access::ReadWrite);
        assert_eq!(SPEC.max_length, Some(64));
        assert!(!SPEC.accepts_active_notification());
    }

    #[test]
    fn test_number_of_entries_is_read_only_unsigned() {
        let spec = FieldSpec::number_of_entries("Server");
        assert_eq!(spec.value_type, ValueType::UnsignedInt);
        assert_eq!(spec.access, Access::ReadOnly);
        assert_eq!(spec.counts, Some("Server"));
    }

    #[test]
    fn test_matches_path() {
        let spec = DnsServer::schema();
        assert!(spec.matches_path("Device.DNS.Client.Server.1."));
        assert!(spec.matches_path("Device.DNS.Client.Server.42."));
        assert!(!spec.matches_path("Device.DNS.Client.Server.."));
        assert!(!spec.matches_path("Device.DNS.Client.Server.x."));
        assert!(!spec.matches_path("Device.DNS.Client.Server.1.Extra."));
        assert!(spec.is_multi_instance());
    }

    #[test]
    fn test_field_lookup_and_writable_fields() {
        let spec = Forwarding::schema();
        let mtu = spec.field("MTU").expect("MTU declared");
        assert_eq!(mtu.value_type, ValueType::UnsignedInt);
        assert!(spec.field("Mtu").is_none());
        assert!(spec.writable_fields().all(|f| f.access == Access::ReadWrite));
        assert!(spec.writable_fields().any(|f| f.name == "Enable"));
        assert!(!spec.writable_fields().any(|f| f.name == "Status"));
    }

    #[test]
    fn test_wire_names_unique_within_entity() {
        for spec in [Forwarding::schema(), DnsServer::schema()] {
            let mut names: Vec<&str> = spec.fields.iter().map(|f| f.name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate wire name in {}", spec.name);
        }
    }

    #[test]
    fn test_parameter_value_display() {
        assert_eq!(ParameterValue::Boolean(true).to_string(), "true");
        assert_eq!(ParameterValue::Signed(-1).to_string(), "-1");
        assert_eq!(ParameterValue::Binary(vec![0x0a, 0xff]).to_string(), "0aff");
        let t = chrono::DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(
            ParameterValue::DateTime(t).to_string(),
            "2024-03-01T12:00:00Z"
        );
    }

    #[test]
    fn test_as_i128() {
        assert_eq!(ParameterValue::Unsigned(u64::MAX).as_i128(), Some(u64::MAX as i128));
        assert_eq!(ParameterValue::Signed(-5).as_i128(), Some(-5));
        assert_eq!(ParameterValue::Text("5".into()).as_i128(), None);
    }
}
