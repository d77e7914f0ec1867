// crates/cwmp-datamodel/src/lib.rs

#![doc = "Object model for the Broadband Forum CWMP (TR-069) data models."]
#![doc = ""]
#![doc = "Every object of the TR-098 `InternetGatewayDevice.` and TR-181 `Device.`"]
#![doc = "trees is a plain Rust struct with optional parameters, eager tables,"]
#![doc = "serde wire names and a static schema table. Setters never validate;"]
#![doc = "the `validate` module checks a tree against its schema on request."]
#![doc = ""]
#![doc = "```"]
#![doc = "use cwmp_datamodel::igd::layer3::Forwarding;"]
#![doc = ""]
#![doc = "let route = Forwarding::new().with_enable(true).with_mtu(1500);"]
#![doc = "assert_eq!(route.mtu(), Some(1500));"]
#![doc = "assert!(cwmp_datamodel::validate(&route).is_empty());"]
#![doc = "```"]

// --- Foundation Modules ---
mod error;
mod log;
mod macros;
pub mod schema;
pub mod types;

// --- Shared Behaviour ---
pub mod diagnostics;
pub mod order;
pub mod validate;

// --- Data Models ---
pub mod device;
pub mod igd;

// --- Top-level Exports ---
pub use diagnostics::DiagnosticsState;
pub use error::ModelError;
pub use order::Ordered;
pub use schema::{Entity, EntitySpec, FieldSpec, ParameterValue};
pub use types::{Counter32, Counter64, DateTime, Dbm, HexBinary, IpPrefix, MacAddress};
pub use validate::{ValidationOptions, Validator, Violation, ViolationKind, validate};
