// crates/cwmp-datamodel/src/diagnostics.rs

//! The `DiagnosticsState` label shared by every diagnostics object
//! (TR-098 `IPPingDiagnostics`, TR-143 `DownloadDiagnostics`, TR-181
//! `IP.Diagnostics.*`).
//!
//! Only the label set lives here. Running a test is the job of whatever
//! embeds the model; the helpers below encode the documented transitions so
//! that such an embedder does not have to re-derive them.

use crate::macros::wire_enum;

wire_enum! {
    /// State of a diagnostics test.
    ///
    /// An ACS writes `Requested` to start a test. The CPE reports `Complete`
    /// or one of the error values when it finishes. Writing any other
    /// parameter of the object while a test is requested aborts it and
    /// resets the state to `None`.
    pub enum DiagnosticsState {
        None = "None",
        Requested = "Requested",
        Canceled = "Canceled",
        Complete = "Complete",
        /// TR-143 spelling, used by the transfer tests.
        Completed = "Completed",
        Error = "Error",
        ErrorCannotResolveHostName = "Error_CannotResolveHostName",
        ErrorInternal = "Error_Internal",
        ErrorOther = "Error_Other",
        ErrorMaxHopCountExceeded = "Error_MaxHopCountExceeded",
        ErrorInitConnectionFailed = "Error_InitConnectionFailed",
        ErrorNoResponse = "Error_NoResponse",
        ErrorTransferFailed = "Error_TransferFailed",
        ErrorPasswordRequestFailed = "Error_PasswordRequestFailed",
        ErrorLoginFailed = "Error_LoginFailed",
        ErrorNoTransferMode = "Error_NoTransferMode",
        ErrorNoPasv = "Error_NoPASV",
        ErrorIncorrectSize = "Error_IncorrectSize",
        ErrorTimeout = "Error_Timeout",
    }
}

/// Values of TR-098 `IPPingDiagnostics.DiagnosticsState`.
pub const PING_STATES: &[&str] = &[
    "None",
    "Requested",
    "Complete",
    "Error_CannotResolveHostName",
    "Error_Internal",
    "Error_Other",
];

/// Values of TR-181 `IP.Diagnostics.IPPing.DiagnosticsState`. Adds
/// cancellation and the bare `Error` to [`PING_STATES`].
pub const IP_PING_STATES: &[&str] = &[
    "None",
    "Requested",
    "Canceled",
    "Complete",
    "Error",
    "Error_CannotResolveHostName",
    "Error_Internal",
    "Error_Other",
];

/// Values of TR-143 `DownloadDiagnostics.DiagnosticsState`.
pub const DOWNLOAD_STATES: &[&str] = &[
    "None",
    "Requested",
    "Completed",
    "Error_InitConnectionFailed",
    "Error_NoResponse",
    "Error_TransferFailed",
    "Error_PasswordRequestFailed",
    "Error_LoginFailed",
    "Error_NoTransferMode",
    "Error_NoPASV",
    "Error_IncorrectSize",
    "Error_Timeout",
];

impl Default for DiagnosticsState {
    fn default() -> Self {
        DiagnosticsState::None
    }
}

impl DiagnosticsState {
    /// True for `Error` and every `Error_*` refinement.
    pub fn is_error(&self) -> bool {
        self.as_str().starts_with("Error")
    }

    /// A test has been requested and has not finished yet.
    pub fn is_in_progress(&self) -> bool {
        *self == DiagnosticsState::Requested
    }

    /// The test ran and its results are readable.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DiagnosticsState::Complete | DiagnosticsState::Completed) || self.is_error()
    }

    /// The state after an ACS writes a different parameter of the same
    /// diagnostics object. A requested test is aborted; any other state is
    /// kept.
    pub fn after_sibling_write(self) -> Self {
        if self.is_in_progress() {
            DiagnosticsState::None
        } else {
            self
        }
    }

    /// Values an ACS is allowed to write. Everything else is reported by the
    /// CPE.
    pub fn is_writable_by_acs(&self) -> bool {
        matches!(self, DiagnosticsState::Requested | DiagnosticsState::Canceled)
    }
}

#[cfg(test)]
mod tests {
    use super::{DOWNLOAD_STATES, DiagnosticsState, IP_PING_STATES, PING_STATES};
    use crate::error::ModelError;

    #[test]
    fn test_wire_round_trip() {
        for value in DiagnosticsState::VALUES {
            let state: DiagnosticsState = value.parse().unwrap();
            assert_eq!(state.as_str(), *value);
        }
        assert_eq!(DiagnosticsState::ErrorNoPasv.to_string(), "Error_NoPASV");
    }

    #[test]
    fn test_unknown_value() {
        assert!(matches!(
            "Running".parse::<DiagnosticsState>(),
            Err(ModelError::UnknownEnumValue {
                type_name: "DiagnosticsState",
                ..
            })
        ));
    }

    #[test]
    fn test_classification() {
        assert!(DiagnosticsState::Error.is_error());
        assert!(DiagnosticsState::ErrorTimeout.is_error());
        assert!(!DiagnosticsState::Complete.is_error());
        assert!(DiagnosticsState::Complete.is_terminal());
        assert!(DiagnosticsState::Completed.is_terminal());
        assert!(DiagnosticsState::ErrorInternal.is_terminal());
        assert!(!DiagnosticsState::Requested.is_terminal());
        assert!(!DiagnosticsState::None.is_terminal());
        assert!(DiagnosticsState::Requested.is_writable_by_acs());
        assert!(!DiagnosticsState::Complete.is_writable_by_acs());
    }

    #[test]
    fn test_sibling_write_aborts_requested_test() {
        assert_eq!(
            DiagnosticsState::Requested.after_sibling_write(),
            DiagnosticsState::None
        );
        assert_eq!(
            DiagnosticsState::Complete.after_sibling_write(),
            DiagnosticsState::Complete
        );
        assert_eq!(
            DiagnosticsState::ErrorOther.after_sibling_write(),
            DiagnosticsState::ErrorOther
        );
    }

    #[test]
    fn test_object_state_sets_are_known_labels() {
        for set in [PING_STATES, IP_PING_STATES, DOWNLOAD_STATES] {
            for value in set {
                assert!(value.parse::<DiagnosticsState>().is_ok(), "{}", value);
            }
        }
        assert!(!PING_STATES.contains(&"Error_NoPASV"));
        assert!(!PING_STATES.contains(&"Canceled"));
        assert!(IP_PING_STATES.contains(&"Canceled"));
        assert!(DOWNLOAD_STATES.contains(&"Completed"));
        assert!(!DOWNLOAD_STATES.contains(&"Complete"));
    }
}
