// crates/cwmp-datamodel/src/igd/diagnostics.rs

//! TR-098 ping and TR-143 download diagnostics objects.

use crate::diagnostics::{DOWNLOAD_STATES, DiagnosticsState, PING_STATES};
use crate::macros::entity;
use crate::schema::FieldSpec;
use crate::types::DateTime;

entity! {
    /// ICMP echo test towards `Host`.
    pub struct IpPingDiagnostics {
        path: "InternetGatewayDevice.IPPingDiagnostics.",
        version: "1.0",
        unique: [],
        fields: {
            scalar diagnostics_state: DiagnosticsState = "DiagnosticsState",
                set_diagnostics_state, with_diagnostics_state
                => FieldSpec::enumeration(PING_STATES).writable(),
            text interface: String = "Interface", set_interface, with_interface
                => FieldSpec::path_ref(256).writable(),
            text host: String = "Host", set_host, with_host
                => FieldSpec::string().writable().max_length(256),
            scalar number_of_repetitions: u32 = "NumberOfRepetitions",
                set_number_of_repetitions, with_number_of_repetitions
                => FieldSpec::unsigned_int().writable().min(1),
            scalar timeout: u32 = "Timeout", set_timeout, with_timeout
                => FieldSpec::unsigned_int().writable().min(1).units("milliseconds"),
            scalar data_block_size: u32 = "DataBlockSize", set_data_block_size, with_data_block_size
                => FieldSpec::unsigned_int().writable().min(1).max(65535).units("bytes"),
            scalar dscp: u32 = "DSCP", set_dscp, with_dscp
                => FieldSpec::unsigned_int().writable().min(0).max(63),
            scalar success_count: u32 = "SuccessCount", set_success_count, with_success_count
                => FieldSpec::unsigned_int(),
            scalar failure_count: u32 = "FailureCount", set_failure_count, with_failure_count
                => FieldSpec::unsigned_int(),
            scalar average_response_time: u32 = "AverageResponseTime",
                set_average_response_time, with_average_response_time
                => FieldSpec::unsigned_int().units("milliseconds"),
            scalar minimum_response_time: u32 = "MinimumResponseTime",
                set_minimum_response_time, with_minimum_response_time
                => FieldSpec::unsigned_int().units("milliseconds"),
            scalar maximum_response_time: u32 = "MaximumResponseTime",
                set_maximum_response_time, with_maximum_response_time
                => FieldSpec::unsigned_int().units("milliseconds"),
        },
    }
}

entity! {
    /// HTTP or FTP download throughput test.
    ///
    /// The `*Time` results are microsecond-precision timestamps of the
    /// transfer phases.
    pub struct DownloadDiagnostics {
        path: "InternetGatewayDevice.DownloadDiagnostics.",
        version: "1.5",
        unique: [],
        fields: {
            scalar diagnostics_state: DiagnosticsState = "DiagnosticsState",
                set_diagnostics_state, with_diagnostics_state
                => FieldSpec::enumeration(DOWNLOAD_STATES).writable(),
            text interface: String = "Interface", set_interface, with_interface
                => FieldSpec::path_ref(256).writable(),
            text download_url: String = "DownloadURL", set_download_url, with_download_url
                => FieldSpec::string().writable().max_length(256),
            scalar dscp: u32 = "DSCP", set_dscp, with_dscp
                => FieldSpec::unsigned_int().writable().min(0).max(63),
            scalar ethernet_priority: u32 = "EthernetPriority", set_ethernet_priority, with_ethernet_priority
                => FieldSpec::unsigned_int().writable().min(0).max(7),
            scalar rom_time: DateTime = "ROMTime", set_rom_time, with_rom_time
                => FieldSpec::date_time(),
            scalar bom_time: DateTime = "BOMTime", set_bom_time, with_bom_time
                => FieldSpec::date_time(),
            scalar eom_time: DateTime = "EOMTime", set_eom_time, with_eom_time
                => FieldSpec::date_time(),
            scalar test_bytes_received: u32 = "TestBytesReceived",
                set_test_bytes_received, with_test_bytes_received
                => FieldSpec::unsigned_int().units("bytes"),
            scalar total_bytes_received: u32 = "TotalBytesReceived",
                set_total_bytes_received, with_total_bytes_received
                => FieldSpec::unsigned_int().units("bytes"),
            scalar tcp_open_request_time: DateTime = "TCPOpenRequestTime",
                set_tcp_open_request_time, with_tcp_open_request_time
                => FieldSpec::date_time(),
            scalar tcp_open_response_time: DateTime = "TCPOpenResponseTime",
                set_tcp_open_response_time, with_tcp_open_response_time
                => FieldSpec::date_time(),
        },
    }
}

impl DownloadDiagnostics {
    /// Time between the beginning and the end of the transfer, once both
    /// have been reported.
    pub fn transfer_duration(&self) -> Option<chrono::Duration> {
        Some(self.eom_time? - self.bom_time?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Entity, ParameterValue};

    #[test]
    fn test_requested_state_round_trip() {
        let ping = IpPingDiagnostics::new()
            .with_host("192.0.2.1")
            .with_number_of_repetitions(3)
            .with_diagnostics_state(DiagnosticsState::Requested);
        assert_eq!(ping.diagnostics_state(), Some(DiagnosticsState::Requested));
        assert_eq!(
            ping.parameter("DiagnosticsState"),
            Some(ParameterValue::Text("Requested".into()))
        );
    }

    #[test]
    fn test_transfer_duration() {
        let bom = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00.250000Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let eom = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:02.750000Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let dl = DownloadDiagnostics::new().with_bom_time(bom);
        assert_eq!(dl.transfer_duration(), None);
        let dl = dl.with_eom_time(eom);
        assert_eq!(dl.transfer_duration(), Some(chrono::Duration::milliseconds(2500)));
    }

    #[test]
    fn test_ping_rejects_transfer_error_states() {
        let ping = IpPingDiagnostics::new().with_diagnostics_state(DiagnosticsState::ErrorNoPasv);
        let violations = crate::validate(&ping);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].path,
            "InternetGatewayDevice.IPPingDiagnostics.DiagnosticsState"
        );
        assert_eq!(
            violations[0].kind,
            crate::ViolationKind::NotInEnumeration {
                value: "Error_NoPASV".into()
            }
        );
        let canceled = IpPingDiagnostics::new().with_diagnostics_state(DiagnosticsState::Canceled);
        assert_eq!(crate::validate(&canceled).len(), 1);
        let done = IpPingDiagnostics::new().with_diagnostics_state(DiagnosticsState::Complete);
        assert!(crate::validate(&done).is_empty());
    }

    #[test]
    fn test_download_uses_transfer_states() {
        let failed = DownloadDiagnostics::new()
            .with_diagnostics_state(DiagnosticsState::ErrorTransferFailed);
        assert!(crate::validate(&failed).is_empty());
        let done = DownloadDiagnostics::new().with_diagnostics_state(DiagnosticsState::Completed);
        assert!(crate::validate(&done).is_empty());
        let ping_error = DownloadDiagnostics::new()
            .with_diagnostics_state(DiagnosticsState::ErrorCannotResolveHostName);
        assert_eq!(crate::validate(&ping_error).len(), 1);
    }
}
