//! Request bodies and query strings for Tesla API endpoints
//!
//! Optional fields are skipped during serialization, so parameters a caller
//! leaves unset never reach the wire.

/// Charging history and session types
pub mod charging;
/// Vehicle command bodies
pub mod commands;
/// Energy site types
pub mod energy;
/// Push-notification subscription types
pub mod subscriptions;
/// TeslaMate query types
pub mod teslamate;
/// Vehicle endpoint types
pub mod vehicles;

pub use charging::ChargingHistoryQuery;
pub use commands::{ScheduleRequest, SetTempsRequest};
pub use energy::{CalendarHistoryQuery, GridImportExportRequest, HistoryKind, TelemetryHistoryQuery};
pub use subscriptions::{SetSubscriptionsRequest, SubscriptionsQuery};
pub use teslamate::DateRangeQuery;
pub use vehicles::{FleetStatusRequest, PageQuery, RemoveDriverQuery, VinQuery};

/// Unset and empty optional strings are both left off the wire.
#[expect(clippy::ref_option, reason = "signature required by serde skip_serializing_if")]
fn is_blank(v: &Option<String>) -> bool {
    v.as_deref().is_none_or(str::is_empty)
}
