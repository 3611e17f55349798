use serde::{Deserialize, Serialize};

/// `kind` selector for the history endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    /// Energy measurements (watt hours)
    Energy,
    /// Backup (off-grid) events
    Backup,
    /// Wall connector charging
    Charge,
}

/// Query for `GET /api/1/energy_sites/{id}/calendar_history`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct CalendarHistoryQuery {
    /// Which history to fetch
    pub kind: HistoryKind,
    /// ISO 8601 start date
    pub start_date: String,
    /// ISO 8601 end date
    pub end_date: String,
    /// Aggregation period (`day`, `week`, `month`, ...)
    #[serde(skip_serializing_if = "super::is_blank")]
    pub period: Option<String>,
    /// IANA time zone, e.g. `America/Los_Angeles`
    #[serde(skip_serializing_if = "super::is_blank")]
    pub time_zone: Option<String>,
}

impl CalendarHistoryQuery {
    /// Creates a history query for the given range
    #[must_use]
    pub fn new(kind: HistoryKind, start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            kind,
            start_date: start_date.into(),
            end_date: end_date.into(),
            period: None,
            time_zone: None,
        }
    }

    /// Sets the aggregation period
    #[must_use]
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Sets the time zone
    #[must_use]
    pub fn with_time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }
}

/// Query for `GET /api/1/energy_sites/{id}/telemetry_history`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct TelemetryHistoryQuery {
    /// Always [`HistoryKind::Charge`] for wall connector history
    pub kind: HistoryKind,
    /// ISO 8601 start date
    pub start_date: String,
    /// ISO 8601 end date
    pub end_date: String,
    /// IANA time zone
    #[serde(skip_serializing_if = "super::is_blank")]
    pub time_zone: Option<String>,
}

impl TelemetryHistoryQuery {
    /// Creates a wall connector charge history query
    #[must_use]
    pub fn charge(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            kind: HistoryKind::Charge,
            start_date: start_date.into(),
            end_date: end_date.into(),
            time_zone: None,
        }
    }

    /// Sets the time zone
    #[must_use]
    pub fn with_time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }
}

/// Body for `POST /api/1/energy_sites/{id}/grid_import_export`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct GridImportExportRequest {
    /// Prevent charging from the grid when solar is installed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disallow_charge_from_grid_with_solar_installed: Option<bool>,
    /// Export rule: `battery_ok`, `pv_only` or `never`
    #[serde(skip_serializing_if = "super::is_blank")]
    pub customer_preferred_export_rule: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_kind_is_lowercase() {
        let q = CalendarHistoryQuery::new(HistoryKind::Backup, "2024-01-01", "2024-01-31");
        let v = serde_json::to_value(q).unwrap();
        assert_eq!(v["kind"], "backup");
        assert!(v.get("period").is_none());
        assert!(v.get("time_zone").is_none());
    }

    #[test]
    fn grid_import_export_omits_unset() {
        let body = GridImportExportRequest {
            customer_preferred_export_rule: Some("pv_only".into()),
            ..Default::default()
        };
        let v = serde_json::to_value(body).unwrap();
        assert_eq!(v, serde_json::json!({"customer_preferred_export_rule": "pv_only"}));
    }
}
