use serde::{Deserialize, Serialize};

/// Filters for `GET /api/1/dx/charging/history` and `/sessions`
///
/// Serialized with the camelCase keys the endpoint expects (`pageSize`,
/// `startTime`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ChargingHistoryQuery {
    /// Filter by vehicle VIN
    #[serde(skip_serializing_if = "super::is_blank")]
    pub vin: Option<String>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// ISO 8601 start timestamp
    #[serde(skip_serializing_if = "super::is_blank")]
    pub start_time: Option<String>,
    /// ISO 8601 end timestamp
    #[serde(skip_serializing_if = "super::is_blank")]
    pub end_time: Option<String>,
    /// Sort field, e.g. `charge_start_date_time`
    #[serde(skip_serializing_if = "super::is_blank")]
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    #[serde(skip_serializing_if = "super::is_blank")]
    pub sort_order: Option<String>,
}

impl ChargingHistoryQuery {
    /// Filters by VIN
    #[must_use]
    pub fn with_vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = Some(vin.into());
        self
    }

    /// Sets the page number
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets results per page
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the ISO 8601 start of the window
    #[must_use]
    pub fn with_start_time(mut self, start: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self
    }

    /// Sets the ISO 8601 end of the window
    #[must_use]
    pub fn with_end_time(mut self, end: impl Into<String>) -> Self {
        self.end_time = Some(end.into());
        self
    }

    /// Sets the sort field
    #[must_use]
    pub fn with_sort_by(mut self, by: impl Into<String>) -> Self {
        self.sort_by = Some(by.into());
        self
    }

    /// Sets the sort order, `asc` or `desc`
    #[must_use]
    pub fn with_sort_order(mut self, order: impl Into<String>) -> Self {
        self.sort_order = Some(order.into());
        self
    }
}
