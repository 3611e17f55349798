use serde::{Deserialize, Serialize};

/// Optional RFC 3339 window for TeslaMate charge and drive listings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    /// Start, e.g. `2006-01-02T15:04:05Z`
    #[serde(skip_serializing_if = "super::is_blank")]
    pub start_date: Option<String>,
    /// End, e.g. `2006-01-02T15:04:05Z`
    #[serde(skip_serializing_if = "super::is_blank")]
    pub end_date: Option<String>,
}

impl DateRangeQuery {
    /// Sets the start of the window
    #[must_use]
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self
    }

    /// Sets the end of the window
    #[must_use]
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end_date = Some(end.into());
        self
    }
}
