use serde::{Deserialize, Serialize};

/// `?vin=` query used by the `dx` vehicle and warranty endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct VinQuery {
    /// Vehicle identification number
    pub vin: String,
}

impl VinQuery {
    /// Creates a query for `vin`
    #[must_use]
    pub fn new(vin: impl Into<String>) -> Self {
        Self { vin: vin.into() }
    }
}

/// Request body for `POST /api/1/vehicles/fleet_status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FleetStatusRequest {
    /// VINs to report on
    pub vins: Vec<String>,
}

/// Optional query for `DELETE /api/1/vehicles/{tag}/drivers`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RemoveDriverQuery {
    /// User to remove; omitted to remove the caller's own access
    #[serde(skip_serializing_if = "super::is_blank")]
    pub share_user_id: Option<String>,
}

/// Pagination for share invites (max page size 25)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PageQuery {
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Records per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PageQuery {
    /// Sets the page number
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}
