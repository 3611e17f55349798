use serde::{Deserialize, Serialize};

/// Optional filter for `GET /api/1/subscriptions`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SubscriptionsQuery {
    /// Mobile device push token
    #[serde(skip_serializing_if = "super::is_blank")]
    pub device_token: Option<String>,
}

/// Body for `POST /api/1/subscriptions` and `/api/1/vehicle_subscriptions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SetSubscriptionsRequest {
    /// Mobile device push token; not sent to `vehicle_subscriptions`
    #[serde(skip_serializing_if = "super::is_blank")]
    pub device_token: Option<String>,
    /// Vehicles to receive notifications from
    pub vehicle_ids: Vec<u64>,
}
