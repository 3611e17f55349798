use crate::{
    client::Client,
    error::TeslaError,
    payload::Payload,
    types::subscriptions::{SetSubscriptionsRequest, SubscriptionsQuery},
};

/// API resource for push-notification subscriptions
pub struct Subscriptions<'c> {
    client: &'c Client,
}

impl<'c> Subscriptions<'c> {
    /// Creates a new Subscriptions resource
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Vehicles this device receives notifications from
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(&self, device_token: Option<&str>, token: &str) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        let query = SubscriptionsQuery {
            device_token: device_token.map(str::to_owned),
        };
        self.client
            .get_with_query("/api/1/subscriptions", &ctx, &query)
            .await
    }

    /// Chooses the vehicles this device receives notifications from
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set(
        &self,
        device_token: &str,
        vehicle_ids: Vec<u64>,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        let body = SetSubscriptionsRequest {
            device_token: Some(device_token.to_owned()),
            vehicle_ids,
        };
        self.client.post("/api/1/subscriptions", &ctx, &body).await
    }

    /// Same listing through `/api/1/vehicle_subscriptions`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn vehicle_subscriptions(&self, token: &str) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client.get("/api/1/vehicle_subscriptions", &ctx).await
    }

    /// Same update through `/api/1/vehicle_subscriptions`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_vehicle_subscriptions(
        &self,
        vehicle_ids: Vec<u64>,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        let body = SetSubscriptionsRequest {
            device_token: None,
            vehicle_ids,
        };
        self.client
            .post("/api/1/vehicle_subscriptions", &ctx, &body)
            .await
    }
}

impl crate::Client {
    /// Returns the Subscriptions API resource
    #[must_use]
    pub const fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }
}
