use crate::{
    client::Client, context::RequestContext, error::TeslaError, payload::Payload,
    types::teslamate::DateRangeQuery,
};

/// API resource for a self-hosted TeslaMate API instance
///
/// TeslaMate has no fixed production address, so the base URL is supplied
/// by the caller instead of coming from [`TeslaConfig`](crate::TeslaConfig).
pub struct TeslaMate<'c> {
    client: &'c Client,
    base_url: String,
}

impl<'c> TeslaMate<'c> {
    /// Creates a TeslaMate resource targeting `base_url`
    #[must_use]
    pub fn new(client: &'c Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The TeslaMate base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn context(&self, token: &str) -> RequestContext {
        RequestContext::new(token, &self.base_url)
    }

    async fn fetch(&self, path: &str, token: &str) -> Result<Payload, TeslaError> {
        self.client.get(path, &self.context(token)).await
    }

    /// All cars known to TeslaMate
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn cars(&self, token: &str) -> Result<Payload, TeslaError> {
        self.fetch("/api/v1/cars", token).await
    }

    /// Details for one car
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn car(&self, car_id: u64, token: &str) -> Result<Payload, TeslaError> {
        self.fetch(&format!("/api/v1/cars/{car_id}"), token).await
    }

    /// Battery health and degradation
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn battery_health(&self, car_id: u64, token: &str) -> Result<Payload, TeslaError> {
        self.fetch(&format!("/api/v1/cars/{car_id}/battery-health"), token)
            .await
    }

    /// Charging sessions, optionally within an RFC 3339 window
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn charges(
        &self,
        car_id: u64,
        range: &DateRangeQuery,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.client
            .get_with_query(
                &format!("/api/v1/cars/{car_id}/charges"),
                &self.context(token),
                range,
            )
            .await
    }

    /// One charging session
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn charge(&self, car_id: u64, charge_id: u64, token: &str) -> Result<Payload, TeslaError> {
        self.fetch(&format!("/api/v1/cars/{car_id}/charges/{charge_id}"), token)
            .await
    }

    /// Drives, optionally within an RFC 3339 window
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn drives(
        &self,
        car_id: u64,
        range: &DateRangeQuery,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.client
            .get_with_query(
                &format!("/api/v1/cars/{car_id}/drives"),
                &self.context(token),
                range,
            )
            .await
    }

    /// One drive
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn drive(&self, car_id: u64, drive_id: u64, token: &str) -> Result<Payload, TeslaError> {
        self.fetch(&format!("/api/v1/cars/{car_id}/drives/{drive_id}"), token)
            .await
    }

    /// Current car status
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn status(&self, car_id: u64, token: &str) -> Result<Payload, TeslaError> {
        self.fetch(&format!("/api/v1/cars/{car_id}/status"), token)
            .await
    }

    /// Software update history
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn updates(&self, car_id: u64, token: &str) -> Result<Payload, TeslaError> {
        self.fetch(&format!("/api/v1/cars/{car_id}/updates"), token)
            .await
    }
}

impl crate::Client {
    /// Returns a TeslaMate API resource for the instance at `base_url`
    #[must_use]
    pub fn teslamate(&self, base_url: &str) -> TeslaMate<'_> {
        TeslaMate::new(self, base_url)
    }
}
