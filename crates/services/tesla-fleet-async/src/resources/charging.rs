use crate::{
    client::Client, error::TeslaError, payload::Payload, types::charging::ChargingHistoryQuery,
};

/// API resource for fleet-wide charging history under `/api/1/dx/charging`
pub struct Charging<'c> {
    client: &'c Client,
}

impl<'c> Charging<'c> {
    /// Creates a new Charging resource
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Paginated Supercharger history
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn history(
        &self,
        query: &ChargingHistoryQuery,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .get_with_query("/api/1/dx/charging/history", &ctx, query)
            .await
    }

    /// Charging sessions with pricing and energy data (business accounts)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn sessions(
        &self,
        query: &ChargingHistoryQuery,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .get_with_query("/api/1/dx/charging/sessions", &ctx, query)
            .await
    }

    /// Invoice for a charging event
    ///
    /// The upstream answers with a PDF, so expect [`Payload::Binary`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn invoice(&self, invoice_id: &str, token: &str) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .get(&format!("/api/1/dx/charging/invoice/{invoice_id}"), &ctx)
            .await
    }
}

impl crate::Client {
    /// Returns the Charging API resource
    #[must_use]
    pub const fn charging(&self) -> Charging<'_> {
        Charging::new(self)
    }
}
