use crate::{
    client::Client,
    error::TeslaError,
    payload::Payload,
    resources::vehicle_path,
    types::vehicles::{FleetStatusRequest, PageQuery, RemoveDriverQuery, VinQuery},
};

/// API resource for vehicle data, sharing and telemetry configuration
pub struct Vehicles<'c> {
    client: &'c Client,
}

impl<'c> Vehicles<'c> {
    /// Creates a new Vehicles resource
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    async fn get_suffix(&self, vehicle_tag: &str, suffix: &str, token: &str) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client.get(&vehicle_path(vehicle_tag, suffix), &ctx).await
    }

    async fn get_by_vin(&self, path: &str, vin: &str, token: &str) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .get_with_query(path, &ctx, &VinQuery::new(vin))
            .await
    }

    /// Vehicles and energy sites mapped to the account
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn products(&self, token: &str) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client.get("/api/1/products", &ctx).await
    }

    /// Basic information about a vehicle
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn vehicle(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.get_suffix(vehicle_tag, "", token).await
    }

    /// Live vehicle data (location, climate, charge state, ...)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn vehicle_data(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.get_suffix(vehicle_tag, "vehicle_data", token).await
    }

    /// Wakes a sleeping vehicle
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn wake_up(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .post_empty(&vehicle_path(vehicle_tag, "wake_up"), &ctx)
            .await
    }

    /// Whether mobile access is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn mobile_enabled(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.get_suffix(vehicle_tag, "mobile_enabled", token).await
    }

    /// Charging sites close to the vehicle
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn nearby_charging_sites(
        &self,
        vehicle_tag: &str,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.get_suffix(vehicle_tag, "nearby_charging_sites", token)
            .await
    }

    /// Service data for the vehicle
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn service_data(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.get_suffix(vehicle_tag, "service_data", token).await
    }

    /// Firmware release notes
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn release_notes(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.get_suffix(vehicle_tag, "release_notes", token).await
    }

    /// Recent vehicle alerts
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn recent_alerts(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.get_suffix(vehicle_tag, "recent_alerts", token).await
    }

    /// Fleet status for the given VINs
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn fleet_status(&self, vins: Vec<String>, token: &str) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .post(
                "/api/1/vehicles/fleet_status",
                &ctx,
                &FleetStatusRequest { vins },
            )
            .await
    }

    /// Option codes for a VIN
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn options(&self, vin: &str, token: &str) -> Result<Payload, TeslaError> {
        self.get_by_vin("/api/1/dx/vehicles/options", vin, token)
            .await
    }

    /// Upgrades the vehicle is eligible for
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn eligible_upgrades(&self, vin: &str, token: &str) -> Result<Payload, TeslaError> {
        self.get_by_vin("/api/1/dx/vehicles/upgrades/eligibility", vin, token)
            .await
    }

    /// Subscriptions the vehicle is eligible for
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn eligible_subscriptions(&self, vin: &str, token: &str) -> Result<Payload, TeslaError> {
        self.get_by_vin("/api/1/dx/vehicles/subscriptions/eligibility", vin, token)
            .await
    }

    /// Warranty information for a VIN
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn warranty_details(&self, vin: &str, token: &str) -> Result<Payload, TeslaError> {
        self.get_by_vin("/api/1/dx/warranty/details", vin, token)
            .await
    }

    /// Allowed drivers (owner only)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn drivers(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.get_suffix(vehicle_tag, "drivers", token).await
    }

    /// Removes driver access
    ///
    /// Share users can only remove themselves; owners may remove anyone.
    /// Without `share_user_id` the caller's own access is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn remove_driver(
        &self,
        vehicle_tag: &str,
        share_user_id: Option<&str>,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        let query = RemoveDriverQuery {
            share_user_id: share_user_id.map(str::to_owned),
        };
        self.client
            .delete_with_query(&vehicle_path(vehicle_tag, "drivers"), &ctx, &query)
            .await
    }

    /// Active share invites (paginated, max 25 per page)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn share_invites(
        &self,
        vehicle_tag: &str,
        page: PageQuery,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .get_with_query(&vehicle_path(vehicle_tag, "invitations"), &ctx, &page)
            .await
    }

    /// Creates a single-use driver invite, valid for 24 hours
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create_share_invite(
        &self,
        vehicle_tag: &str,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .post_empty(&vehicle_path(vehicle_tag, "invitations"), &ctx)
            .await
    }

    /// Fleet telemetry config and its sync state
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn fleet_telemetry_config(
        &self,
        vehicle_tag: &str,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.get_suffix(vehicle_tag, "fleet_telemetry_config", token)
            .await
    }

    /// Removes the fleet telemetry config
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn delete_fleet_telemetry_config(
        &self,
        vehicle_tag: &str,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .delete(&vehicle_path(vehicle_tag, "fleet_telemetry_config"), &ctx)
            .await
    }

    /// Recent fleet telemetry errors
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn fleet_telemetry_errors(
        &self,
        vehicle_tag: &str,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.get_suffix(vehicle_tag, "fleet_telemetry_errors", token)
            .await
    }
}

impl crate::Client {
    /// Returns the Vehicles API resource
    #[must_use]
    pub const fn vehicles(&self) -> Vehicles<'_> {
        Vehicles::new(self)
    }
}
