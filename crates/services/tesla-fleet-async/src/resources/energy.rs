use serde_json::{Value, json};

use crate::{
    client::Client,
    error::TeslaError,
    payload::Payload,
    resources::energy_site_path,
    types::energy::{
        CalendarHistoryQuery, GridImportExportRequest, HistoryKind, TelemetryHistoryQuery,
    },
};

/// API resource for Powerwall and solar sites under `/api/1/energy_sites/{id}`
///
/// Power values are in watts, energy values in watt hours. Responses are
/// returned as-is; the `response` envelope is not unwrapped here.
pub struct Energy<'c> {
    client: &'c Client,
}

impl<'c> Energy<'c> {
    /// Creates a new Energy resource
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    async fn post_setting(
        &self,
        energy_site_id: &str,
        suffix: &str,
        body: &Value,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .post(&energy_site_path(energy_site_id, suffix), &ctx, body)
            .await
    }

    /// Site assets, settings and features
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn site_info(&self, energy_site_id: &str, token: &str) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .get(&energy_site_path(energy_site_id, "site_info"), &ctx)
            .await
    }

    /// Live power, state of energy, grid status and storm mode
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn live_status(&self, energy_site_id: &str, token: &str) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .get(&energy_site_path(energy_site_id, "live_status"), &ctx)
            .await
    }

    /// Calendar history: energy measurements or backup events
    ///
    /// Use [`HistoryKind::Energy`](crate::types::HistoryKind::Energy) for
    /// aggregated energy and [`HistoryKind::Backup`](crate::types::HistoryKind::Backup)
    /// for off-grid event durations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn calendar_history(
        &self,
        energy_site_id: &str,
        query: &CalendarHistoryQuery,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .get_with_query(
                &energy_site_path(energy_site_id, "calendar_history"),
                &ctx,
                query,
            )
            .await
    }

    /// Energy history between two ISO 8601 dates
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn energy_history(
        &self,
        energy_site_id: &str,
        start_date: &str,
        end_date: &str,
        period: Option<&str>,
        time_zone: Option<&str>,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let query = history_query(
            HistoryKind::Energy,
            start_date,
            end_date,
            period,
            time_zone,
        );
        self.calendar_history(energy_site_id, &query, token).await
    }

    /// Backup (off-grid) event history, durations in seconds
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn backup_history(
        &self,
        energy_site_id: &str,
        start_date: &str,
        end_date: &str,
        period: Option<&str>,
        time_zone: Option<&str>,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let query = history_query(
            HistoryKind::Backup,
            start_date,
            end_date,
            period,
            time_zone,
        );
        self.calendar_history(energy_site_id, &query, token).await
    }

    /// Wall connector charging history
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn charge_history(
        &self,
        energy_site_id: &str,
        start_date: &str,
        end_date: &str,
        time_zone: Option<&str>,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let mut query = TelemetryHistoryQuery::charge(start_date, end_date);
        if let Some(tz) = time_zone {
            query = query.with_time_zone(tz);
        }
        let ctx = self.client.context(token);
        self.client
            .get_with_query(
                &energy_site_path(energy_site_id, "telemetry_history"),
                &ctx,
                &query,
            )
            .await
    }

    /// Operation mode: `autonomous` or `self_consumption`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn operation(
        &self,
        energy_site_id: &str,
        default_real_mode: &str,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.post_setting(
            energy_site_id,
            "operation",
            &json!({ "default_real_mode": default_real_mode }),
            token,
        )
        .await
    }

    /// Backup reserve percentage
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn backup(
        &self,
        energy_site_id: &str,
        backup_reserve_percent: u8,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.post_setting(
            energy_site_id,
            "backup",
            &json!({ "backup_reserve_percent": backup_reserve_percent }),
            token,
        )
        .await
    }

    /// Reserve kept for vehicle charging during an outage
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn off_grid_vehicle_charging_reserve(
        &self,
        energy_site_id: &str,
        off_grid_vehicle_charging_reserve_percent: u8,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.post_setting(
            energy_site_id,
            "off_grid_vehicle_charging_reserve",
            &json!({
                "off_grid_vehicle_charging_reserve_percent": off_grid_vehicle_charging_reserve_percent
            }),
            token,
        )
        .await
    }

    /// Storm Watch participation
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn storm_mode(&self, energy_site_id: &str, enabled: bool, token: &str) -> Result<Payload, TeslaError> {
        self.post_setting(energy_site_id, "storm_mode", &json!({ "enabled": enabled }), token)
            .await
    }

    /// Grid charging and export rules
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn grid_import_export(
        &self,
        energy_site_id: &str,
        settings: &GridImportExportRequest,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let ctx = self.client.context(token);
        self.client
            .post(
                &energy_site_path(energy_site_id, "grid_import_export"),
                &ctx,
                settings,
            )
            .await
    }

    /// Time-of-use tariff
    ///
    /// `tou_settings` is passed through untouched; the upstream validates
    /// seasons, periods and prices.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn time_of_use_settings(
        &self,
        energy_site_id: &str,
        tou_settings: Value,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.post_setting(
            energy_site_id,
            "time_of_use_settings",
            &json!({ "tou_settings": tou_settings }),
            token,
        )
        .await
    }
}

fn history_query(
    kind: HistoryKind,
    start_date: &str,
    end_date: &str,
    period: Option<&str>,
    time_zone: Option<&str>,
) -> CalendarHistoryQuery {
    let mut q = CalendarHistoryQuery::new(kind, start_date, end_date);
    if let Some(p) = period {
        q = q.with_period(p);
    }
    if let Some(tz) = time_zone {
        q = q.with_time_zone(tz);
    }
    q
}

impl crate::Client {
    /// Returns the Energy API resource
    #[must_use]
    pub const fn energy(&self) -> Energy<'_> {
        Energy::new(self)
    }
}
