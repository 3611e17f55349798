use serde::Serialize;
use serde_json::json;

use crate::{
    client::Client,
    error::TeslaError,
    payload::Payload,
    resources::vehicle_path,
    types::commands::{ScheduleRequest, SetTempsRequest},
};

/// API resource for `POST /api/1/vehicles/{tag}/command/{name}`
///
/// Every command returns the contents of the upstream `response` envelope
/// when there is one (see [`Payload::unwrap_response`]).
pub struct Commands<'c> {
    client: &'c Client,
}

impl<'c> Commands<'c> {
    /// Creates a new Commands resource
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Sends an arbitrary command with a JSON body
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn send<B>(
        &self,
        vehicle_tag: &str,
        command: &str,
        body: &B,
        token: &str,
    ) -> Result<Payload, TeslaError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let ctx = self.client.context(token);
        let path = vehicle_path(vehicle_tag, &format!("command/{command}"));
        let payload = self.client.post(&path, &ctx, body).await?;
        Ok(payload.unwrap_response())
    }

    async fn bare(&self, vehicle_tag: &str, command: &str, token: &str) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, command, &json!({}), token).await
    }

    // Doors, locks & access

    /// Locks the doors
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn door_lock(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "door_lock", token).await
    }

    /// Unlocks the doors
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn door_unlock(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "door_unlock", token).await
    }

    /// Opens or closes a trunk; `which_trunk` is `front` or `rear`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn actuate_trunk(
        &self,
        vehicle_tag: &str,
        which_trunk: &str,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "actuate_trunk", &json!({ "which_trunk": which_trunk }), token)
            .await
    }

    // Climate

    /// Starts climate preconditioning
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn auto_conditioning_start(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "auto_conditioning_start", token).await
    }

    /// Stops climate preconditioning
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn auto_conditioning_stop(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "auto_conditioning_stop", token).await
    }

    /// Sets cabin temperatures in Celsius; unset sides are not sent
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_temps(
        &self,
        vehicle_tag: &str,
        temps: SetTempsRequest,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "set_temps", &temps, token).await
    }

    /// Climate keeper: 0 off, 1 keep, 2 dog, 3 camp
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_climate_keeper_mode(
        &self,
        vehicle_tag: &str,
        climate_keeper_mode: u8,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "set_climate_keeper_mode",
            &json!({ "climate_keeper_mode": climate_keeper_mode }),
            token,
        )
        .await
    }

    /// Bioweapon Defense Mode
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_bioweapon_mode(&self, vehicle_tag: &str, on: bool, token: &str) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "set_bioweapon_mode", &json!({ "on": on }), token)
            .await
    }

    /// Cabin overheat protection
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_cabin_overheat_protection(
        &self,
        vehicle_tag: &str,
        on: bool,
        fan_only: bool,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "set_cabin_overheat_protection",
            &json!({ "on": on, "fan_only": fan_only }),
            token,
        )
        .await
    }

    /// Overheat protection level: 0 low (30C), 1 medium (35C), 2 high (40C)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_cop_temp(&self, vehicle_tag: &str, cop_level: u8, token: &str) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "set_cop_temp", &json!({ "level": cop_level }), token)
            .await
    }

    /// Preconditioning max override
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_preconditioning_max(
        &self,
        vehicle_tag: &str,
        on: bool,
        manual_override: bool,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "set_preconditioning_max",
            &json!({ "on": on, "manual_override": manual_override }),
            token,
        )
        .await
    }

    /// Seat heater level 0-3
    ///
    /// Seat positions: 0 driver, 1 passenger, 2 rear left, 4 rear center,
    /// 5 rear right.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn remote_seat_heater_request(
        &self,
        vehicle_tag: &str,
        heater: u8,
        level: u8,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "remote_seat_heater_request",
            &json!({ "heater": heater, "level": level }),
            token,
        )
        .await
    }

    /// Seat cooler level 0-3
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn remote_seat_cooler_request(
        &self,
        vehicle_tag: &str,
        seat_position: u8,
        seat_cooler_level: u8,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "remote_seat_cooler_request",
            &json!({ "seat_position": seat_position, "seat_cooler_level": seat_cooler_level }),
            token,
        )
        .await
    }

    /// Automatic seat heating and cooling
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn remote_auto_seat_climate_request(
        &self,
        vehicle_tag: &str,
        auto_seat_position: u8,
        auto_climate_on: bool,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "remote_auto_seat_climate_request",
            &json!({ "auto_seat_position": auto_seat_position, "auto_climate_on": auto_climate_on }),
            token,
        )
        .await
    }

    /// Steering wheel heater on/off
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn remote_steering_wheel_heater_request(
        &self,
        vehicle_tag: &str,
        on: bool,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "remote_steering_wheel_heater_request", &json!({ "on": on }), token)
            .await
    }

    /// Steering wheel heat level
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn remote_steering_wheel_heat_level_request(
        &self,
        vehicle_tag: &str,
        level: u8,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "remote_steering_wheel_heat_level_request",
            &json!({ "level": level }),
            token,
        )
        .await
    }

    /// Automatic steering wheel heating
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn remote_auto_steering_wheel_heat_climate_request(
        &self,
        vehicle_tag: &str,
        on: bool,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "remote_auto_steering_wheel_heat_climate_request",
            &json!({ "on": on }),
            token,
        )
        .await
    }

    // Charging

    /// Starts charging
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn charge_start(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "charge_start", token).await
    }

    /// Stops charging
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn charge_stop(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "charge_stop", token).await
    }

    /// Opens the charge port door
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn charge_port_door_open(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "charge_port_door_open", token).await
    }

    /// Closes the charge port door
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn charge_port_door_close(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "charge_port_door_close", token).await
    }

    /// Sets the charge limit percentage
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_charge_limit(&self, vehicle_tag: &str, percent: u8, token: &str) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "set_charge_limit", &json!({ "percent": percent }), token)
            .await
    }

    /// Standard range charge mode
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn charge_standard(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "charge_standard", token).await
    }

    /// Max range charge mode
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn charge_max_range(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "charge_max_range", token).await
    }

    /// Sets charging amperage
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_charging_amps(
        &self,
        vehicle_tag: &str,
        charging_amps: u32,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "set_charging_amps", &json!({ "charging_amps": charging_amps }), token)
            .await
    }

    /// Legacy scheduled charging; `time` is minutes after midnight
    ///
    /// Superseded upstream by [`Commands::add_charge_schedule`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_scheduled_charging(
        &self,
        vehicle_tag: &str,
        enable: bool,
        time: u32,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "set_scheduled_charging",
            &json!({ "enable": enable, "time": time }),
            token,
        )
        .await
    }

    /// Adds a charge schedule
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn add_charge_schedule(
        &self,
        vehicle_tag: &str,
        schedule: &ScheduleRequest,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "add_charge_schedule", schedule, token).await
    }

    /// Removes a charge schedule by id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn remove_charge_schedule(
        &self,
        vehicle_tag: &str,
        schedule_id: u64,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "remove_charge_schedule", &json!({ "id": schedule_id }), token)
            .await
    }

    /// Adds a precondition schedule
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn add_precondition_schedule(
        &self,
        vehicle_tag: &str,
        schedule: &ScheduleRequest,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "add_precondition_schedule", schedule, token)
            .await
    }

    /// Removes a precondition schedule by id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn remove_precondition_schedule(
        &self,
        vehicle_tag: &str,
        schedule_id: u64,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "remove_precondition_schedule",
            &json!({ "id": schedule_id }),
            token,
        )
        .await
    }

    // Windows & sunroof

    /// Vents or closes the windows; `command` is `vent` or `close`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn window_control(
        &self,
        vehicle_tag: &str,
        command: &str,
        lat: f64,
        lon: f64,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "window_control",
            &json!({ "command": command, "lat": lat, "lon": lon }),
            token,
        )
        .await
    }

    /// Sunroof: `stop`, `close` or `vent`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn sun_roof_control(&self, vehicle_tag: &str, state: &str, token: &str) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "sun_roof_control", &json!({ "state": state }), token)
            .await
    }

    // Lights, horn & media

    /// Flashes the headlights
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn flash_lights(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "flash_lights", token).await
    }

    /// Honks the horn
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn honk_horn(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "honk_horn", token).await
    }

    /// Media volume, 0.0 to 10.0
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn adjust_volume(&self, vehicle_tag: &str, volume: f64, token: &str) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "adjust_volume", &json!({ "volume": volume }), token)
            .await
    }

    /// Sends a navigation destination
    ///
    /// `locale` defaults to `en-US` when unset or empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn navigation_request(
        &self,
        vehicle_tag: &str,
        address: &str,
        locale: Option<&str>,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        let body = json!({
            "type": "share_ext_content_raw",
            "value": { "android.intent.extra.TEXT": address },
            "locale": locale.filter(|l| !l.is_empty()).unwrap_or("en-US"),
        });
        self.send(vehicle_tag, "navigation_request", &body, token).await
    }

    // Security

    /// Sentry Mode
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_sentry_mode(&self, vehicle_tag: &str, on: bool, token: &str) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "set_sentry_mode", &json!({ "on": on }), token)
            .await
    }

    /// Valet Mode with a 4-digit PIN
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_valet_mode(
        &self,
        vehicle_tag: &str,
        on: bool,
        password: &str,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "set_valet_mode",
            &json!({ "on": on, "password": password }),
            token,
        )
        .await
    }

    /// Removes the Valet Mode PIN
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn reset_valet_pin(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "reset_valet_pin", token).await
    }

    /// Speed limit in mph
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn speed_limit_set_limit(
        &self,
        vehicle_tag: &str,
        limit_mph: f64,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "speed_limit_set_limit", &json!({ "limit_mph": limit_mph }), token)
            .await
    }

    /// Activates Speed Limit Mode
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn speed_limit_activate(&self, vehicle_tag: &str, pin: &str, token: &str) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "speed_limit_activate", &json!({ "pin": pin }), token)
            .await
    }

    /// Deactivates Speed Limit Mode
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn speed_limit_deactivate(&self, vehicle_tag: &str, pin: &str, token: &str) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "speed_limit_deactivate", &json!({ "pin": pin }), token)
            .await
    }

    /// Clears the Speed Limit Mode PIN
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn speed_limit_clear_pin(&self, vehicle_tag: &str, pin: &str, token: &str) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "speed_limit_clear_pin", &json!({ "pin": pin }), token)
            .await
    }

    /// Clears the Speed Limit Mode PIN as owner (firmware 2023.38+)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn speed_limit_clear_pin_admin(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "speed_limit_clear_pin_admin", token).await
    }

    /// PIN to Drive
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_pin_to_drive(
        &self,
        vehicle_tag: &str,
        on: bool,
        password: &str,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "set_pin_to_drive",
            &json!({ "on": on, "password": password }),
            token,
        )
        .await
    }

    /// Resets the PIN to Drive PIN
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn reset_pin_to_drive_pin(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "reset_pin_to_drive_pin", token).await
    }

    /// Clears PIN to Drive as owner (firmware 2023.44+)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn clear_pin_to_drive_admin(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "clear_pin_to_drive_admin", token).await
    }

    // Software

    /// Schedules an OTA update `offset_sec` seconds from now
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn schedule_software_update(
        &self,
        vehicle_tag: &str,
        offset_sec: u64,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(
            vehicle_tag,
            "schedule_software_update",
            &json!({ "offset_sec": offset_sec }),
            token,
        )
        .await
    }

    /// Cancels a scheduled update
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn cancel_software_update(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "cancel_software_update", token).await
    }

    // Misc

    /// Remote start (keyless driving must be enabled)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn remote_start_drive(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "remote_start_drive", token).await
    }

    /// Triggers HomeLink at the given location
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn trigger_homelink(
        &self,
        vehicle_tag: &str,
        lat: f64,
        lon: f64,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "trigger_homelink", &json!({ "lat": lat, "lon": lon }), token)
            .await
    }

    /// Plays a sound on the external speaker (0 random, 2000 locate ping)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn remote_boombox(&self, vehicle_tag: &str, sound: u32, token: &str) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "remote_boombox", &json!({ "sound": sound }), token)
            .await
    }

    /// Renames the vehicle
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn set_vehicle_name(
        &self,
        vehicle_tag: &str,
        vehicle_name: &str,
        token: &str,
    ) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "set_vehicle_name", &json!({ "vehicle_name": vehicle_name }), token)
            .await
    }

    /// Guest Mode
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn guest_mode(&self, vehicle_tag: &str, on: bool, token: &str) -> Result<Payload, TeslaError> {
        self.send(vehicle_tag, "guest_mode", &json!({ "on": on }), token)
            .await
    }

    /// Erases user data (parked, Guest Mode only)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn erase_user_data(&self, vehicle_tag: &str, token: &str) -> Result<Payload, TeslaError> {
        self.bare(vehicle_tag, "erase_user_data", token).await
    }
}

impl crate::Client {
    /// Returns the Commands API resource
    #[must_use]
    pub const fn commands(&self) -> Commands<'_> {
        Commands::new(self)
    }
}
