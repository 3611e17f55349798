use serde::{Deserialize, Serialize};

/// Body for the `set_temps` command (Celsius)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SetTempsRequest {
    /// Driver-side temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_temp: Option<f64>,
    /// Passenger-side temperature; the vehicle syncs with the driver when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_temp: Option<f64>,
}

/// Body for `add_charge_schedule` and `add_precondition_schedule`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ScheduleRequest {
    /// Schedule time
    pub time: String,
    /// Location latitude
    pub latitude: f64,
    /// Location longitude
    pub longitude: f64,
    /// Display name
    #[serde(skip_serializing_if = "super::is_blank")]
    pub name: Option<String>,
    /// Run once instead of recurring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time: Option<bool>,
}

impl ScheduleRequest {
    /// Creates a schedule at `time` for the given location
    #[must_use]
    pub fn new(time: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            time: time.into(),
            latitude,
            longitude,
            name: None,
            one_time: None,
        }
    }

    /// Sets the schedule name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Marks the schedule as one-time
    #[must_use]
    pub const fn with_one_time(mut self, one_time: bool) -> Self {
        self.one_time = Some(one_time);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_omits_unset_fields() {
        let v = serde_json::to_value(ScheduleRequest::new("08:00", 37.0, -122.0)).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"time": "08:00", "latitude": 37.0, "longitude": -122.0})
        );
    }

    #[test]
    fn schedule_keeps_explicit_false() {
        let v = serde_json::to_value(
            ScheduleRequest::new("08:00", 1.0, 2.0)
                .with_name("Work")
                .with_one_time(false),
        )
        .unwrap();
        assert_eq!(v["name"], "Work");
        assert_eq!(v["one_time"], false);
    }
}
