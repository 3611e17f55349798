//! Endpoint resources for the Tesla client
//!
//! Each resource maps one domain action to exactly one HTTP call and returns
//! whatever the client core decoded. Errors pass through unchanged.

/// Fleet-wide charging history resource
pub mod charging;
/// Vehicle command resource
pub mod commands;
/// Energy site resource
pub mod energy;
/// Push-notification subscription resource
pub mod subscriptions;
/// Self-hosted TeslaMate resource
pub mod teslamate;
/// User account resource
pub mod user;
/// Vehicle data and management resource
pub mod vehicles;

pub use charging::Charging;
pub use commands::Commands;
pub use energy::Energy;
pub use subscriptions::Subscriptions;
pub use teslamate::TeslaMate;
pub use user::User;
pub use vehicles::Vehicles;

/// `/api/1/vehicles/{tag}` with an optional `/suffix`
pub(crate) fn vehicle_path(vehicle_tag: &str, suffix: &str) -> String {
    scoped_path("/api/1/vehicles", vehicle_tag, suffix)
}

/// `/api/1/energy_sites/{id}` with an optional `/suffix`
pub(crate) fn energy_site_path(energy_site_id: &str, suffix: &str) -> String {
    scoped_path("/api/1/energy_sites", energy_site_id, suffix)
}

fn scoped_path(prefix: &str, id: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        format!("{prefix}/{id}")
    } else {
        format!("{prefix}/{id}/{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_paths() {
        assert_eq!(vehicle_path("VIN1", ""), "/api/1/vehicles/VIN1");
        assert_eq!(
            vehicle_path("VIN1", "command/door_lock"),
            "/api/1/vehicles/VIN1/command/door_lock"
        );
    }

    #[test]
    fn energy_site_paths() {
        assert_eq!(
            energy_site_path("site123", "site_info"),
            "/api/1/energy_sites/site123/site_info"
        );
    }
}
