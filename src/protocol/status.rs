//! Status payload parsing for the AirCon local HTTP API.
//!
//! Parses the JSON body of `GET /hisense/status` into structured props.
//! All four props are optional; a response may update any subset of slots.

use serde::Deserialize;

use crate::error::{AirconError, Result};

/// Path of the status endpoint, relative to the server authority.
pub const STATUS_PATH: &str = "/hisense/status";

// =============================================================================
// Status Structures
// =============================================================================

/// Top-level status response: `{"devices": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub devices: Vec<StatusDevice>,
}

/// One device entry carrying a `props` bag.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusDevice {
    #[serde(default)]
    pub props: DeviceProps,
}

/// The four props the bridge extracts from `devices[0].props`.
///
/// Fields absent from the payload stay `None` and leave the corresponding
/// slot untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceProps {
    /// Indoor temperature reading in Celsius.
    #[serde(rename = "f_temp_in")]
    pub room_temp: Option<f64>,
    /// Power state, `"ON"` or `"OFF"`.
    #[serde(rename = "t_power")]
    pub power: Option<String>,
    /// Operating mode label (`FAN`/`HEAT`/`COOL`/`DRY`/`AUTO`).
    #[serde(rename = "t_work_mode")]
    pub work_mode: Option<String>,
    /// Target temperature in Celsius.
    #[serde(rename = "t_temp")]
    pub target_temp: Option<f64>,
}

impl StatusResponse {
    /// Parse a raw response body.
    ///
    /// # Errors
    /// Returns `MalformedStatus` if the body is not the expected JSON shape.
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Take the props of the first reported device.
    ///
    /// # Errors
    /// Returns `NoDevices` if the `devices` array is empty or missing.
    pub fn first_props(self) -> Result<DeviceProps> {
        self.devices
            .into_iter()
            .next()
            .map(|device| device.props)
            .ok_or(AirconError::NoDevices)
    }
}

/// Render a numeric reading the way the source JSON spells it: integral
/// values without a decimal point (`23` -> `"23"`, `21.5` -> `"21.5"`).
pub fn format_reading(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_status() {
        let body = r#"{"devices":[{"props":{"f_temp_in":21.5,"t_power":"ON","t_work_mode":"COOL","t_temp":23}}]}"#;
        let props = StatusResponse::parse(body).unwrap().first_props().unwrap();
        assert_eq!(props.room_temp, Some(21.5));
        assert_eq!(props.power.as_deref(), Some("ON"));
        assert_eq!(props.work_mode.as_deref(), Some("COOL"));
        assert_eq!(props.target_temp, Some(23.0));
    }

    #[test]
    fn test_parse_partial_status() {
        let body = r#"{"devices":[{"props":{"f_temp_in":22,"t_temp":24}}]}"#;
        let props = StatusResponse::parse(body).unwrap().first_props().unwrap();
        assert_eq!(props.room_temp, Some(22.0));
        assert!(props.power.is_none());
        assert!(props.work_mode.is_none());
        assert_eq!(props.target_temp, Some(24.0));
    }

    #[test]
    fn test_unknown_props_are_ignored() {
        let body = r#"{"devices":[{"props":{"t_power":"OFF","t_fan_speed":"HIGH","f_humidity":40}}]}"#;
        let props = StatusResponse::parse(body).unwrap().first_props().unwrap();
        assert_eq!(props.power.as_deref(), Some("OFF"));
        assert!(props.room_temp.is_none());
    }

    #[test]
    fn test_empty_device_list() {
        let response = StatusResponse::parse(r#"{"devices":[]}"#).unwrap();
        assert!(matches!(
            response.first_props(),
            Err(AirconError::NoDevices)
        ));

        // A body without a devices key counts as empty, not malformed
        let response = StatusResponse::parse("{}").unwrap();
        assert!(matches!(
            response.first_props(),
            Err(AirconError::NoDevices)
        ));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            StatusResponse::parse("<html>502</html>"),
            Err(AirconError::MalformedStatus(_))
        ));
    }

    #[test]
    fn test_format_reading() {
        assert_eq!(format_reading(23.0), "23");
        assert_eq!(format_reading(21.5), "21.5");
        assert_eq!(format_reading(0.0), "0");
        assert_eq!(format_reading(-5.0), "-5");
    }
}
