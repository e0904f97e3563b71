//! Command URL construction for the AirCon local HTTP API.
//!
//! Commands are plain GETs against `/hisense/command` with `property` /
//! `value` query pairs. The temperature command deliberately carries two
//! `property=` pairs; precedence between them is the remote's contract.

use crate::protocol::mode::{PowerState, WorkMode};
use crate::protocol::status::format_reading;

/// Path of the command endpoint, relative to the server authority.
pub const COMMAND_PATH: &str = "/hisense/command";

// =============================================================================
// Property Names
// =============================================================================

/// Power switch property.
pub const PROP_POWER: &str = "t_power";
/// Operating mode property.
pub const PROP_WORK_MODE: &str = "t_work_mode";
/// Target temperature property.
pub const PROP_TARGET_TEMP: &str = "t_temp";
/// Temperature unit property, sent alongside the target temperature.
pub const PROP_TEMP_UNIT: &str = "t_temptype";
/// The only temperature unit this bridge speaks.
pub const TEMP_UNIT_CELSIUS: &str = "CELSIUS";

// =============================================================================
// URL Builders
// =============================================================================

/// Build the power on/off command URL.
pub fn power_url(command_url: &str, state: PowerState) -> String {
    format!(
        "{command_url}?property={PROP_POWER}&value={}",
        state.value()
    )
}

/// Build the operating-mode command URL.
pub fn mode_url(command_url: &str, mode: WorkMode) -> String {
    format!(
        "{command_url}?property={PROP_WORK_MODE}&value={}",
        mode.label()
    )
}

/// Build the target-temperature command URL.
///
/// Keeps both `property=` pairs in one URL, exactly as the remote expects.
pub fn target_temp_url(command_url: &str, celsius: f64) -> String {
    format!(
        "{command_url}?property={PROP_TARGET_TEMP}&value={}&property={PROP_TEMP_UNIT}&value={TEMP_UNIT_CELSIUS}",
        format_reading(celsius)
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8888/hisense/command";

    #[test]
    fn test_power_url() {
        assert_eq!(
            power_url(BASE, PowerState::On),
            "http://localhost:8888/hisense/command?property=t_power&value=ON"
        );
        assert_eq!(
            power_url(BASE, PowerState::Off),
            "http://localhost:8888/hisense/command?property=t_power&value=OFF"
        );
    }

    #[test]
    fn test_mode_url() {
        assert_eq!(
            mode_url(BASE, WorkMode::from_level(40)),
            "http://localhost:8888/hisense/command?property=t_work_mode&value=DRY"
        );
        assert_eq!(
            mode_url(BASE, WorkMode::Off),
            "http://localhost:8888/hisense/command?property=t_work_mode&value=OFF"
        );
    }

    #[test]
    fn test_target_temp_url_keeps_both_pairs() {
        assert_eq!(
            target_temp_url(BASE, 23.0),
            "http://localhost:8888/hisense/command?property=t_temp&value=23&property=t_temptype&value=CELSIUS"
        );
        assert_eq!(
            target_temp_url(BASE, 21.5),
            "http://localhost:8888/hisense/command?property=t_temp&value=21.5&property=t_temptype&value=CELSIUS"
        );
    }
}
