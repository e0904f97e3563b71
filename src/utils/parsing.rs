//! Parsing utilities for CLI arguments.
//!
//! This module provides reusable parsing functions for the mode and power
//! names accepted by the one-shot subcommands.

use crate::error::{AirconError, Result};
use crate::protocol::mode::{PowerState, WorkMode};

/// Parse a mode name into a [`WorkMode`].
///
/// # Arguments
/// * `name` - Mode name: off, fan, heat, cool, dry or auto (any case)
///
/// # Example
/// ```
/// use hisense_aircon::utils::parsing::parse_work_mode;
/// use hisense_aircon::protocol::WorkMode;
///
/// let mode = parse_work_mode("cool").unwrap();
/// assert_eq!(mode, WorkMode::Cool);
/// ```
pub fn parse_work_mode(name: &str) -> Result<WorkMode> {
    match name.to_lowercase().as_str() {
        "off" => Ok(WorkMode::Off),
        "fan" => Ok(WorkMode::Fan),
        "heat" => Ok(WorkMode::Heat),
        "cool" => Ok(WorkMode::Cool),
        "dry" => Ok(WorkMode::Dry),
        "auto" => Ok(WorkMode::Auto),
        _ => Err(AirconError::InvalidInput(format!(
            "Unknown mode '{}'. Use: off, fan, heat, cool, dry or auto",
            name
        ))),
    }
}

/// Parse a power state name into a [`PowerState`].
///
/// # Arguments
/// * `name` - "on" or "off" (any case)
pub fn parse_power(name: &str) -> Result<PowerState> {
    match name.to_lowercase().as_str() {
        "on" => Ok(PowerState::On),
        "off" => Ok(PowerState::Off),
        _ => Err(AirconError::InvalidInput(format!(
            "Unknown power state '{}'. Use: on or off",
            name
        ))),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_work_mode() {
        assert_eq!(parse_work_mode("cool").unwrap(), WorkMode::Cool);
        assert_eq!(parse_work_mode("DRY").unwrap(), WorkMode::Dry);
        assert_eq!(parse_work_mode("Auto").unwrap(), WorkMode::Auto);
        assert_eq!(parse_work_mode("off").unwrap(), WorkMode::Off);
        assert!(parse_work_mode("turbo").is_err());
    }

    #[test]
    fn test_parse_power() {
        assert_eq!(parse_power("on").unwrap(), PowerState::On);
        assert_eq!(parse_power("OFF").unwrap(), PowerState::Off);
        assert!(parse_power("standby").is_err());
    }
}
