//! Bridge adapter layer.
//!
//! Translates between the host's virtual device slots and the AirCon
//! service's status/command HTTP API.

mod bridge;

pub use bridge::StatusCommandAdapter;
