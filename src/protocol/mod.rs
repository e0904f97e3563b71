//! Wire protocol for the AirCon local HTTP API.
//!
//! This module contains the mode/power lookup tables, status payload
//! parsing, and command URL builders for the `/hisense` endpoints.

pub mod commands;
pub mod mode;
pub mod status;

pub use commands::*;
pub use mode::{PowerState, WorkMode};
pub use status::*;
