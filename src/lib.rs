//! Hisense AirCon Bridge Library
//!
//! A Rust bridge that supervises a Hisense air-conditioning unit through its
//! local HTTP status/command service.
//!
//! # Features
//!
//! - Poll the status endpoint on a timer and map the reported props into
//!   four virtual device slots (room temperature, power, mode, target
//!   temperature)
//! - Translate user actions on those slots into outbound command requests
//! - Bounded start-up connectivity probe, non-fatal on failure
//!
//! # Example
//!
//! ```no_run
//! use hisense_aircon::adapter::StatusCommandAdapter;
//! use hisense_aircon::config::AdapterSettings;
//! use hisense_aircon::registry::{InMemoryRegistry, Slot};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = AdapterSettings::default();
//!     let mut adapter = StatusCommandAdapter::new(&settings)?;
//!     let mut registry = InMemoryRegistry::new();
//!
//!     // Register slots and probe the server
//!     adapter.on_start(&mut registry);
//!
//!     // Poll once; slot values now mirror the unit's reported status
//!     adapter.on_heartbeat(&mut registry);
//!
//!     // Switch the unit on (local slot reflects the request immediately)
//!     adapter.on_command(&mut registry, Slot::Power.unit(), "On", 0.0);
//!
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod config;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod transport;
pub mod utils;

// Re-exports for convenience
pub use adapter::StatusCommandAdapter;
pub use config::AdapterSettings;
pub use error::{AirconError, Result};
pub use protocol::{PowerState, WorkMode};
pub use registry::{DeviceRegistry, InMemoryRegistry, Slot};
