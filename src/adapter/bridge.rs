//! The status/command adapter.
//!
//! One object, two URLs and a poll timer. The host drives it through three
//! entry points: [`on_start`](StatusCommandAdapter::on_start) once at load,
//! [`on_heartbeat`](StatusCommandAdapter::on_heartbeat) on a fixed cadence,
//! and [`on_command`](StatusCommandAdapter::on_command) when the user acts
//! on a slot. Every network call blocks the invoking entry point for at most
//! its timeout; no entry point ever propagates an error to the host.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::config::AdapterSettings;
use crate::error::{AirconError, Result};
use crate::protocol::commands::{mode_url, power_url, target_temp_url};
use crate::protocol::mode::{PowerState, WorkMode};
use crate::protocol::status::{DeviceProps, StatusResponse, format_reading};
use crate::registry::{DeviceRegistry, Slot};
use crate::transport::{ReqwestTransport, Transport};

// =============================================================================
// Constants
// =============================================================================

/// Start-up probe attempts before giving up.
const PROBE_ATTEMPTS: u32 = 10;
/// Fixed wait between probe attempts.
const PROBE_DELAY: Duration = Duration::from_secs(5);
/// Timeout for a single probe request.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout for status polls and command sends.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// StatusCommandAdapter
// =============================================================================

/// Adapter between the host's device slots and the AirCon HTTP API.
///
/// Constructed once at start-up and passed by the host into each entry
/// point, together with the host-owned registry.
///
/// # Example
///
/// ```no_run
/// use hisense_aircon::adapter::StatusCommandAdapter;
/// use hisense_aircon::config::AdapterSettings;
/// use hisense_aircon::registry::{InMemoryRegistry, Slot};
///
/// let settings = AdapterSettings::default();
/// let mut adapter = StatusCommandAdapter::new(&settings)?;
/// let mut registry = InMemoryRegistry::new();
///
/// adapter.on_start(&mut registry);
/// adapter.on_heartbeat(&mut registry);
/// adapter.on_command(&mut registry, Slot::Power.unit(), "On", 0.0);
/// # Ok::<(), hisense_aircon::error::AirconError>(())
/// ```
pub struct StatusCommandAdapter {
    status_url: String,
    command_url: String,
    poll_interval: Duration,
    next_poll_at: Instant,
    transport: Box<dyn Transport>,
}

impl StatusCommandAdapter {
    /// Build an adapter that talks to the real AirCon service.
    ///
    /// # Errors
    /// Returns `Transport` if the HTTP client cannot be constructed.
    pub fn new(settings: &AdapterSettings) -> Result<Self> {
        Ok(Self::with_transport(
            settings,
            Box::new(ReqwestTransport::new()?),
        ))
    }

    /// Build an adapter over an arbitrary transport.
    pub fn with_transport(settings: &AdapterSettings, transport: Box<dyn Transport>) -> Self {
        Self {
            status_url: settings.status_url(),
            command_url: settings.command_url(),
            poll_interval: settings.poll_interval(),
            // first heartbeat polls immediately
            next_poll_at: Instant::now(),
            transport,
        }
    }

    // =========================================================================
    // Start-up
    // =========================================================================

    /// Start-up entry point: register the device slots and probe the server.
    ///
    /// A failed probe is logged but never fatal; the bridge loads unready
    /// and recovers on a later heartbeat.
    pub fn on_start(&mut self, registry: &mut dyn DeviceRegistry) {
        info!("AirCon bridge started");
        info!(
            "Polling interval set to {} minutes",
            self.poll_interval.as_secs() / 60
        );

        self.ensure_devices(registry);
        self.wait_for_server();
    }

    /// Register the four device slots, skipping any that already exist.
    pub fn ensure_devices(&self, registry: &mut dyn DeviceRegistry) {
        for slot in Slot::ALL {
            if !registry.contains(slot.unit()) {
                registry.create(slot.unit(), slot.name(), slot.class());
            }
        }
    }

    fn wait_for_server(&self) -> bool {
        self.probe(PROBE_ATTEMPTS, PROBE_DELAY)
    }

    /// Bounded connectivity probe: linear retry, early exit on the first
    /// 200.
    fn probe(&self, attempts: u32, delay: Duration) -> bool {
        for attempt in 1..=attempts {
            match self.transport.get(&self.status_url, PROBE_TIMEOUT) {
                Ok(reply) if reply.is_ok() => {
                    info!("AirCon server is up and running");
                    return true;
                }
                Ok(_) | Err(_) => {
                    info!("Waiting for AirCon server... attempt {attempt}/{attempts}");
                }
            }
            if attempt < attempts {
                thread::sleep(delay);
            }
        }

        error!("AirCon server failed to start or is not reachable");
        false
    }

    // =========================================================================
    // Heartbeat
    // =========================================================================

    /// Heartbeat entry point: poll the status endpoint when due.
    pub fn on_heartbeat(&mut self, registry: &mut dyn DeviceRegistry) {
        self.heartbeat_at(Instant::now(), registry);
    }

    fn heartbeat_at(&mut self, now: Instant, registry: &mut dyn DeviceRegistry) {
        if now < self.next_poll_at {
            debug!("Awaiting next poll");
            return;
        }

        match self.fetch_status() {
            Ok(props) => self.apply_status(registry, &props),
            Err(e) => error!("Error fetching status: {e}"),
        }

        // reschedule whether or not the poll succeeded
        self.next_poll_at = now + self.poll_interval;
    }

    fn fetch_status(&self) -> Result<DeviceProps> {
        let reply = self.transport.get(&self.status_url, REQUEST_TIMEOUT)?;
        if !reply.is_ok() {
            return Err(AirconError::BadStatus {
                url: self.status_url.clone(),
                status: reply.status,
            });
        }
        StatusResponse::parse(&reply.body)?.first_props()
    }

    /// Push each present prop into its slot; absent props leave the slot's
    /// prior value untouched.
    fn apply_status(&self, registry: &mut dyn DeviceRegistry, props: &DeviceProps) {
        if let Some(room_temp) = props.room_temp {
            registry.update(Slot::RoomTemp.unit(), 0, &format_reading(room_temp));
            info!("Updated room temperature: {room_temp}°C");
        }

        if let Some(power) = props.power.as_deref() {
            let state = PowerState::from_status(power);
            registry.update(Slot::Power.unit(), state.n_value(), state.s_value());
            info!("Updated power state: {power} nvalue: {}", state.n_value());
        }

        if let Some(label) = props.work_mode.as_deref() {
            let mode = WorkMode::from_label(label);
            registry.update(
                Slot::Mode.unit(),
                mode.level(),
                &mode.level().to_string(),
            );
            info!("Updated work mode: {label}");
        }

        if let Some(target_temp) = props.target_temp {
            registry.update(Slot::TargetTemp.unit(), 0, &format_reading(target_temp));
            info!("Updated set temperature: {target_temp}°C");
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Command entry point: dispatch a host command to its slot handler.
    ///
    /// The local slot always reflects the requested value once the handler
    /// returns, even when the remote rejected the command; the next
    /// successful poll reconciles any divergence.
    pub fn on_command(
        &mut self,
        registry: &mut dyn DeviceRegistry,
        unit: u8,
        command: &str,
        level: f64,
    ) {
        match Slot::from_unit(unit) {
            Some(Slot::Power) => self.control_power(registry, command),
            Some(Slot::Mode) => self.control_mode(registry, level as i32),
            Some(Slot::TargetTemp) => self.set_temperature(registry, level),
            Some(Slot::RoomTemp) | None => {
                warn!("Ignoring command for unit {unit}");
            }
        }
    }

    fn control_power(&self, registry: &mut dyn DeviceRegistry, command: &str) {
        let state = PowerState::from_command(command);
        self.send_command(&power_url(&self.command_url, state));
        info!("Power command sent: {}", state.value());
        registry.update(Slot::Power.unit(), state.n_value(), state.s_value());
    }

    fn control_mode(&self, registry: &mut dyn DeviceRegistry, level: i32) {
        let mode = WorkMode::from_level(level);
        self.send_command(&mode_url(&self.command_url, mode));
        info!("Mode command sent: {}", mode.label());
        registry.update(
            Slot::Mode.unit(),
            mode.level(),
            &mode.level().to_string(),
        );
    }

    fn set_temperature(&self, registry: &mut dyn DeviceRegistry, celsius: f64) {
        self.send_command(&target_temp_url(&self.command_url, celsius));
        info!("Temperature set to {celsius}C");
        registry.update(Slot::TargetTemp.unit(), 0, &format_reading(celsius));
    }

    /// Shared command helper: GET the URL, log the outcome, swallow every
    /// failure.
    fn send_command(&self, url: &str) {
        match self.transport.get(url, REQUEST_TIMEOUT) {
            Ok(reply) if reply.is_ok() => info!("Command successful: {url}"),
            Ok(reply) => error!("Command failed: {url} - Status {}", reply.status),
            Err(e) => error!("Error sending command: {e}"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
