//! Motion Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits für Sensor, Buzzer, Netzwerk und Telemetrie,
//! die Poll-Logik und das ThingSpeak Wire-Format.

#![no_std]

pub mod association;
pub mod logic;
pub mod monitor;
pub mod telemetry;
pub mod traits;
pub mod types;
pub mod wire;

// Re-exports für einfachen Zugriff
pub use association::{AssociationError, RetryPolicy, wait_for_association};
pub use logic::{EdgeLatch, Transition, buzzer_command};
pub use monitor::{MotionMonitor, POLL_PERIOD_MS};
pub use telemetry::{RecordError, SendOutcome, TelemetryRecord};
pub use traits::{Buzzer, MotionSensor, NetworkLink, TelemetryClient};
pub use types::{Channel, Level, PollReport};
pub use wire::WireError;
