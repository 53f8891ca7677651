//! Core Types für die Bewegungsmelder-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::telemetry::SendOutcome;

/// Digitaler Pegel eines Pins (Sensor-Eingang oder Buzzer-Ausgang)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    /// 0 - Sensor inaktiv / Buzzer aus
    #[default]
    Low,
    /// 1 - Bewegung erkannt / Buzzer an
    High,
}

impl Level {
    pub const fn from_bool(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        Level::from_bool(high)
    }
}

/// ThingSpeak Channel-Identität
///
/// Wird zur Build-Zeit festgelegt und ändert sich während der Laufzeit nicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    /// Numerische Channel-ID
    pub id: u32,
    /// Write API Key des Channels
    pub write_api_key: &'static str,
}

impl Channel {
    pub const fn new(id: u32, write_api_key: &'static str) -> Self {
        Self { id, write_api_key }
    }
}

/// Ergebnis einer einzelnen Poll-Iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollReport {
    /// Gelesener Sensor-Pegel
    pub reading: Level,
    /// Pegel der auf den Buzzer geschrieben wurde (None = nicht angefasst)
    pub buzzer_write: Option<Level>,
    /// Ergebnis des Telemetrie-Uploads (nur bei steigender Flanke)
    pub submission: Option<SendOutcome>,
}

impl PollReport {
    /// true wenn in dieser Iteration eine Bewegung erkannt wurde
    pub fn motion_detected(&self) -> bool {
        self.submission.is_some()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Level::Low => defmt::write!(fmt, "LOW"),
            Level::High => defmt::write!(fmt, "HIGH"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Channel {
    fn format(&self, fmt: defmt::Formatter) {
        // API Key wird bewusst nicht geloggt
        defmt::write!(fmt, "Channel {{ id: {} }}", self.id)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PollReport {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PollReport {{ reading: {}, buzzer: {}, submission: {} }}",
            self.reading,
            self.buzzer_write,
            self.submission
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert_eq!(Level::default(), Level::Low);
    }

    #[test]
    fn test_level_is_high() {
        assert!(Level::High.is_high());
        assert!(!Level::Low.is_high());
    }
}
