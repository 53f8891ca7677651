//! Pure Business Logic Functions
//!
//! Flankenerkennung und Buzzer-Ansteuerung ohne Hardware-Dependencies (testbar!)

use crate::types::Level;

/// Übergang zwischen zwei aufeinanderfolgenden Sensor-Lesungen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// 0 → 1: Bewegung erkannt
    Rising,
    /// 1 → 0: Sensor wieder inaktiv
    Falling,
    /// Keine Änderung
    Steady,
}

/// Flanken-Latch: merkt sich die Lesung der vorherigen Iteration
///
/// Startet mit `Level::Low`, d.h. eine `High`-Lesung direkt nach dem
/// Start zählt bereits als steigende Flanke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeLatch {
    last: Level,
}

impl EdgeLatch {
    pub const fn new() -> Self {
        Self { last: Level::Low }
    }

    /// Zuletzt beobachtete Lesung
    pub const fn last(&self) -> Level {
        self.last
    }

    /// Vergleicht die neue Lesung mit dem Latch und aktualisiert ihn
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use motion_core::{EdgeLatch, Level, Transition};
    /// let mut latch = EdgeLatch::new();
    /// assert_eq!(latch.observe(Level::High), Transition::Rising);
    /// assert_eq!(latch.observe(Level::High), Transition::Steady);
    /// assert_eq!(latch.observe(Level::Low), Transition::Falling);
    /// ```
    pub fn observe(&mut self, reading: Level) -> Transition {
        let transition = match (self.last, reading) {
            (Level::Low, Level::High) => Transition::Rising,
            (Level::High, Level::Low) => Transition::Falling,
            _ => Transition::Steady,
        };
        self.last = reading;
        transition
    }
}

/// Bestimmt welcher Pegel (falls überhaupt) auf den Buzzer geschrieben wird
///
/// - Steigende Flanke → `High`
/// - Sensor inaktiv → `Low` (unabhängig von der Flanke)
/// - Sonst → `None`, der Buzzer behält seinen Pegel
pub fn buzzer_command(transition: Transition, reading: Level) -> Option<Level> {
    match (transition, reading) {
        (Transition::Rising, _) => Some(Level::High),
        (_, Level::Low) => Some(Level::Low),
        _ => None,
    }
}
