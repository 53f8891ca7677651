//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware- und Netzwerk-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** GPIO-Treiber, embassy-net Stack, ThingSpeak HTTP Client (motion-firmware)
//! - **Testing:** In-memory Mocks (motion-tests)

use crate::telemetry::TelemetryRecord;
use crate::types::{Channel, Level};

/// Trait für den digitalen IR-Bewegungssensor
pub trait MotionSensor {
    /// Liest den aktuellen Pegel des Sensors (polling, kein Interrupt)
    fn read(&mut self) -> Level;
}

impl<S: MotionSensor + ?Sized> MotionSensor for &mut S {
    fn read(&mut self) -> Level {
        S::read(self)
    }
}

/// Trait für den Buzzer-Ausgang
pub trait Buzzer {
    /// Setzt den Ausgangspegel (Pegel, kein Puls)
    fn set_level(&mut self, level: Level);
}

impl<B: Buzzer + ?Sized> Buzzer for &mut B {
    fn set_level(&mut self, level: Level) {
        B::set_level(self, level)
    }
}

/// Trait für den Netzwerk-Status
pub trait NetworkLink {
    /// true sobald das Gerät mit dem WLAN assoziiert ist und eine IP hat
    fn is_associated(&mut self) -> bool;
}

/// Trait für den Telemetrie-Upload
///
/// Entspricht einem synchronen "write fields" Aufruf: der Aufruf kehrt erst
/// zurück, wenn ein Status-Code vorliegt.
#[allow(async_fn_in_trait)]
pub trait TelemetryClient {
    /// Sendet alle gesetzten Felder des Records an den Channel
    ///
    /// # Rückgabe
    /// HTTP-Status (`200` = Erfolg) oder ein negativer Fehler-Code aus
    /// [`crate::telemetry::status`] für Transport-Fehler.
    async fn write_fields(&mut self, channel: &Channel, record: &TelemetryRecord) -> i32;
}
