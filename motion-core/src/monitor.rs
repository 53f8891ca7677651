//! Poll-Loop Zustand und Logik
//!
//! `MotionMonitor` besitzt Sensor, Buzzer, Telemetrie-Client, Channel und
//! Flanken-Latch. Eine Iteration läuft strikt sequentiell:
//! lesen → Flanke prüfen → Buzzer setzen → ggf. senden → Latch aktualisieren.

use embedded_hal_async::delay::DelayNs;

use crate::association::{AssociationError, RetryPolicy, wait_for_association};
use crate::logic::{EdgeLatch, Transition, buzzer_command};
use crate::telemetry::{SendOutcome, TelemetryRecord};
use crate::traits::{Buzzer, MotionSensor, NetworkLink, TelemetryClient};
use crate::types::{Channel, Level, PollReport};

/// Abtastperiode in Millisekunden (zugleich das Entprell-Fenster)
pub const POLL_PERIOD_MS: u32 = 100;

/// Zustand des Bewegungsmelders
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Real Hardware (GPIO + ThingSpeak über embassy-net) im Production-Code
/// - Mock Implementationen in Host-Tests
pub struct MotionMonitor<S, B, T> {
    sensor: S,
    buzzer: B,
    telemetry: T,
    channel: Channel,
    latch: EdgeLatch,
    buzzer_level: Level,
}

impl<S, B, T> MotionMonitor<S, B, T>
where
    S: MotionSensor,
    B: Buzzer,
    T: TelemetryClient,
{
    /// Erstellt den Monitor
    ///
    /// Schreibt nichts auf den Buzzer: der Pin ist ab Konfiguration LOW und
    /// wird ausschließlich aus einer Sensor-Lesung heraus gesetzt.
    pub fn new(sensor: S, buzzer: B, telemetry: T, channel: Channel) -> Self {
        Self {
            sensor,
            buzzer,
            telemetry,
            channel,
            latch: EdgeLatch::new(),
            buzzer_level: Level::Low,
        }
    }

    /// Startsequenz: erst begrenzt auf die Verbindung warten, dann den
    /// Telemetrie-Client erzeugen und den Monitor bauen
    ///
    /// `connect_client` wird nur nach erfolgreicher Assoziation aufgerufen.
    /// Bei Timeout wird weder der Sensor gelesen noch der Buzzer geschrieben.
    ///
    /// # Rückgabe
    /// Den Monitor und die Anzahl der Prüfungen bis zur Verbindung
    pub async fn connect<L, D, F>(
        link: &mut L,
        delay: &mut D,
        policy: RetryPolicy,
        sensor: S,
        buzzer: B,
        channel: Channel,
        connect_client: F,
    ) -> Result<(Self, u32), AssociationError>
    where
        L: NetworkLink,
        D: DelayNs,
        F: FnOnce() -> T,
    {
        let attempts = wait_for_association(link, delay, policy).await?;
        let monitor = Self::new(sensor, buzzer, connect_client(), channel);
        Ok((monitor, attempts))
    }

    /// Lesung der letzten Iteration (Latch)
    pub fn last_reading(&self) -> Level {
        self.latch.last()
    }

    /// Zuletzt auf den Buzzer geschriebener Pegel
    pub fn buzzer_level(&self) -> Level {
        self.buzzer_level
    }

    /// Führt eine Poll-Iteration ohne Wartezeit aus
    ///
    /// Ein fehlgeschlagener Upload ändert keinen Zustand und wird nicht
    /// wiederholt, die nächste steigende Flanke sendet unabhängig davon.
    /// Mit Feature `defmt` werden Bewegung und Upload-Ergebnis geloggt.
    pub async fn poll_once(&mut self) -> PollReport {
        let reading = self.sensor.read();
        let transition = self.latch.observe(reading);

        #[cfg(feature = "defmt")]
        if transition == Transition::Rising {
            defmt::info!("Motion: Motion Detected!");
        }

        let buzzer_write = buzzer_command(transition, reading);
        if let Some(level) = buzzer_write {
            self.buzzer.set_level(level);
            self.buzzer_level = level;
        }

        let submission = if transition == Transition::Rising {
            let record = TelemetryRecord::motion_detected();
            let code = self.telemetry.write_fields(&self.channel, &record).await;
            let outcome = SendOutcome::from_status(code);

            #[cfg(feature = "defmt")]
            match outcome {
                SendOutcome::Accepted => defmt::info!("Motion: Data sent to ThingSpeak."),
                SendOutcome::Failed(code) => {
                    defmt::warn!("Motion: Failed to send. HTTP error: {}", code)
                }
            }

            Some(outcome)
        } else {
            None
        };

        PollReport {
            reading,
            buzzer_write,
            submission,
        }
    }

    /// Eine Iteration plus feste Abtastperiode
    pub async fn poll_cycle<D: DelayNs>(&mut self, delay: &mut D) -> PollReport {
        let report = self.poll_once().await;
        delay.delay_ms(POLL_PERIOD_MS).await;
        report
    }

    /// Gibt die Hardware-Objekte zurück
    pub fn into_parts(self) -> (S, B, T) {
        (self.sensor, self.buzzer, self.telemetry)
    }
}
