// Library-Root: Hardware-Implementierungen und Tasks
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;
pub mod thingspeak;

// Re-exports von motion-core
pub use motion_core::{
    Buzzer, Channel, Level, MotionMonitor, MotionSensor, NetworkLink, SendOutcome,
    TelemetryClient, TelemetryRecord,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Diese Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal,
// esp-radio, embassy-net Treiber). Alles was testbar ist, liegt daher in
// motion-core und wird in motion-tests mit Mocks auf dem Host getestet:
//
// - Flankenerkennung und Buzzer-Logik (EdgeLatch, buzzer_command)
// - Poll-Iteration (MotionMonitor mit MockSensor/MockBuzzer/MockTelemetry)
// - Begrenztes Warten auf die WLAN-Verbindung (MockLink/MockDelay)
// - ThingSpeak Request-Aufbau und Antwort-Auswertung (wire)
//
// Hier verbleiben nur dünne Adapter (GPIO, Stack-Status, TCP-Transport).
