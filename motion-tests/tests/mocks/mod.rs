//! Mock-Implementierungen der Hardware-Traits für Host-Tests

#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal_async::delay::DelayNs;
use motion_core::{Buzzer, Channel, Level, MotionSensor, NetworkLink, TelemetryClient, TelemetryRecord};

pub const CHANNEL: Channel = Channel::new(3005560, "ALW22BSTI0HSVEIO");

// ============================================================================
// Mock Sensor
// ============================================================================

/// Liefert eine vorgegebene Folge von Lesungen, danach `Low`
#[derive(Default)]
pub struct MockSensor {
    pub readings: VecDeque<Level>,
    pub read_count: usize,
}

impl MockSensor {
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            readings: bits.iter().map(|&b| Level::from(b == 1)).collect(),
            read_count: 0,
        }
    }
}

impl MotionSensor for MockSensor {
    fn read(&mut self) -> Level {
        self.read_count += 1;
        self.readings.pop_front().unwrap_or(Level::Low)
    }
}

// ============================================================================
// Mock Buzzer
// ============================================================================

#[derive(Default)]
pub struct MockBuzzer {
    /// Alle geschriebenen Pegel in Reihenfolge
    pub writes: Vec<Level>,
}

impl MockBuzzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> Option<Level> {
        self.writes.last().copied()
    }
}

impl Buzzer for MockBuzzer {
    fn set_level(&mut self, level: Level) {
        self.writes.push(level);
    }
}

// ============================================================================
// Mock Telemetry Client
// ============================================================================

/// Antwortet mit vorgegebenen Status-Codes, danach mit `default_status`
pub struct MockTelemetry {
    pub responses: VecDeque<i32>,
    pub default_status: i32,
    /// (Channel-ID, Record) jedes Aufrufs
    pub calls: Vec<(u32, TelemetryRecord)>,
}

impl MockTelemetry {
    pub fn new() -> Self {
        Self::always(200)
    }

    pub fn always(status: i32) -> Self {
        Self {
            responses: VecDeque::new(),
            default_status: status,
            calls: Vec::new(),
        }
    }

    pub fn with_responses(responses: &[i32]) -> Self {
        Self {
            responses: responses.iter().copied().collect(),
            ..Self::new()
        }
    }
}

impl TelemetryClient for MockTelemetry {
    async fn write_fields(&mut self, channel: &Channel, record: &TelemetryRecord) -> i32 {
        self.calls.push((channel.id, *record));
        self.responses.pop_front().unwrap_or(self.default_status)
    }
}

// ============================================================================
// Mock Network Link
// ============================================================================

/// Meldet sich nach `associate_after` Prüfungen als verbunden (None = nie)
pub struct MockLink {
    pub associate_after: Option<u32>,
    pub checks: u32,
}

impl MockLink {
    pub fn connected_after(checks: u32) -> Self {
        Self {
            associate_after: Some(checks),
            checks: 0,
        }
    }

    pub fn never() -> Self {
        Self {
            associate_after: None,
            checks: 0,
        }
    }
}

impl NetworkLink for MockLink {
    fn is_associated(&mut self) -> bool {
        self.checks += 1;
        matches!(self.associate_after, Some(n) if self.checks >= n)
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Zeichnet Wartezeiten auf statt zu schlafen
#[derive(Default)]
pub struct MockDelay {
    pub delays_ms: Vec<u32>,
    pub total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}
