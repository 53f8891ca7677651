//! Integration Tests für den Verbindungsaufbau
//!
//! Prüft das begrenzte Warten auf die WLAN-Assoziation und dass ohne
//! Verbindung keine Poll-Iteration startet.

mod mocks;

use embassy_futures::block_on;
use mocks::{CHANNEL, MockBuzzer, MockDelay, MockLink, MockSensor, MockTelemetry};
use motion_core::{AssociationError, MotionMonitor, RetryPolicy, wait_for_association};

type TestMonitor<'a> = MotionMonitor<&'a mut MockSensor, &'a mut MockBuzzer, MockTelemetry>;

/// Startsequenz mit Mock-Hardware; zählt wie oft der Client erzeugt wurde
fn connect<'a>(
    link: &mut MockLink,
    delay: &mut MockDelay,
    policy: RetryPolicy,
    sensor: &'a mut MockSensor,
    buzzer: &'a mut MockBuzzer,
    clients: &mut u32,
) -> Result<(TestMonitor<'a>, u32), AssociationError> {
    block_on(MotionMonitor::connect(
        link,
        delay,
        policy,
        sensor,
        buzzer,
        CHANNEL,
        || {
            *clients += 1;
            MockTelemetry::new()
        },
    ))
}

#[test]
fn test_already_connected_returns_immediately() {
    let mut link = MockLink::connected_after(1);
    let mut delay = MockDelay::new();

    let result = block_on(wait_for_association(
        &mut link,
        &mut delay,
        RetryPolicy::default(),
    ));

    assert_eq!(result, Ok(1));
    assert!(delay.delays_ms.is_empty());
}

#[test]
fn test_connects_after_retries() {
    let mut link = MockLink::connected_after(4);
    let mut delay = MockDelay::new();

    let result = block_on(wait_for_association(
        &mut link,
        &mut delay,
        RetryPolicy::new(1000, 10),
    ));

    assert_eq!(result, Ok(4));
    assert_eq!(link.checks, 4);
    // Zwischen den Prüfungen jeweils 1 Sekunde
    assert_eq!(delay.delays_ms, vec![1000, 1000, 1000]);
}

#[test]
fn test_timeout_after_max_attempts() {
    let mut link = MockLink::never();
    let mut delay = MockDelay::new();

    let result = block_on(wait_for_association(
        &mut link,
        &mut delay,
        RetryPolicy::new(1000, 5),
    ));

    assert_eq!(result, Err(AssociationError::Timeout { attempts: 5 }));
    assert_eq!(link.checks, 5);
    // Nach der letzten Prüfung wird nicht mehr gewartet
    assert_eq!(delay.delays_ms.len(), 4);
}

#[test]
fn test_connect_on_last_attempt() {
    let mut link = MockLink::connected_after(3);
    let mut delay = MockDelay::new();

    let result = block_on(wait_for_association(
        &mut link,
        &mut delay,
        RetryPolicy::new(250, 3),
    ));

    assert_eq!(result, Ok(3));
    assert_eq!(delay.delays_ms, vec![250, 250]);
}

#[test]
fn test_zero_attempts_checks_once() {
    let mut link = MockLink::never();
    let mut delay = MockDelay::new();

    let result = block_on(wait_for_association(
        &mut link,
        &mut delay,
        RetryPolicy::new(1000, 0),
    ));

    assert_eq!(result, Err(AssociationError::Timeout { attempts: 1 }));
    assert_eq!(link.checks, 1);
    assert!(delay.delays_ms.is_empty());
}

#[test]
fn test_default_policy() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.interval_ms, 1000);
    assert_eq!(policy.max_attempts, 30);
}

#[test]
fn test_no_poll_without_association() {
    let mut link = MockLink::never();
    let mut delay = MockDelay::new();
    let mut sensor = MockSensor::from_bits(&[1, 0, 1]);
    let mut buzzer = MockBuzzer::new();
    let mut clients = 0;

    let result = connect(
        &mut link,
        &mut delay,
        RetryPolicy::new(1000, 3),
        &mut sensor,
        &mut buzzer,
        &mut clients,
    );

    assert_eq!(
        result.map(|(_, attempts)| attempts),
        Err(AssociationError::Timeout { attempts: 3 })
    );
    // Kein Sensor-Zugriff, kein Buzzer, kein Client ohne Verbindung
    assert_eq!(sensor.read_count, 0);
    assert!(buzzer.writes.is_empty());
    assert_eq!(clients, 0);
}

#[test]
fn test_poll_after_association() {
    let mut link = MockLink::connected_after(2);
    let mut delay = MockDelay::new();
    let mut sensor = MockSensor::from_bits(&[1, 0, 1]);
    let mut buzzer = MockBuzzer::new();
    let mut clients = 0;

    let (mut monitor, attempts) = connect(
        &mut link,
        &mut delay,
        RetryPolicy::default(),
        &mut sensor,
        &mut buzzer,
        &mut clients,
    )
    .unwrap();
    assert_eq!(attempts, 2);

    for _ in 0..3 {
        block_on(monitor.poll_cycle(&mut delay));
    }
    let (_, _, telemetry) = monitor.into_parts();

    assert_eq!(clients, 1);
    assert_eq!(sensor.read_count, 3);
    // Flanken bei Iteration 0 und 2
    assert_eq!(telemetry.calls.len(), 2);
    // 1 s Assoziation, danach dreimal die Abtastperiode
    assert_eq!(delay.delays_ms, vec![1000, 100, 100, 100]);
}
