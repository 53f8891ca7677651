// Motion Task - Pollt den IR-Sensor, steuert den Buzzer, meldet Bewegungen an ThingSpeak
use defmt::{Debug2Format, error, info};
use embassy_net::Stack;
use embassy_time::Delay;

use motion_core::{Buzzer, MotionMonitor, MotionSensor, TelemetryClient};

use crate::config::{
    ASSOCIATION_POLICY, CHANNEL, POLL_PERIOD_MS, THINGSPEAK_HOST, THINGSPEAK_PORT,
};
use crate::hal::{GpioBuzzer, GpioMotionSensor, StackLink};
use crate::thingspeak::ThingSpeakClient;

/// Endlose Poll-Schleife auf dem Embassy-Timer
///
/// Jede Iteration läuft komplett sequentiell:
/// Sensor lesen → Buzzer setzen → ggf. Upload → 100 ms warten.
/// Die Iteration selbst (`MotionMonitor::poll_cycle`) ist in motion-core
/// implementiert und dort mit Mocks getestet.
pub async fn motion_logic<S, B, T>(mut monitor: MotionMonitor<S, B, T>) -> !
where
    S: MotionSensor,
    B: Buzzer,
    T: TelemetryClient,
{
    let mut delay = Delay;
    info!("Motion: Polling sensor every {} ms", POLL_PERIOD_MS);

    loop {
        monitor.poll_cycle(&mut delay).await;
    }
}

/// Motion Task - Embassy Task
///
/// Wartet begrenzt auf die WLAN-Verbindung, erstellt danach den
/// ThingSpeak-Client und startet die Poll-Schleife. Bei Timeout wird der
/// Chip neu gestartet, gepollt wird nie ohne Verbindung.
///
/// # Parameter
/// - `sensor`: IR-Sensor am Eingangs-Pin
/// - `buzzer`: Buzzer am Ausgangs-Pin
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
#[embassy_executor::task]
pub async fn motion_task(
    sensor: GpioMotionSensor<'static>,
    buzzer: GpioBuzzer<'static>,
    stack: Stack<'static>,
) {
    info!("Motion: Task started, waiting for network...");
    let mut link = StackLink::new(stack);

    let started = MotionMonitor::connect(
        &mut link,
        &mut Delay,
        ASSOCIATION_POLICY,
        sensor,
        buzzer,
        CHANNEL,
        || ThingSpeakClient::new(stack, THINGSPEAK_HOST, THINGSPEAK_PORT),
    )
    .await;

    let monitor = match started {
        Ok((monitor, attempts)) => {
            info!("WiFi: Connected to WiFi ({} checks)", attempts);
            monitor
        }
        Err(e) => {
            error!("WiFi: {}, restarting", e);
            esp_hal::system::software_reset()
        }
    };

    if let Some(config) = stack.config_v4() {
        info!("  IP:      {}", Debug2Format(&config.address.address()));
        info!("  Gateway: {}", Debug2Format(&config.gateway));
    }
    info!(
        "ThingSpeak: Client ready for {} (channel {})",
        THINGSPEAK_HOST, CHANNEL.id
    );

    motion_logic(monitor).await
}
