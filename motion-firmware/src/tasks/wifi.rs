// WiFi Tasks - Station-Verbindung und Paket-Runner für embassy-net
use defmt::{Debug2Format, info, warn};
use embassy_net::Runner;
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{
    AuthMethod, ClientConfig, ModeConfig, WifiController, WifiDevice, WifiError, WifiEvent,
};

use crate::config::{WIFI_PASSWORD, WIFI_RECONNECT_DELAY_SECS, WIFI_SSID};

/// Client-Konfiguration für das konfigurierte Netz
///
/// Leeres Passwort = offenes Netz (z.B. Wokwi-GUEST).
fn client_config() -> ModeConfig {
    let config = ClientConfig::default().with_ssid(WIFI_SSID.into());
    let config = if WIFI_PASSWORD.is_empty() {
        config.with_auth_method(AuthMethod::None)
    } else {
        config.with_password(WIFI_PASSWORD.into())
    };
    ModeConfig::Client(config)
}

/// Konfiguriert und startet das Radio, falls es noch nicht läuft
async fn ensure_started(controller: &mut WifiController<'static>) -> Result<(), WifiError> {
    if matches!(controller.is_started(), Ok(true)) {
        return Ok(());
    }
    controller.set_config(&client_config())?;
    controller.start_async().await?;
    info!("WiFi: Radio up (station mode)");
    Ok(())
}

/// WiFi Connection Task
///
/// Hält die Station am konfigurierten Netz: verbinden, auf Trennung warten,
/// nach `WIFI_RECONNECT_DELAY_SECS` erneut verbinden. Ob die Verbindung
/// nutzbar ist (Link + DHCP), entscheidet der Motion Task über `StackLink`.
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    let open = WIFI_PASSWORD.is_empty();
    info!("WiFi: Joining '{}' (open network: {})", WIFI_SSID, open);

    loop {
        let joined = match ensure_started(&mut controller).await {
            Ok(()) => controller.connect_async().await,
            Err(e) => Err(e),
        };

        match joined {
            Ok(()) => {
                info!("WiFi: Associated with '{}'", WIFI_SSID);
                controller.wait_for_event(WifiEvent::StaDisconnected).await;
                warn!("WiFi: Lost '{}'", WIFI_SSID);
            }
            Err(e) => warn!("WiFi: Join failed: {}", Debug2Format(&e)),
        }

        Timer::after(Duration::from_secs(WIFI_RECONNECT_DELAY_SECS)).await;
    }
}

/// Network Task
///
/// Prozessiert Netzwerk-Pakete für den TCP/IP Stack (DHCP, DNS, TCP).
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}
