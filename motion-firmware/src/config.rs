// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
// Alles wird zur Build-Zeit festgelegt (build.rs + .env), es gibt keine Laufzeit-Konfiguration

use motion_core::{Channel, RetryPolicy};

// ============================================================================
// GPIO Konfiguration
// ============================================================================

/// GPIO-Pin für den IR-Bewegungssensor (digitaler Eingang)
/// GPIO12/13 sind beim ESP32-C6 von USB-JTAG belegt
pub const SENSOR_GPIO_PIN: u8 = 7;

/// GPIO-Pin für den Buzzer (digitaler Ausgang)
pub const BUZZER_GPIO_PIN: u8 = 5;

// ============================================================================
// Poll-Loop Konfiguration
// ============================================================================

/// Abtastperiode in Millisekunden
pub const POLL_PERIOD_MS: u32 = motion_core::POLL_PERIOD_MS;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus WIFI_SSID geladen, Default: offenes Wokwi-Gastnetz
pub const WIFI_SSID: &str = match option_env!("WIFI_SSID") {
    Some(ssid) => ssid,
    None => "Wokwi-GUEST",
};

/// WiFi Passwort
/// Leer = offenes Netz (AuthMethod::None)
pub const WIFI_PASSWORD: &str = match option_env!("WIFI_PASSWORD") {
    Some(password) => password,
    None => "",
};

/// Intervall zwischen zwei Prüfungen des Verbindungsstatus
pub const ASSOCIATION_CHECK_INTERVAL_MS: u32 = 1000;

/// Maximale Anzahl Prüfungen bevor der Start als fehlgeschlagen gilt
pub const ASSOCIATION_MAX_ATTEMPTS: u32 = 30;

/// Retry-Policy für den Verbindungsaufbau
pub const ASSOCIATION_POLICY: RetryPolicy =
    RetryPolicy::new(ASSOCIATION_CHECK_INTERVAL_MS, ASSOCIATION_MAX_ATTEMPTS);

/// Wartezeit nach fehlgeschlagenem WiFi-Connect in Sekunden
pub const WIFI_RECONNECT_DELAY_SECS: u64 = 5;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// ============================================================================
// ThingSpeak Konfiguration
// ============================================================================

/// ThingSpeak API Hostname
pub const THINGSPEAK_HOST: &str = match option_env!("THINGSPEAK_HOST") {
    Some(host) => host,
    None => "api.thingspeak.com",
};

/// HTTP Port (unverschlüsselt)
pub const THINGSPEAK_PORT: u16 = 80;

/// ThingSpeak Channel-ID
/// Wird zur Build-Zeit aus THINGSPEAK_CHANNEL_ID geladen (build.rs prüft das Format)
pub const THINGSPEAK_CHANNEL_ID: u32 = match option_env!("THINGSPEAK_CHANNEL_ID") {
    Some(id) => parse_u32(id),
    None => 3005560,
};

/// ThingSpeak Write API Key
pub const THINGSPEAK_WRITE_API_KEY: &str = env!(
    "THINGSPEAK_WRITE_API_KEY",
    "ThingSpeak Write API Key nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Channel-Identität für Uploads
pub const CHANNEL: Channel = Channel::new(THINGSPEAK_CHANNEL_ID, THINGSPEAK_WRITE_API_KEY);

/// DNS Query Timeout in Sekunden
pub const DNS_TIMEOUT_SECS: u64 = 10;

/// Timeout für TCP-Connect, Senden und Empfangen in Sekunden
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// TCP RX/TX Buffer-Größe in Bytes
pub const TCP_BUFFER_SIZE: usize = 1024;

/// Buffer für Request-Zeile und Header
pub const HTTP_HEAD_BUFFER_SIZE: usize = 256;

/// Buffer für den JSON-Body ({"api_key":"...","field1":1,...})
pub const HTTP_BODY_BUFFER_SIZE: usize = 192;

/// Buffer für die Antwort
/// Header werden ggf. abgeschnitten, die Status-Zeile reicht zur Auswertung
pub const HTTP_RESPONSE_BUFFER_SIZE: usize = 1024;

/// Parst eine Dezimalzahl zur Compile-Zeit
const fn parse_u32(digits: &str) -> u32 {
    let bytes = digits.as_bytes();
    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(digit.is_ascii_digit(), "THINGSPEAK_CHANNEL_ID ist keine Zahl");
        value = value * 10 + (digit - b'0') as u32;
        i += 1;
    }
    value
}
