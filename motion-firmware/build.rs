// Build-Script: Wird vor dem Kompilieren ausgeführt
// Backt Netzwerk- und ThingSpeak-Konfiguration ein und konfiguriert den Linker

/// Variablen die aus .env bzw. der Umgebung an den Compiler durchgereicht werden
const BAKED_ENV_VARS: &[&str] = &[
    "WIFI_SSID",
    "WIFI_PASSWORD",
    "THINGSPEAK_HOST",
    "THINGSPEAK_CHANNEL_ID",
    "THINGSPEAK_WRITE_API_KEY",
];

fn main() {
    // Lade .env file für Credentials
    // Fehlt sie, gelten die Defaults aus config.rs (Wokwi-GUEST, offenes WLAN)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  .env file nicht gefunden: {}", e);
        eprintln!("   Nutze Environment-Variablen bzw. Defaults aus config.rs");
    }

    for name in BAKED_ENV_VARS {
        println!("cargo:rerun-if-env-changed={}", name);
        if let Ok(value) = std::env::var(name) {
            println!("cargo:rustc-env={}={}", name, value);
        }
    }

    // Channel-ID schon zur Build-Zeit prüfen statt erst im const-Parser
    if let Ok(id) = std::env::var("THINGSPEAK_CHANNEL_ID") {
        if id.parse::<u32>().is_err() {
            panic!("THINGSPEAK_CHANNEL_ID muss eine Zahl sein, ist aber '{}'", id);
        }
    }

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // 1. defmt.x - defmt Logging-Support
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        let kind = &args[1];
        let what = &args[2];

        if kind != "undefined-symbol" {
            std::process::exit(1);
        }

        let hint = match what.as_str() {
            what if what.starts_with("_defmt_") => {
                Some("`defmt` not found - make sure `defmt.x` is added as a linker script")
            }
            "_stack_start" => Some("Is the linker script `linkall.x` missing?"),
            what if what.starts_with("esp_rtos_") => Some(
                "`esp-radio` has no scheduler enabled. Make sure you have initialized `esp-rtos`.",
            ),
            "free" | "malloc" | "calloc" => {
                Some("Did you forget the `esp-alloc` dependency?")
            }
            _ => None,
        };

        if let Some(hint) = hint {
            eprintln!();
            eprintln!("💡 {}", hint);
            eprintln!();
        }
        std::process::exit(0);
    }

    if let Ok(exe) = std::env::current_exe() {
        println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        );
    }
}
