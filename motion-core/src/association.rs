//! Begrenztes Warten auf die WLAN-Assoziation
//!
//! Prüft den Link-Status in festem Intervall, bis das Gerät verbunden ist
//! oder die maximale Anzahl Versuche erreicht ist.

use embedded_hal_async::delay::DelayNs;

use crate::traits::NetworkLink;

/// Retry-Policy für den Verbindungsaufbau
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RetryPolicy {
    /// Wartezeit zwischen zwei Prüfungen in Millisekunden
    pub interval_ms: u32,
    /// Maximale Anzahl Prüfungen (0 wird als 1 behandelt)
    pub max_attempts: u32,
}

impl RetryPolicy {
    pub const fn new(interval_ms: u32, max_attempts: u32) -> Self {
        Self {
            interval_ms,
            max_attempts,
        }
    }
}

impl Default for RetryPolicy {
    /// 1 Sekunde Intervall, 30 Versuche
    fn default() -> Self {
        Self::new(1000, 30)
    }
}

/// Fehler beim Verbindungsaufbau
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssociationError {
    /// Nach `attempts` Prüfungen noch immer nicht verbunden
    Timeout { attempts: u32 },
}

/// Wartet bis `link` assoziiert ist
///
/// Prüft zuerst und wartet erst danach, ein bereits verbundener Link kostet
/// also keine Verzögerung. Nach der letzten fehlgeschlagenen Prüfung wird
/// nicht mehr gewartet.
///
/// # Rückgabe
/// Anzahl der Prüfungen bis zur erfolgreichen Verbindung
pub async fn wait_for_association<L, D>(
    link: &mut L,
    delay: &mut D,
    policy: RetryPolicy,
) -> Result<u32, AssociationError>
where
    L: NetworkLink,
    D: DelayNs,
{
    let max_attempts = policy.max_attempts.max(1);

    for attempt in 1..=max_attempts {
        if link.is_associated() {
            return Ok(attempt);
        }
        if attempt < max_attempts {
            delay.delay_ms(policy.interval_ms).await;
        }
    }

    Err(AssociationError::Timeout {
        attempts: max_attempts,
    })
}
