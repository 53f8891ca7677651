// ThingSpeak HTTP Client - Sendet Telemetrie über embassy-net TCP
use defmt::{Debug2Format, debug, warn};
use embassy_net::{IpAddress, Stack, dns::DnsQueryType, tcp::TcpSocket};
use embassy_time::{Duration, with_timeout};
use heapless::String;

use motion_core::telemetry::status;
use motion_core::wire::{UPDATE_PATH, encode_update_body, interpret_response, write_request_head};
use motion_core::{Channel, TelemetryClient, TelemetryRecord, WireError};

use crate::config::*;

/// ThingSpeak Client
///
/// Jeder Upload ist eine eigene HTTP/1.0 Verbindung:
/// 1. DNS-Auflösung des Hostnames
/// 2. TCP-Verbindung aufbauen
/// 3. `POST /update.json` mit JSON-Body senden
/// 4. Antwort bis Verbindungsende lesen und auswerten
///
/// Fehler werden auf die negativen Status-Codes aus
/// [`motion_core::telemetry::status`] abgebildet, der Aufrufer sieht nur
/// einen Integer-Status.
pub struct ThingSpeakClient {
    stack: Stack<'static>,
    host: &'static str,
    port: u16,
    rx_buffer: [u8; TCP_BUFFER_SIZE],
    tx_buffer: [u8; TCP_BUFFER_SIZE],
    response: [u8; HTTP_RESPONSE_BUFFER_SIZE],
}

impl ThingSpeakClient {
    /// Erstellt einen Client für `host:port` über den gegebenen Netzwerk-Stack
    ///
    /// Baut noch keine Verbindung auf.
    pub fn new(stack: Stack<'static>, host: &'static str, port: u16) -> Self {
        Self {
            stack,
            host,
            port,
            rx_buffer: [0; TCP_BUFFER_SIZE],
            tx_buffer: [0; TCP_BUFFER_SIZE],
            response: [0; HTTP_RESPONSE_BUFFER_SIZE],
        }
    }

    /// Führt einen kompletten Upload aus und liefert den Status-Code
    async fn upload(
        &mut self,
        channel: &Channel,
        record: &TelemetryRecord,
    ) -> Result<i32, ThingSpeakError> {
        // Request vor dem Verbindungsaufbau kodieren
        let mut body = [0u8; HTTP_BODY_BUFFER_SIZE];
        let body_len =
            encode_update_body(channel, record, &mut body).map_err(ThingSpeakError::Encoding)?;
        let mut head: String<HTTP_HEAD_BUFFER_SIZE> = String::new();
        write_request_head(&mut head, self.host, UPDATE_PATH, body_len)
            .map_err(ThingSpeakError::Encoding)?;

        // DNS Lookup
        let server_ip = resolve_hostname(self.stack, self.host).await?;
        debug!(
            "ThingSpeak: '{}' resolved to {}",
            self.host,
            Debug2Format(&server_ip)
        );

        // TCP Connect
        let mut socket = TcpSocket::new(self.stack, &mut self.rx_buffer, &mut self.tx_buffer);
        socket.set_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)));
        socket
            .connect((server_ip, self.port))
            .await
            .map_err(|_| ThingSpeakError::ConnectionFailed)?;

        // Request senden
        write_all(&mut socket, head.as_bytes()).await?;
        write_all(&mut socket, &body[..body_len]).await?;
        socket
            .flush()
            .await
            .map_err(|_| ThingSpeakError::WriteFailed)?;

        // Antwort lesen (Server schließt die Verbindung wegen HTTP/1.0)
        let len = with_timeout(
            Duration::from_secs(HTTP_TIMEOUT_SECS),
            read_response(&mut socket, &mut self.response),
        )
        .await
        .map_err(|_| ThingSpeakError::Timeout)??;
        socket.close();

        Ok(interpret_response(&self.response[..len]))
    }
}

impl TelemetryClient for ThingSpeakClient {
    async fn write_fields(&mut self, channel: &Channel, record: &TelemetryRecord) -> i32 {
        match self.upload(channel, record).await {
            Ok(code) => code,
            Err(e) => {
                warn!("ThingSpeak: Upload failed: {}", e);
                e.status_code()
            }
        }
    }
}

/// Schreibt den kompletten Buffer auf den Socket
async fn write_all(socket: &mut TcpSocket<'_>, mut data: &[u8]) -> Result<(), ThingSpeakError> {
    while !data.is_empty() {
        match socket.write(data).await {
            Ok(0) | Err(_) => return Err(ThingSpeakError::WriteFailed),
            Ok(n) => data = &data[n..],
        }
    }
    Ok(())
}

/// Liest bis der Server die Verbindung schließt oder der Buffer voll ist
///
/// Ein voller Buffer ist kein Fehler: die Status-Zeile steht am Anfang.
async fn read_response(socket: &mut TcpSocket<'_>, buf: &mut [u8]) -> Result<usize, ThingSpeakError> {
    let mut len = 0;
    while len < buf.len() {
        match socket.read(&mut buf[len..]).await {
            Ok(0) => break,
            Ok(n) => len += n,
            // Reset nach erhaltenen Daten: Antwort ist vollständig genug
            Err(_) if len > 0 => break,
            Err(_) => return Err(ThingSpeakError::ReadFailed),
        }
    }
    Ok(len)
}

/// Löst Hostname zu IPv4-Adresse auf
///
/// Nutzt embassy-net DNS-Stack mit konfigurierbarem Timeout.
async fn resolve_hostname(
    stack: Stack<'static>,
    hostname: &str,
) -> Result<embassy_net::Ipv4Address, ThingSpeakError> {
    let result = with_timeout(
        Duration::from_secs(DNS_TIMEOUT_SECS),
        stack.dns_query(hostname, DnsQueryType::A),
    )
    .await;

    match result {
        Ok(Ok(addrs)) => addrs
            .iter()
            .find_map(|addr| match addr {
                IpAddress::Ipv4(ipv4) => Some(*ipv4),
                #[allow(unreachable_patterns)]
                _ => None,
            })
            .ok_or(ThingSpeakError::DnsResolutionFailed),
        Ok(Err(_)) => Err(ThingSpeakError::DnsResolutionFailed),
        Err(_) => Err(ThingSpeakError::DnsTimeout),
    }
}

/// ThingSpeak Fehler-Typen
///
/// Alle Fehler die während eines Uploads lokal auftreten können.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
enum ThingSpeakError {
    Encoding(WireError),
    DnsResolutionFailed,
    DnsTimeout,
    ConnectionFailed,
    WriteFailed,
    ReadFailed,
    Timeout,
}

impl ThingSpeakError {
    /// Status-Code der an den Aufrufer geht
    fn status_code(self) -> i32 {
        match self {
            ThingSpeakError::DnsResolutionFailed
            | ThingSpeakError::DnsTimeout
            | ThingSpeakError::ConnectionFailed => status::ERR_CONNECT_FAILED,
            ThingSpeakError::Encoding(_)
            | ThingSpeakError::WriteFailed
            | ThingSpeakError::ReadFailed => status::ERR_UNEXPECTED_FAIL,
            ThingSpeakError::Timeout => status::ERR_TIMEOUT,
        }
    }
}
