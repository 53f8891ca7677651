//! ThingSpeak Wire-Format
//!
//! Baut den HTTP-Request für `POST /update.json` und wertet die Antwort aus.
//! Kein Socket-Zugriff: der Transport liegt in der Firmware.
//!
//! Der Request nutzt HTTP/1.0 mit `Connection: close`, damit der Server
//! nicht mit Chunked Transfer Encoding antwortet und das Ende der Antwort
//! am Verbindungsabbau erkennbar ist.

use core::fmt::Write;

use heapless::String;
use serde::Serialize;

use crate::telemetry::{TelemetryRecord, status};
use crate::types::Channel;

/// Pfad des Update-Endpoints
pub const UPDATE_PATH: &str = "/update.json";

/// Fehler beim Kodieren eines Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WireError {
    /// Ausgabe-Buffer zu klein
    BufferTooSmall,
    /// Record enthält kein gesetztes Feld
    EmptyRecord,
}

/// JSON-Body für `/update.json`
///
/// Nicht gesetzte Felder werden weggelassen.
#[derive(Serialize)]
struct UpdateBody<'a> {
    api_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field1: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field2: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field3: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field4: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field5: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field6: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field7: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field8: Option<i32>,
}

impl<'a> UpdateBody<'a> {
    fn new(channel: &'a Channel, record: &TelemetryRecord) -> Self {
        let [field1, field2, field3, field4, field5, field6, field7, field8] = *record.fields();
        Self {
            api_key: channel.write_api_key,
            field1,
            field2,
            field3,
            field4,
            field5,
            field6,
            field7,
            field8,
        }
    }
}

/// Serialisiert den Update-Body als JSON in `buf`
///
/// # Rückgabe
/// Anzahl der geschriebenen Bytes
///
/// # Beispiele
///
/// ```
/// # use motion_core::{Channel, TelemetryRecord};
/// # use motion_core::wire::encode_update_body;
/// let channel = Channel::new(3005560, "KEY");
/// let mut buf = [0u8; 64];
/// let len = encode_update_body(&channel, &TelemetryRecord::motion_detected(), &mut buf).unwrap();
/// assert_eq!(&buf[..len], br#"{"api_key":"KEY","field1":1}"#);
/// ```
pub fn encode_update_body(
    channel: &Channel,
    record: &TelemetryRecord,
    buf: &mut [u8],
) -> Result<usize, WireError> {
    if record.is_empty() {
        return Err(WireError::EmptyRecord);
    }
    serde_json_core::to_slice(&UpdateBody::new(channel, record), buf)
        .map_err(|_| WireError::BufferTooSmall)
}

/// Schreibt Request-Zeile und Header eines JSON-POST nach `buf`
pub fn write_request_head<const N: usize>(
    buf: &mut String<N>,
    host: &str,
    path: &str,
    content_length: usize,
) -> Result<(), WireError> {
    buf.clear();
    write!(
        buf,
        "POST {path} HTTP/1.0\r\n\
         Host: {host}\r\n\
         User-Agent: ir-motion-alarm\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {content_length}\r\n\
         Connection: close\r\n\
         \r\n"
    )
    .map_err(|_| WireError::BufferTooSmall)
}

/// Liest den Status-Code aus der Status-Zeile (`HTTP/1.1 200 OK`)
pub fn parse_status_code(response: &[u8]) -> Option<u16> {
    let line_end = find(response, b"\r\n").unwrap_or(response.len());
    let line = &response[..line_end];
    if !line.starts_with(b"HTTP/") {
        return None;
    }

    let mut parts = line.split(|&b| b == b' ');
    parts.next()?;
    let code = parts.next()?;
    if code.len() != 3 {
        return None;
    }

    code.iter().try_fold(0u16, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u16::from(b - b'0'))
    })
}

/// Wertet eine (evtl. abgeschnittene) HTTP-Antwort aus
///
/// - Keine Status-Zeile → [`status::ERR_BAD_RESPONSE`]
/// - Status != 200 → der Status selbst
/// - 200 mit Body `0` oder `-1` → [`status::ERR_NOT_INSERTED`]
/// - sonst → [`status::OK`]
pub fn interpret_response(response: &[u8]) -> i32 {
    let Some(code) = parse_status_code(response) else {
        return status::ERR_BAD_RESPONSE;
    };
    if i32::from(code) != status::OK {
        return i32::from(code);
    }

    let body = find(response, b"\r\n\r\n")
        .map(|i| &response[i + 4..])
        .unwrap_or(&[])
        .trim_ascii();

    match body {
        b"0" | b"-1" => status::ERR_NOT_INSERTED,
        _ => status::OK,
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHANNEL: Channel = Channel::new(3005560, "ALW22BSTI0HSVEIO");

    #[test]
    fn test_encode_motion_body() {
        let mut buf = [0u8; 128];
        let len = encode_update_body(&CHANNEL, &TelemetryRecord::motion_detected(), &mut buf)
            .unwrap();
        assert_eq!(&buf[..len], br#"{"api_key":"ALW22BSTI0HSVEIO","field1":1}"#);
    }

    #[test]
    fn test_encode_skips_unset_fields() {
        let mut record = TelemetryRecord::new();
        record.set_field(3, 7).unwrap();
        record.set_field(8, -2).unwrap();

        let mut buf = [0u8; 128];
        let len = encode_update_body(&CHANNEL, &record, &mut buf).unwrap();
        assert_eq!(
            &buf[..len],
            br#"{"api_key":"ALW22BSTI0HSVEIO","field3":7,"field8":-2}"#
        );
    }

    #[test]
    fn test_trigger_set_and_reset_share_body_shape() {
        // Gerät setzt field1 = 1, der Empfänger setzt mit demselben Body-Format auf 0 zurück
        let mut reset = TelemetryRecord::new();
        reset.set_field(1, 0).unwrap();

        let mut buf = [0u8; 128];
        let len = encode_update_body(&CHANNEL, &reset, &mut buf).unwrap();
        assert_eq!(&buf[..len], br#"{"api_key":"ALW22BSTI0HSVEIO","field1":0}"#);

        let len = encode_update_body(&CHANNEL, &TelemetryRecord::motion_detected(), &mut buf)
            .unwrap();
        assert_eq!(&buf[..len], br#"{"api_key":"ALW22BSTI0HSVEIO","field1":1}"#);
    }

    #[test]
    fn test_encode_rejects_empty_record() {
        let mut buf = [0u8; 128];
        assert_eq!(
            encode_update_body(&CHANNEL, &TelemetryRecord::new(), &mut buf),
            Err(WireError::EmptyRecord)
        );
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let mut buf = [0u8; 8];
        assert_eq!(
            encode_update_body(&CHANNEL, &TelemetryRecord::motion_detected(), &mut buf),
            Err(WireError::BufferTooSmall)
        );
    }

    #[test]
    fn test_request_head() {
        let mut head: String<256> = String::new();
        write_request_head(&mut head, "api.thingspeak.com", UPDATE_PATH, 42).unwrap();
        assert!(head.starts_with("POST /update.json HTTP/1.0\r\n"));
        assert!(head.contains("Host: api.thingspeak.com\r\n"));
        assert!(head.contains("Content-Length: 42\r\n"));
        assert!(head.ends_with("Connection: close\r\n\r\n"));
    }

    #[test]
    fn test_request_head_too_small() {
        let mut head: String<16> = String::new();
        assert_eq!(
            write_request_head(&mut head, "api.thingspeak.com", UPDATE_PATH, 42),
            Err(WireError::BufferTooSmall)
        );
    }

    #[test]
    fn test_parse_status_code() {
        assert_eq!(parse_status_code(b"HTTP/1.1 200 OK\r\n"), Some(200));
        assert_eq!(parse_status_code(b"HTTP/1.0 500 Internal"), Some(500));
        assert_eq!(parse_status_code(b"garbage"), None);
        assert_eq!(parse_status_code(b"HTTP/1.1 2x0 OK\r\n"), None);
        assert_eq!(parse_status_code(b""), None);
    }

    #[test]
    fn test_interpret_response() {
        assert_eq!(
            interpret_response(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\r\n{\"entry_id\":12}"),
            status::OK
        );
        assert_eq!(
            interpret_response(b"HTTP/1.1 200 OK\r\n\r\n0"),
            status::ERR_NOT_INSERTED
        );
        assert_eq!(
            interpret_response(b"HTTP/1.1 200 OK\r\n\r\n-1\r\n"),
            status::ERR_NOT_INSERTED
        );
        assert_eq!(interpret_response(b"HTTP/1.1 400 Bad Request\r\n\r\n"), 400);
        assert_eq!(interpret_response(b""), status::ERR_BAD_RESPONSE);
    }

    #[test]
    fn test_interpret_truncated_headers() {
        // Buffer voll bevor der Body kam: Status-Zeile reicht
        assert_eq!(
            interpret_response(b"HTTP/1.1 200 OK\r\nServer: nginx\r\nX-Frame"),
            status::OK
        );
    }
}
