//! Telemetrie-Record und Status-Codes
//!
//! Bildet das Feld-Modell eines ThingSpeak Channels ab (Felder 1..=8)
//! und die Status-Codes die ein Upload liefern kann.

/// Status-Codes eines Uploads
///
/// Positive Werte sind HTTP-Status-Codes vom Server, negative Werte sind
/// lokale Fehler (Verbindung, Timeout, ungültige Antwort).
pub mod status {
    /// Daten wurden angenommen
    pub const OK: i32 = 200;
    /// DNS oder TCP Verbindung fehlgeschlagen
    pub const ERR_CONNECT_FAILED: i32 = -301;
    /// Fehler beim Senden des Requests
    pub const ERR_UNEXPECTED_FAIL: i32 = -302;
    /// Antwort ohne gültige Status-Zeile
    pub const ERR_BAD_RESPONSE: i32 = -303;
    /// Server hat nicht rechtzeitig geantwortet
    pub const ERR_TIMEOUT: i32 = -304;
    /// Server hat 200 geantwortet, aber keinen Eintrag angelegt (z.B. Rate-Limit)
    pub const ERR_NOT_INSERTED: i32 = -401;
}

/// Anzahl der Felder eines Channels
pub const FIELD_COUNT: usize = 8;

/// Fehler beim Befüllen eines Records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordError {
    /// Feld-Index nicht in 1..=8
    InvalidField,
}

/// Ein Telemetrie-Datensatz mit bis zu 8 numerischen Feldern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TelemetryRecord {
    fields: [Option<i32>; FIELD_COUNT],
}

impl TelemetryRecord {
    pub const fn new() -> Self {
        Self {
            fields: [None; FIELD_COUNT],
        }
    }

    /// Record für ein "Motion detected" Event: Feld 1 = 1
    pub const fn motion_detected() -> Self {
        let mut record = Self::new();
        record.fields[0] = Some(1);
        record
    }

    /// Setzt Feld `index` (1-basiert) auf `value`
    pub fn set_field(&mut self, index: u8, value: i32) -> Result<(), RecordError> {
        let slot = Self::slot(index)?;
        self.fields[slot] = Some(value);
        Ok(())
    }

    /// Liest Feld `index` (1-basiert)
    pub fn field(&self, index: u8) -> Result<Option<i32>, RecordError> {
        Ok(self.fields[Self::slot(index)?])
    }

    /// Alle Felder in Index-Reihenfolge (Slot 0 = Feld 1)
    pub const fn fields(&self) -> &[Option<i32>; FIELD_COUNT] {
        &self.fields
    }

    pub fn clear(&mut self) {
        self.fields = [None; FIELD_COUNT];
    }

    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(Option::is_none)
    }

    /// Iteriert über alle gesetzten Felder als `(index, value)`
    pub fn iter(&self) -> impl Iterator<Item = (u8, i32)> + '_ {
        self.fields
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i as u8 + 1, v)))
    }

    fn slot(index: u8) -> Result<usize, RecordError> {
        match index {
            1..=8 => Ok(index as usize - 1),
            _ => Err(RecordError::InvalidField),
        }
    }
}

/// Ergebnis eines Uploads
///
/// Fehlerkategorien (Netzwerk, Auth, Server) werden nicht unterschieden,
/// der Code selbst trägt die Information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Accepted,
    Failed(i32),
}

impl SendOutcome {
    pub const fn from_status(code: i32) -> Self {
        if code == status::OK {
            SendOutcome::Accepted
        } else {
            SendOutcome::Failed(code)
        }
    }

    pub const fn is_accepted(self) -> bool {
        matches!(self, SendOutcome::Accepted)
    }

    pub const fn status_code(self) -> i32 {
        match self {
            SendOutcome::Accepted => status::OK,
            SendOutcome::Failed(code) => code,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SendOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SendOutcome::Accepted => defmt::write!(fmt, "Accepted"),
            SendOutcome::Failed(code) => defmt::write!(fmt, "Failed({})", code),
        }
    }
}
