use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder rendered for a field that was absent or malformed in the store.
pub const NOT_AVAILABLE: &str = "N/A";

/// One normalized sensor reading, ready to render.
///
/// Every field is always populated: absence or a wrong-shaped value in the
/// source node becomes the [`NOT_AVAILABLE`] sentinel, never a missing field.
/// Readings are rebuilt from scratch on every fetch and replaced wholesale;
/// they carry no identity beyond their position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in °C, rendered as text (the store holds integers).
    pub temperature: String,
    /// Relative humidity in %, rendered as text.
    pub humidity: String,
    /// Date the reading was taken, as recorded by the sensor.
    pub date: String,
    /// Time of day the reading was taken.
    pub time: String,
}

impl Reading {
    pub fn new(
        temperature: impl Into<String>,
        humidity: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            humidity: humidity.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    /// A reading with every field set to the sentinel.
    pub fn unavailable() -> Self {
        Self::new(NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE)
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data: {}", self.date)?;
        writeln!(f, "Hora: {}", self.time)?;
        writeln!(f, "Temperatura: {}°C", self.temperature)?;
        writeln!(f, "Umidade: {}%", self.humidity)?;
        Ok(())
    }
}

/// Ordered list of readings as returned by one fetch. Insertion order is the
/// store's child iteration order at fetch time. The consumer owns it and
/// replaces it atomically on each delivered result.
pub type ReadingList = Vec<Reading>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_new() {
        let reading = Reading::new("23", "60", "2024-01-01", "10:00");

        assert_eq!(reading.temperature, "23");
        assert_eq!(reading.humidity, "60");
        assert_eq!(reading.date, "2024-01-01");
        assert_eq!(reading.time, "10:00");
    }

    #[test]
    fn test_reading_unavailable() {
        let reading = Reading::unavailable();

        assert_eq!(reading.temperature, NOT_AVAILABLE);
        assert_eq!(reading.humidity, NOT_AVAILABLE);
        assert_eq!(reading.date, NOT_AVAILABLE);
        assert_eq!(reading.time, NOT_AVAILABLE);
    }

    #[test]
    fn test_reading_display() {
        let reading = Reading::new("23", "60", "2024-01-01", "10:00");
        let output = format!("{}", reading);

        assert!(output.contains("Data: 2024-01-01"));
        assert!(output.contains("Hora: 10:00"));
        assert!(output.contains("Temperatura: 23°C"));
        assert!(output.contains("Umidade: 60%"));
    }
}
