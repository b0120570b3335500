//! Frontend Models
//!
//! Data structures matching the habit API entities.

use serde::{Deserialize, Serialize};

/// How often a habit recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Weekly" => Frequency::Weekly,
            "Monthly" => Frequency::Monthly,
            _ => Frequency::Daily,
        }
    }
}

/// Habit data structure (matches backend)
///
/// The server owns every field; mutating calls return the authoritative
/// copy and the client overwrites its local one with it. Extra server
/// fields (`user`, `created_at`) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub frequency: Frequency,
    /// Time-of-day string ("HH:MM" or "HH:MM:SS"), None = no reminder
    #[serde(default)]
    pub reminder_time: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

/// Request body for create and full-record update calls
///
/// Optional fields serialize as absent, never as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: Frequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
}

impl HabitPayload {
    /// Build a payload from raw form values, mapping empty strings to None
    pub fn from_form(
        name: &str,
        description: &str,
        frequency: Frequency,
        reminder_time: &str,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: non_empty(description),
            frequency,
            reminder_time: non_empty(reminder_time),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_wire_round_trip() {
        for freq in [Frequency::Daily, Frequency::Weekly, Frequency::Monthly] {
            let json = serde_json::to_string(&freq).unwrap();
            assert_eq!(json, format!("\"{}\"", freq.as_str()));
            let back: Frequency = serde_json::from_str(&json).unwrap();
            assert_eq!(back, freq);
            assert_eq!(Frequency::from_str(freq.as_str()), freq);
        }
        // Unknown input falls back to the default
        assert_eq!(Frequency::from_str("Hourly"), Frequency::Daily);
    }

    #[test]
    fn test_payload_skips_absent_fields() {
        let payload = HabitPayload::from_form("Drink water", "", Frequency::Daily, "");
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("reminder_time"));
        assert!(!json.contains("description"));
        assert_eq!(json, r#"{"name":"Drink water","frequency":"Daily"}"#);
    }

    #[test]
    fn test_payload_keeps_present_fields() {
        let payload =
            HabitPayload::from_form("Run", "5k around the park", Frequency::Weekly, "07:00");
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""description":"5k around the park""#));
        assert!(json.contains(r#""reminder_time":"07:00""#));
        assert!(json.contains(r#""frequency":"Weekly""#));
    }

    #[test]
    fn test_habit_deserializes_server_shape() {
        // Server includes fields the client does not track
        let json = r#"{
            "id": 3,
            "user": 1,
            "name": "Morning exercise",
            "description": null,
            "created_at": "2024-05-01T09:00:00Z",
            "frequency": "Daily",
            "reminder_time": "07:00:00",
            "is_completed": true
        }"#;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.id, 3);
        assert_eq!(habit.name, "Morning exercise");
        assert_eq!(habit.description, None);
        assert_eq!(habit.frequency, Frequency::Daily);
        assert_eq!(habit.reminder_time.as_deref(), Some("07:00:00"));
        assert!(habit.is_completed);
    }

    #[test]
    fn test_habit_completion_defaults_to_false() {
        let json = r#"{"id": 1, "name": "Read", "frequency": "Monthly"}"#;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert!(!habit.is_completed);
        assert_eq!(habit.reminder_time, None);
    }
}
