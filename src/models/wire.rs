//! Serde helpers pinning the persisted wire formats.
//!
//! The persisted snapshot keeps the original application's conventions:
//! times as `"HH:MM"` wall-clock strings and weekdays as integers 0-6 with
//! 0 = Sunday (the JavaScript `Date.getDay()` numbering).

/// Serializes a [`chrono::NaiveTime`] as an `"HH:MM"` string.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub(crate) fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}

/// Serializes a [`chrono::Weekday`] as an integer 0-6 with 0 = Sunday.
pub(crate) mod weekday_sunday0 {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub(crate) fn serialize<S>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(weekday.num_days_from_sunday() as u8)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        weekday_from_sunday0(raw)
            .ok_or_else(|| D::Error::custom(format!("day of week out of range: {raw}")))
    }

    /// Maps 0-6 (0 = Sunday) onto a [`Weekday`]. Returns `None` for 7+.
    pub(crate) fn weekday_from_sunday0(day: u8) -> Option<Weekday> {
        match day {
            0 => Some(Weekday::Sun),
            1 => Some(Weekday::Mon),
            2 => Some(Weekday::Tue),
            3 => Some(Weekday::Wed),
            4 => Some(Weekday::Thu),
            5 => Some(Weekday::Fri),
            6 => Some(Weekday::Sat),
            _ => None,
        }
    }
}
