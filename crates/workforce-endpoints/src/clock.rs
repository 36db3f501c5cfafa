//! `HH:MM` wall-clock times.
//!
//! Times go out as `HH:MM`; `HH:MM:SS` is accepted on the way in.

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serializer};

const OUT_FORMAT: &str = "%H:%M";
const IN_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Parse a wall-clock time in either accepted format.
pub fn parse(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    IN_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}

pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(OUT_FORMAT))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid time '{}', expected HH:MM", raw)))
}
