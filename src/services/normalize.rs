use chrono::{DateTime, NaiveDateTime};
use serde_json::{Map, Value};

use crate::models::{NormalizedBooking, ParamValue};

const NAME_KEYS: &[&str] = &["name"];
const EMAIL_KEYS: &[&str] = &["email", "value"];
const PHONE_KEYS: &[&str] = &["phone_number", "value"];
const TIME_KEYS: &[&str] = &["date_time", "startDateTime", "value"];

const SHORT_TIME: &str = "%I:%M %p";
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%dT%H:%M:%S%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
];
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

pub fn normalize_booking(params: &Map<String, Value>) -> NormalizedBooking {
    let field = |key: &str| ParamValue::from_json(params.get(key));

    NormalizedBooking {
        patient_name: resolve(&field("name"), NAME_KEYS),
        email: resolve(&field("email"), EMAIL_KEYS),
        phone_number: resolve(&field("phone_number"), PHONE_KEYS),
        appointment_time: format_time(&resolve(&field("time"), TIME_KEYS)),
    }
}

/// Resolves a raw parameter to a string. Keyed values try `keys` in order,
/// sequences use their first element as-is, and a keyed value with none of
/// `keys` (or an empty sequence) falls back to a JSON dump of the container.
pub fn resolve(value: &ParamValue, keys: &[&str]) -> String {
    match value {
        ParamValue::Missing => String::new(),
        ParamValue::Scalar(s) => s.clone(),
        ParamValue::Keyed(map) => keys
            .iter()
            .map(|key| resolve(&ParamValue::from_json(map.get(*key)), keys))
            .find(|s| !s.is_empty())
            .unwrap_or_else(|| value.dump()),
        ParamValue::Sequence(items) => items
            .first()
            .map(|first| resolve(&ParamValue::from_json(Some(first)), keys))
            .unwrap_or_else(|| value.dump()),
    }
}

/// Renders ISO-8601 timestamps as a short time of day in the timestamp's own
/// offset. Anything that does not parse is returned untouched.
pub fn format_time(raw: &str) -> String {
    if !raw.contains('T') {
        return raw.to_string();
    }

    let trimmed = raw.trim();
    let with_offset = DateTime::parse_from_rfc3339(trimmed).ok().or_else(|| {
        OFFSET_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(trimmed, fmt).ok())
    });
    if let Some(dt) = with_offset {
        return dt.format(SHORT_TIME).to_string();
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.format(SHORT_TIME).to_string())
        .unwrap_or_else(|| raw.to_string())
}
