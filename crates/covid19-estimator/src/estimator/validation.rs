use serde_json::{Map, Value};

/// Keys every estimator payload must carry.
pub const REQUIRED_KEYS: [&str; 6] = [
    "periodType",
    "timeToElapse",
    "region",
    "reportedCases",
    "population",
    "totalHospitalBeds",
];

/// Validation errors raised by the payload guard, carrying the form
/// messages the API has always returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please provide a JSON object for the form")]
    NotAnObject,
    #[error("Please provide all values for the form")]
    EmptyValues,
    #[error("Please provide all keys for the form")]
    BlankKeys,
    #[error("Please provide all valid keys for the form")]
    MissingKeys,
    #[error("The form strings values can't be spaces")]
    SpaceCharacters,
}

/// Guard applying the form checks in their contract order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadValidator;

impl PayloadValidator {
    /// True when every top-level value is non-empty.
    pub fn check_empty_values(fields: &Map<String, Value>) -> bool {
        fields.values().all(|value| !is_empty_value(value))
    }

    /// True when every key name is non-blank. Presence against the required
    /// set is `check_valid_keys`.
    pub fn check_keys(fields: &Map<String, Value>) -> bool {
        fields.keys().all(|key| !key.is_empty())
    }

    /// True when all of `required` appear in the payload's key set.
    pub fn check_valid_keys(required: &[&str], fields: &Map<String, Value>) -> bool {
        required.iter().all(|key| fields.contains_key(*key))
    }

    /// True (a failure) when any candidate consists entirely of whitespace.
    pub fn check_absolute_space_characters(values: &[&str]) -> bool {
        values
            .iter()
            .any(|value| !value.is_empty() && value.chars().all(char::is_whitespace))
    }

    /// Runs the checks in priority order: empty values, blank key names,
    /// required keys, whitespace-only watched strings.
    pub fn validate(payload: &Value) -> Result<(), ValidationError> {
        let fields = payload.as_object().ok_or(ValidationError::NotAnObject)?;

        if !Self::check_empty_values(fields) {
            return Err(ValidationError::EmptyValues);
        }
        if !Self::check_keys(fields) {
            return Err(ValidationError::BlankKeys);
        }
        if !Self::check_valid_keys(&REQUIRED_KEYS, fields) {
            return Err(ValidationError::MissingKeys);
        }
        if Self::check_absolute_space_characters(&watched_strings(fields)) {
            return Err(ValidationError::SpaceCharacters);
        }

        Ok(())
    }
}

/// Falsy in the historical sense: null, false, zero, or an empty
/// string/array/object.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}

/// The string fields the whitespace check watches: `region.name` and
/// `periodType`, when present as strings.
fn watched_strings(fields: &Map<String, Value>) -> Vec<&str> {
    let mut watched = Vec::new();

    if let Some(name) = fields
        .get("region")
        .and_then(|region| region.get("name"))
        .and_then(Value::as_str)
    {
        watched.push(name);
    }

    if let Some(period) = fields.get("periodType").and_then(Value::as_str) {
        watched.push(period);
    }

    watched
}
