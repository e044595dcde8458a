use serde_json::{json, Map, Value};

use super::common::sample_payload;
use crate::estimator::validation::{PayloadValidator, ValidationError, REQUIRED_KEYS};

fn fields_of(payload: &Value) -> &Map<String, Value> {
    payload.as_object().expect("payload is an object")
}

#[test]
fn complete_payload_passes_every_check() {
    let payload = sample_payload();
    assert_eq!(PayloadValidator::validate(&payload), Ok(()));
}

#[test]
fn empty_values_are_rejected_in_every_falsy_shape() {
    for empty in [
        json!(null),
        json!(false),
        json!(0),
        json!(0.0),
        json!(""),
        json!([]),
        json!({}),
    ] {
        let mut payload = sample_payload();
        payload["reportedCases"] = empty;
        assert_eq!(
            PayloadValidator::validate(&payload),
            Err(ValidationError::EmptyValues)
        );
    }
}

#[test]
fn negative_numbers_count_as_values() {
    let payload = json!({ "timeToElapse": -7 });
    assert!(PayloadValidator::check_empty_values(fields_of(&payload)));
}

#[test]
fn blank_key_names_fail_the_key_check() {
    let payload = json!({ "": 1, "periodType": "days" });
    assert!(!PayloadValidator::check_keys(fields_of(&payload)));

    let payload = sample_payload();
    assert!(PayloadValidator::check_keys(fields_of(&payload)));
}

#[test]
fn required_keys_must_all_be_present() {
    for missing in REQUIRED_KEYS {
        let mut payload = sample_payload();
        payload.as_object_mut().expect("object").remove(missing);
        assert!(
            !PayloadValidator::check_valid_keys(&REQUIRED_KEYS, fields_of(&payload)),
            "payload without {missing} must fail the presence check"
        );
        assert_eq!(
            PayloadValidator::validate(&payload),
            Err(ValidationError::MissingKeys)
        );
    }
}

#[test]
fn extra_keys_are_tolerated() {
    let mut payload = sample_payload();
    payload["note"] = json!("community spread");
    assert_eq!(PayloadValidator::validate(&payload), Ok(()));
}

#[test]
fn whitespace_check_flags_space_only_strings() {
    assert!(PayloadValidator::check_absolute_space_characters(&["   "]));
    assert!(PayloadValidator::check_absolute_space_characters(&["\t\n"]));
    assert!(PayloadValidator::check_absolute_space_characters(&["days", "  "]));
    assert!(!PayloadValidator::check_absolute_space_characters(&["days", "Africa"]));
    // An empty string is empty, not whitespace-only.
    assert!(!PayloadValidator::check_absolute_space_characters(&[""]));
}

#[test]
fn whitespace_region_name_is_rejected() {
    let mut payload = sample_payload();
    payload["region"]["name"] = json!("   ");
    assert_eq!(
        PayloadValidator::validate(&payload),
        Err(ValidationError::SpaceCharacters)
    );
}

#[test]
fn whitespace_period_type_is_rejected() {
    let mut payload = sample_payload();
    payload["periodType"] = json!(" \t ");
    assert_eq!(
        PayloadValidator::validate(&payload),
        Err(ValidationError::SpaceCharacters)
    );
}

#[test]
fn checks_run_in_contract_priority_order() {
    // Empty value, blank key, missing key, and whitespace all at once:
    // the empty-values message wins.
    let payload = json!({
        "": "x",
        "region": { "name": "   " },
        "periodType": "",
        "timeToElapse": 5
    });
    assert_eq!(
        PayloadValidator::validate(&payload),
        Err(ValidationError::EmptyValues)
    );

    // Blank key beats missing required keys.
    let payload = json!({
        "": "x",
        "region": { "name": "Africa" },
        "periodType": "days",
        "timeToElapse": 5
    });
    assert_eq!(
        PayloadValidator::validate(&payload),
        Err(ValidationError::BlankKeys)
    );

    // Missing required keys beat the whitespace check.
    let payload = json!({
        "region": { "name": "   " },
        "periodType": "days",
        "timeToElapse": 5
    });
    assert_eq!(
        PayloadValidator::validate(&payload),
        Err(ValidationError::MissingKeys)
    );
}

#[test]
fn non_object_payloads_are_rejected_up_front() {
    for payload in [json!([1, 2, 3]), json!("estimate"), json!(42)] {
        assert_eq!(
            PayloadValidator::validate(&payload),
            Err(ValidationError::NotAnObject)
        );
    }
}

#[test]
fn non_string_watched_fields_are_left_to_typed_decoding() {
    // region as a bare string is non-empty, so the form checks pass; the
    // typed decode rejects it later.
    let mut payload = sample_payload();
    payload["region"] = json!("Africa");
    assert_eq!(PayloadValidator::validate(&payload), Ok(()));
}

#[test]
fn error_messages_keep_their_historical_wording() {
    assert_eq!(
        ValidationError::EmptyValues.to_string(),
        "Please provide all values for the form"
    );
    assert_eq!(
        ValidationError::BlankKeys.to_string(),
        "Please provide all keys for the form"
    );
    assert_eq!(
        ValidationError::MissingKeys.to_string(),
        "Please provide all valid keys for the form"
    );
    assert_eq!(
        ValidationError::SpaceCharacters.to_string(),
        "The form strings values can't be spaces"
    );
}
