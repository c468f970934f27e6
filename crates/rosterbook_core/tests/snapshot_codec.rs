use rosterbook_core::repo::codec::{decode_app_state, encode_app_state};
use rosterbook_core::{seed_roster, AppState};
use serde_json::{json, Value};

#[test]
fn encode_uses_the_camel_case_wire_shape() {
    let state = AppState {
        employees: seed_roster(),
        ..AppState::default()
    };

    let payload = encode_app_state(&state).unwrap();
    let value: Value = serde_json::from_str(&payload).unwrap();

    assert!(value["employees"].is_array());
    assert!(value["editingEmployee"].is_null());
    assert_eq!(value["loading"], json!(false));
    assert!(value["error"].is_null());

    let first = &value["employees"][0];
    assert_eq!(first["id"], json!("seed-1"));
    assert_eq!(first["firstName"], json!("Betty"));
    assert_eq!(first["dateOfEmployment"], json!("2020-01-15"));
    assert_eq!(first["phoneNumber"], json!("+90 532 123 4567"));
    assert_eq!(first["department"], json!("Tech"));
    assert_eq!(first["position"], json!("Senior"));
}

#[test]
fn encode_then_decode_is_identity() {
    let state = AppState {
        employees: seed_roster(),
        editing_employee: seed_roster().into_iter().nth(1),
        loading: true,
        error: Some("last write failed".to_string()),
    };

    let payload = encode_app_state(&state).unwrap();
    let decoded = decode_app_state(&payload).unwrap();

    assert_eq!(decoded, state);
}

#[test]
fn decode_accepts_a_minimal_valid_snapshot() {
    let payload = r#"{"employees": [], "loading": false, "error": null}"#;
    let state = decode_app_state(payload).unwrap();
    assert!(state.employees.is_empty());
    assert_eq!(state.editing_employee, None);
}

#[test]
fn decode_rejects_non_object_roots_and_invalid_json() {
    assert!(decode_app_state("not json").is_err());
    assert!(decode_app_state("[1, 2, 3]").is_err());
    assert!(decode_app_state("\"employees\"").is_err());
}

#[test]
fn decode_rejects_missing_or_mistyped_top_level_fields() {
    let missing_employees = r#"{"loading": false, "error": null}"#;
    let err = decode_app_state(missing_employees).unwrap_err();
    assert!(err.reason.contains("employees"));

    let mistyped_employees = r#"{"employees": {}, "loading": false, "error": null}"#;
    assert!(decode_app_state(mistyped_employees).is_err());

    let mistyped_loading = r#"{"employees": [], "loading": "no", "error": null}"#;
    let err = decode_app_state(mistyped_loading).unwrap_err();
    assert!(err.reason.contains("loading"));

    let mistyped_error = r#"{"employees": [], "loading": false, "error": 500}"#;
    let err = decode_app_state(mistyped_error).unwrap_err();
    assert!(err.reason.contains("error"));
}

#[test]
fn decode_rejects_malformed_employees() {
    let base = |employee: Value| {
        json!({
            "employees": [employee],
            "loading": false,
            "error": null
        })
        .to_string()
    };

    let missing_field = json!({
        "id": "1",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "dateOfEmployment": "2020-01-01",
        "dateOfBirth": "1990-01-01",
        "phoneNumber": "+12345678901",
        "department": "Tech",
        "position": "Junior"
    });
    let err = decode_app_state(&base(missing_field)).unwrap_err();
    assert!(err.reason.contains("email"));

    let unknown_department = json!({
        "id": "1",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "dateOfEmployment": "2020-01-01",
        "dateOfBirth": "1990-01-01",
        "phoneNumber": "+12345678901",
        "email": "ada@example.com",
        "department": "Sales",
        "position": "Junior"
    });
    let err = decode_app_state(&base(unknown_department)).unwrap_err();
    assert!(err.reason.contains("Sales"));

    let mistyped_entry = json!("not an employee");
    let err = decode_app_state(&base(mistyped_entry)).unwrap_err();
    assert!(err.reason.contains("employees[0]"));
}

#[test]
fn decode_validates_the_editing_employee_shape() {
    let payload = json!({
        "employees": [],
        "editingEmployee": {"id": "1"},
        "loading": false,
        "error": null
    })
    .to_string();

    let err = decode_app_state(&payload).unwrap_err();
    assert!(err.reason.contains("editingEmployee"));
}
