use rosterbook_core::{new_employee_id, Department, Employee, Position};
use std::collections::HashSet;

#[test]
fn generated_ids_are_non_empty_and_distinct() {
    let ids: HashSet<String> = (0..64).map(|_| new_employee_id()).collect();
    assert_eq!(ids.len(), 64);
    assert!(ids.iter().all(|id| !id.is_empty()));
}

#[test]
fn employee_serialization_uses_expected_wire_fields() {
    let employee = Employee {
        id: "11111111-2222-4333-8444-555555555555".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        date_of_employment: "2020-01-01".to_string(),
        date_of_birth: "1990-01-01".to_string(),
        phone_number: "+12345678901".to_string(),
        email: "ada@example.com".to_string(),
        department: Department::Analytics,
        position: Position::Medior,
    };

    let json = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["lastName"], "Lovelace");
    assert_eq!(json["dateOfEmployment"], "2020-01-01");
    assert_eq!(json["dateOfBirth"], "1990-01-01");
    assert_eq!(json["phoneNumber"], "+12345678901");
    assert_eq!(json["email"], "ada@example.com");
    assert_eq!(json["department"], "Analytics");
    assert_eq!(json["position"], "Medior");

    let round_tripped: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(round_tripped, employee);
}
