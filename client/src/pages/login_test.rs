use super::*;

#[test]
fn login_requires_both_fields() {
    assert!(validate_login_input("", "secret").is_err());
    assert!(validate_login_input("2021001", "").is_err());
    assert!(validate_login_input("   ", "secret").is_err());
}

#[test]
fn login_trims_student_id_but_not_password() {
    let request = validate_login_input(" 2021001 ", " pass ").unwrap();
    assert_eq!(request.student_id, "2021001");
    assert_eq!(request.password, " pass ");
}

#[test]
fn register_requires_every_field() {
    assert!(validate_register_input("2021001", "", "13800000000", "pw").is_err());
    assert!(validate_register_input("2021001", "Li Lei", " ", "pw").is_err());
    assert!(validate_register_input("2021001", "Li Lei", "13800000000", "").is_err());
}

#[test]
fn register_builds_trimmed_request() {
    let request = validate_register_input("2021001", " Li Lei ", "13800000000", "hunter22").unwrap();
    assert_eq!(
        request,
        RegisterRequest {
            student_id: "2021001".to_owned(),
            name: "Li Lei".to_owned(),
            phone: "13800000000".to_owned(),
            password: "hunter22".to_owned(),
        }
    );
}
