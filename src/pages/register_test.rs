use super::*;

#[test]
fn validate_register_input_trims_identity_fields() {
    assert_eq!(
        validate_register_input(" operator ", " op@example.go.id ", "hunter22"),
        Ok(RegisterRequest {
            username: "operator".to_owned(),
            email: "op@example.go.id".to_owned(),
            password: "hunter22".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_checks_fields_in_form_order() {
    assert_eq!(validate_register_input("", "bad", "x"), Err("Enter a username."));
    assert_eq!(validate_register_input("op", "bad", "x"), Err("Enter a valid email address."));
    assert_eq!(
        validate_register_input("op", "op@example.go.id", "  "),
        Err("Enter a password.")
    );
}
