use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  admin@example.go.id ", " s3cret "),
        Ok(LoginRequest { email: "admin@example.go.id".to_owned(), password: " s3cret ".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_valid_email() {
    assert_eq!(validate_login_input("", "s3cret"), Err("Enter a valid email address."));
    assert_eq!(validate_login_input("admin", "s3cret"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("admin@example.go.id", "   "), Err("Enter your password."));
}
