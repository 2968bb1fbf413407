use super::*;

#[test]
fn validate_resend_input_trims_email() {
    assert_eq!(
        validate_resend_input(" op@example.go.id\n"),
        Ok(ResendOtpRequest { email: "op@example.go.id".to_owned() })
    );
}

#[test]
fn validate_resend_input_rejects_missing_email() {
    assert_eq!(validate_resend_input("  "), Err("Enter a valid email address."));
}
