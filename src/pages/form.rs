//! Field checks shared by the auth forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Trimmed value, or `None` when only whitespace was entered.
pub fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Shallow shape check; the server does the real validation.
pub fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
        && !value.chars().any(char::is_whitespace)
}

/// Trimmed email, provided it looks like one.
pub fn required_email(value: &str) -> Option<String> {
    required(value).filter(|email| looks_like_email(email))
}
