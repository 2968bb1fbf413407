use super::*;

#[test]
fn default_points_at_local_user_api() {
    let config = PortalConfig::default();
    assert_eq!(config.api_base_url, "http://localhost:5000/api/v1/user");
    assert_eq!(config.identity_timeout, Duration::from_millis(5000));
}

#[test]
fn from_values_without_overrides_matches_default() {
    assert_eq!(PortalConfig::from_values(None, None), PortalConfig::default());
}

#[test]
fn from_values_trims_trailing_slash_from_url() {
    let config = PortalConfig::from_values(Some("https://portal.example.go.id/api/v1/user/"), None);
    assert_eq!(config.api_base_url, "https://portal.example.go.id/api/v1/user");
}

#[test]
fn from_values_ignores_blank_url() {
    let config = PortalConfig::from_values(Some("   "), None);
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_values_parses_timeout() {
    let config = PortalConfig::from_values(None, Some(" 2500 "));
    assert_eq!(config.identity_timeout, Duration::from_millis(2500));
}

#[test]
fn from_values_rejects_zero_or_malformed_timeout() {
    assert_eq!(
        PortalConfig::from_values(None, Some("0")).identity_timeout,
        Duration::from_millis(DEFAULT_IDENTITY_TIMEOUT_MS)
    );
    assert_eq!(
        PortalConfig::from_values(None, Some("soon")).identity_timeout,
        Duration::from_millis(DEFAULT_IDENTITY_TIMEOUT_MS)
    );
}
