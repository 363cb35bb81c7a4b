use super::*;

#[test]
fn join_url_uses_exactly_one_slash() {
    assert_eq!(
        join_url("http://127.0.0.1:8000/", "api/v1/hospital/"),
        "http://127.0.0.1:8000/api/v1/hospital/"
    );
    assert_eq!(
        join_url("http://127.0.0.1:8000", "/api/v1/hospital/"),
        "http://127.0.0.1:8000/api/v1/hospital/"
    );
    assert_eq!(
        join_url("http://127.0.0.1:8000", "auth/login/"),
        "http://127.0.0.1:8000/auth/login/"
    );
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

#[test]
fn auth_header_carries_stored_credential() {
    assert_eq!(
        auth_header(Some("abc123")),
        Some("Bearer abc123".to_owned())
    );
}

#[test]
fn auth_header_is_omitted_without_credential() {
    assert_eq!(auth_header(None), None);
}

#[test]
fn base_url_defaults_to_local_backend() {
    // No build-time override in the test environment.
    assert_eq!(base_url(), DEFAULT_BASE_URL);
}
