use super::*;
use crate::net::error::classify;
use serde_json::json;

#[test]
fn backend_password_fields_map_onto_form_fields() {
    let body = json!({
        "password1": ["This password is too short."],
        "password2": ["The two password fields didn't match."],
        "email": ["A user is already registered with this e-mail address."]
    });
    let ApiError::Validation(errors) = classify(400, &body) else {
        panic!("expected validation error");
    };
    let mapped = map_sign_up_errors(errors);

    assert_eq!(
        mapped.field("password").as_deref(),
        Some("This password is too short.")
    );
    assert_eq!(
        mapped.field("confirm_password").as_deref(),
        Some("The two password fields didn't match.")
    );
    assert_eq!(
        mapped.field("email").as_deref(),
        Some("A user is already registered with this e-mail address.")
    );
    assert!(mapped.field("password1").is_none());
    assert!(mapped.field("password2").is_none());
}

#[test]
fn general_errors_survive_the_mapping() {
    let ApiError::Validation(errors) =
        classify(400, &json!({"non_field_errors": ["Registration closed."]}))
    else {
        panic!("expected validation error");
    };
    let mapped = map_sign_up_errors(errors);
    assert_eq!(mapped.general().as_deref(), Some("Registration closed."));
}
