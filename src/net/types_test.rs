use super::*;

// =============================================================
// TokenResponse
// =============================================================

#[test]
fn token_prefers_access_then_key_then_token() {
    let all = TokenResponse {
        access: Some("a".to_owned()),
        key: Some("k".to_owned()),
        token: Some("t".to_owned()),
    };
    assert_eq!(all.into_token().as_deref(), Some("a"));

    let key_only = TokenResponse {
        access: None,
        key: Some("k".to_owned()),
        token: Some("t".to_owned()),
    };
    assert_eq!(key_only.into_token().as_deref(), Some("k"));

    let token_only = TokenResponse {
        access: None,
        key: None,
        token: Some("t".to_owned()),
    };
    assert_eq!(token_only.into_token().as_deref(), Some("t"));
}

#[test]
fn empty_token_response_yields_none() {
    assert_eq!(TokenResponse::default().into_token(), None);

    let blank = TokenResponse {
        access: Some(String::new()),
        key: None,
        token: None,
    };
    assert_eq!(blank.into_token(), None);
}

// =============================================================
// ListQuery
// =============================================================

#[test]
fn list_query_pairs_omit_empty_values() {
    assert!(ListQuery::default().pairs().is_empty());

    let search_only = ListQuery::new("mercy", "");
    assert_eq!(search_only.pairs(), vec![("search", "mercy".to_owned())]);

    let both = ListQuery::new("mercy", "-name");
    assert_eq!(
        both.pairs(),
        vec![("search", "mercy".to_owned()), ("ordering", "-name".to_owned())]
    );
}

// =============================================================
// Wire decoding
// =============================================================

#[test]
fn blood_bank_entry_decodes_serializer_shape() {
    let entry: BloodBankEntry = serde_json::from_value(serde_json::json!({
        "id": 3,
        "donor": [1, 2],
        "hospital": 7,
        "hospital_name": "City General",
        "blood_group": "O+",
        "bag_quantity": 12,
        "is_available": true,
        "created_at": "2024-05-01T10:00:00Z"
    }))
    .expect("blood bank entry");
    assert_eq!(entry.hospital, Some(7));
    assert_eq!(entry.hospital_name, "City General");
    assert_eq!(entry.bag_quantity, 12);
    assert!(entry.is_available);
}

#[test]
fn recipient_entry_decodes_nested_details() {
    let entry: RecipientEntry = serde_json::from_value(serde_json::json!({
        "id": 9,
        "recipient": "Jane Roe",
        "blood_bank": 3,
        "blood_bank_details": {"blood_group": "AB-", "hospital": "City General"},
        "bag_quantity": 2,
        "created_at": "2024-05-02T08:30:00Z"
    }))
    .expect("recipient entry");
    assert_eq!(entry.recipient, "Jane Roe");
    assert_eq!(entry.blood_bank_details.blood_group, "AB-");
    assert_eq!(entry.blood_bank_details.hospital, "City General");
}

#[test]
fn user_decodes_without_id_field() {
    // The user-detail serializer exposes no primary key.
    let user: User = serde_json::from_value(serde_json::json!({
        "username": "jdoe",
        "email": "jdoe@example.com",
        "first_name": "",
        "last_name": "",
        "blood_group": null,
        "is_donor": false
    }))
    .expect("user");
    assert_eq!(user.id, None);
    assert_eq!(user.blood_group, None);
    assert_eq!(user.display_name(), "jdoe");
}

#[test]
fn user_display_name_prefers_full_name() {
    let user = User {
        username: "jdoe".to_owned(),
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        ..User::default()
    };
    assert_eq!(user.display_name(), "Jane Doe");
}
