//! Per-endpoint API helpers.
//!
//! Each function is a thin pass-through: build the request, invoke the HTTP
//! client, return the parsed payload or the failure untouched. No business
//! logic and no caching live here.

use serde::Serialize;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{
    BloodBankEntry, DonationRequest, Hospital, Id, ListQuery, RecipientEntry, TokenResponse, User,
};

/// `POST auth/login/`
pub async fn sign_in(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    #[derive(Serialize)]
    struct Payload<'a> {
        email: &'a str,
        password: &'a str,
    }
    http::post_json("auth/login/", &Payload { email, password }).await
}

/// `POST auth/registration/`
pub async fn sign_up(
    email: &str,
    password1: &str,
    password2: &str,
) -> Result<TokenResponse, ApiError> {
    #[derive(Serialize)]
    struct Payload<'a> {
        email: &'a str,
        password1: &'a str,
        password2: &'a str,
    }
    http::post_json(
        "auth/registration/",
        &Payload {
            email,
            password1,
            password2,
        },
    )
    .await
}

/// `POST auth/logout/`
pub async fn sign_out() -> Result<(), ApiError> {
    let _: serde_json::Value = http::post_json("auth/logout/", &serde_json::json!({})).await?;
    Ok(())
}

/// `GET auth/user/`
pub async fn fetch_profile() -> Result<User, ApiError> {
    http::get_json("auth/user/", &[]).await
}

/// `GET api/v1/hospital/`
pub async fn hospital_list(query: &ListQuery) -> Result<Vec<Hospital>, ApiError> {
    http::get_json("api/v1/hospital/", &query.pairs()).await
}

/// `GET api/v1/blood-bank/`
pub async fn blood_bank_list(query: &ListQuery) -> Result<Vec<BloodBankEntry>, ApiError> {
    http::get_json("api/v1/blood-bank/", &query.pairs()).await
}

/// `POST api/v1/donor/`. The donor's blood group comes from the profile on
/// the backend side, so the payload carries only the hospital.
pub async fn create_donation(hospital: Id) -> Result<DonationRequest, ApiError> {
    #[derive(Serialize)]
    struct Payload {
        hospital: Id,
    }
    http::post_json("api/v1/donor/", &Payload { hospital }).await
}

/// `GET api/v1/recipient/`
pub async fn recipient_list(query: &ListQuery) -> Result<Vec<RecipientEntry>, ApiError> {
    http::get_json("api/v1/recipient/", &query.pairs()).await
}

/// `POST api/v1/recipient/`
pub async fn create_recipient(
    blood_bank: Id,
    bag_quantity: i64,
) -> Result<RecipientEntry, ApiError> {
    #[derive(Serialize)]
    struct Payload {
        blood_bank: Id,
        bag_quantity: i64,
    }
    http::post_json(
        "api/v1/recipient/",
        &Payload {
            blood_bank,
            bag_quantity,
        },
    )
    .await
}
