//! Page views. Every page owns only local state; cross-page state lives in
//! the auth context and the URL query string.

pub mod blood_bank;
pub mod donate_blood;
pub mod hospitals;
pub mod landing;
pub mod receive_blood;
pub mod recipient;
pub mod sign_in;
pub mod sign_up;
