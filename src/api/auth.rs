//! Auth Endpoints

use reqwest::multipart::Form;
use reqwest::Method;

use super::{fetch_empty, fetch_json, image_part, request};
use crate::error::ApiError;
use crate::models::{Credentials, ImageUpload, LoginResponse, Registration};

pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    fetch_json(request(Method::POST, "/login").json(credentials)).await
}

/// Create an account; the optional picture goes up in the same multipart body
pub async fn register(registration: &Registration, image: Option<ImageUpload>) -> Result<(), ApiError> {
    let mut form = Form::new()
        .text("name", registration.name.clone())
        .text("email", registration.email.clone())
        .text("password", registration.password.clone())
        .text("agree_terms", if registration.agree_terms { "1" } else { "0" });
    if let Some(image) = image {
        form = form.part("profile_image", image_part(image)?);
    }
    fetch_empty(request(Method::POST, "/register").multipart(form)).await
}

/// Revoke the token server-side. Callers clear the local token regardless.
pub async fn logout() -> Result<(), ApiError> {
    fetch_empty(request(Method::POST, "/logout")).await
}
