//! User Endpoints
//!
//! Current user profile, password, account deletion and the user list.

use reqwest::multipart::Form;
use reqwest::Method;

use super::{fetch_empty, fetch_json, image_part, request};
use crate::error::ApiError;
use crate::models::{ImageUpload, PasswordChange, ProfileUpdate, User, UserEnvelope, UserList};

pub async fn current_user() -> Result<User, ApiError> {
    let envelope: UserEnvelope = fetch_json(request(Method::GET, "/user")).await?;
    Ok(envelope.into_user())
}

pub async fn update_profile(update: &ProfileUpdate, image: Option<ImageUpload>) -> Result<(), ApiError> {
    let mut form = Form::new()
        .text("name", update.name.clone())
        .text("email", update.email.clone());
    if let Some(image) = image {
        form = form.part("profile_image", image_part(image)?);
    }
    fetch_empty(request(Method::POST, "/user/update").multipart(form)).await
}

pub async fn change_password(change: &PasswordChange) -> Result<(), ApiError> {
    fetch_empty(request(Method::POST, "/user/password").json(change)).await
}

pub async fn delete_account() -> Result<(), ApiError> {
    fetch_empty(request(Method::DELETE, "/user/delete")).await
}

pub async fn list_users() -> Result<Vec<User>, ApiError> {
    let list: UserList = fetch_json(request(Method::GET, "/users")).await?;
    Ok(list.into_users())
}
