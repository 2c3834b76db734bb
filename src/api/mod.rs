//! API Client
//!
//! HTTP bindings to the inventory backend, organized by domain.

mod auth;
mod dashboard;
mod items;
mod users;

use js_sys::Uint8Array;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::header::ACCEPT;
use reqwest::multipart::Part;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::JsFuture;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::ImageUpload;
use crate::session;

// Re-export all public items
pub use auth::*;
pub use dashboard::*;
pub use items::*;
pub use users::*;

// ========================
// Request plumbing
// ========================

thread_local! {
    static HTTP_CLIENT: Client = Client::new();
}

/// Shared client; clones share one connection pool
fn http_client() -> Client {
    HTTP_CLIENT.with(Client::clone)
}

/// Builder with the JSON accept header and the bearer token, if any.
/// The token is read on every call so a login or logout takes effect at once.
fn request(method: Method, path: &str) -> RequestBuilder {
    authorized(&http_client(), method, ApiConfig::load().endpoint(path), session::token())
}

fn authorized(client: &Client, method: Method, url: String, token: Option<String>) -> RequestBuilder {
    let builder = client.request(method, url).header(ACCEPT, "application/json");
    match token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Send and return the body of a 2xx response
async fn send(builder: RequestBuilder) -> Result<String, ApiError> {
    let response = builder.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, &body));
    }
    Ok(body)
}

async fn fetch_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let body = send(builder).await?;
    Ok(serde_json::from_str(&body)?)
}

async fn fetch_empty(builder: RequestBuilder) -> Result<(), ApiError> {
    send(builder).await.map(|_| ())
}

/// Append an encoded query string to a path
fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query: Vec<String> = pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, NON_ALPHANUMERIC),
                utf8_percent_encode(v, NON_ALPHANUMERIC)
            )
        })
        .collect();
    format!("{}?{}", path, query.join("&"))
}

// ========================
// Uploads
// ========================

/// Read a picked file into memory
pub async fn read_image(file: web_sys::File) -> Result<ImageUpload, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::browser("read file", e))?;
    let mime = file.type_();
    Ok(ImageUpload {
        file_name: file.name(),
        mime: if mime.is_empty() { "application/octet-stream".to_string() } else { mime },
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

fn image_part(upload: ImageUpload) -> Result<Part, ApiError> {
    Ok(Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.mime)
        .map_err(|e| ApiError::browser("image type", e))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn test_with_query_encodes_values() {
        assert_eq!(with_query("/dashboard", &[("period", "weekly")]), "/dashboard?period=weekly");
        assert_eq!(with_query("/items", &[("q", "a b&c")]), "/items?q=a%20b%26c");
        assert_eq!(with_query("/items", &[]), "/items");
    }

    #[test]
    fn test_authorized_request_headers() {
        let first = authorized(&http_client(), Method::GET, "http://localhost:8000/api/items".into(), None)
            .build()
            .unwrap();
        assert_eq!(first.url().as_str(), "http://localhost:8000/api/items");
        assert_eq!(first.headers()[ACCEPT], "application/json");
        assert!(first.headers().get(AUTHORIZATION).is_none());

        let second = authorized(&http_client(), Method::DELETE, "http://localhost:8000/api/items/3".into(), Some("abc".into()))
            .build()
            .unwrap();
        assert_eq!(second.method(), &Method::DELETE);
        assert_eq!(second.headers()[AUTHORIZATION], "Bearer abc");
    }

    #[test]
    fn test_image_part_rejects_bad_mime() {
        let upload = |mime: &str| ImageUpload {
            file_name: "avatar.png".into(),
            mime: mime.into(),
            bytes: vec![1, 2, 3],
        };
        assert!(image_part(upload("image/png")).is_ok());
        match image_part(upload("not a mime")) {
            Err(ApiError::Browser(message)) => assert!(message.starts_with("image type")),
            other => panic!("expected a browser error, got {:?}", other.map(|_| ())),
        }
    }
}
