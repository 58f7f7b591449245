// Shared client handle: one reqwest client, one base URL, one request path
//
// Every operation in every namespace goes through `request`, so session
// cookies and URL joining behave identically across the whole surface. The
// cookie store lives on the reqwest client; whatever session cookie the
// backend sets rides on every subsequent call, trip deletion included.

use reqwest::{Method, RequestBuilder, Response};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::locations::LocationClient;
use crate::photos::PhotoClient;
use crate::responses::ErrorBody;
use crate::trips::TripClient;

/// Handle to the Travelog backend.
///
/// Cheap to clone and safe to share across tasks: the inner reqwest client is
/// reference-counted and no other state exists. Operations are exposed
/// through the [`trips`](Self::trips), [`locations`](Self::locations) and
/// [`photos`](Self::photos) namespaces.
#[derive(Debug, Clone)]
pub struct TravelogClient {
    http: reqwest::Client,
    base_url: String,
}

impl TravelogClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn trips(&self) -> TripClient<'_> {
        TripClient::new(self)
    }

    pub fn locations(&self) -> LocationClient<'_> {
        LocationClient::new(self)
    }

    pub fn photos(&self) -> PhotoClient<'_> {
        PhotoClient::new(self)
    }

    /// Build a request for `path` relative to the base URL. `path` must start
    /// with a slash.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
    }
}

/// Pass 2xx responses through; turn anything else into [`ApiError::Http`]
/// carrying the body's `error` field or `fallback`.
pub(crate) async fn check(response: Response, fallback: &str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    Err(ApiError::Http {
        status: status.as_u16(),
        message: error_message(&body, fallback),
    })
}

/// Extract the backend's structured error message, falling back when the
/// body is missing, malformed, or carries an empty message.
pub(crate) fn error_message(body: &[u8], fallback: &str) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(message),
        }) if !message.is_empty() => message,
        _ => fallback.to_string(),
    }
}
