// Photo operations, including the multipart batch upload

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tracing::debug;

use crate::client::{check, TravelogClient};
use crate::error::ApiError;
use crate::responses::{BatchUploadEnvelope, PhotosEnvelope};
use crate::types::{Photo, UploadPhotoRequest};

const UPLOAD_FALLBACK: &str = "Failed to upload photos";
const UPLOAD_REJECTED_FALLBACK: &str = "Upload failed";

/// Operations on the `/photos` resource.
pub struct PhotoClient<'a> {
    client: &'a TravelogClient,
}

impl<'a> PhotoClient<'a> {
    pub(crate) fn new(client: &'a TravelogClient) -> Self {
        Self { client }
    }

    /// Fetch every photo across all trips and locations visible to the
    /// session. A response without a `photos` field yields an empty vec.
    pub async fn list_all(&self) -> Result<Vec<Photo>, ApiError> {
        let response = self.client.request(Method::GET, "/photos").send().await?;
        let response = check(response, "Failed to fetch photos").await?;
        let body: PhotosEnvelope = response.json().await?;
        Ok(body.photos)
    }

    /// Fetch the photos attached to one location.
    pub async fn list_by_location(&self, location_id: &str) -> Result<Vec<Photo>, ApiError> {
        let response = self
            .client
            .request(Method::GET, &format!("/photos/location/{location_id}"))
            .send()
            .await?;
        let response = check(response, "Failed to fetch photos").await?;
        let body: PhotosEnvelope = response.json().await?;
        Ok(body.photos)
    }

    /// Upload a batch of photos for a single location in one multipart
    /// request.
    ///
    /// An empty batch is a local no-op: it returns an empty vec without
    /// touching the network. Every request must target the first request's
    /// location; a mixed batch fails with
    /// [`ApiError::MixedUploadLocations`] before any request is sent. The
    /// multipart boundary is left to the transport.
    ///
    /// The backend's `success` flag is honored independent of the HTTP
    /// status: a 2xx response carrying `success: false` is an error.
    pub async fn upload_batch(
        &self,
        requests: &[UploadPhotoRequest],
    ) -> Result<Vec<Photo>, ApiError> {
        let Some(first) = requests.first() else {
            return Ok(Vec::new());
        };
        let location_id = &first.location_id;
        if let Some(stray) = requests.iter().find(|r| r.location_id != *location_id) {
            return Err(ApiError::MixedUploadLocations {
                expected: location_id.clone(),
                found: stray.location_id.clone(),
            });
        }

        debug!(
            location_id = %location_id,
            file_count = requests.len(),
            "uploading photo batch"
        );

        let mut form = Form::new().text("location_id", location_id.clone());
        for request in requests {
            form = form.part(
                "files",
                Part::bytes(request.data.to_vec()).file_name(request.file_name.clone()),
            );
        }

        let response = self
            .client
            .request(Method::POST, "/photos/batch-upload")
            .multipart(form)
            .send()
            .await?;
        let response = check(response, UPLOAD_FALLBACK).await?;

        let body: BatchUploadEnvelope = response.json().await?;
        if !body.success {
            let message = body
                .error
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| UPLOAD_REJECTED_FALLBACK.to_string());
            return Err(ApiError::Rejected(message));
        }
        Ok(body.photos)
    }

    /// Delete a photo by identifier.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .request(Method::DELETE, &format!("/photos/{id}"))
            .send()
            .await?;
        check(response, "Failed to delete photo").await?;
        Ok(())
    }

    /// Promote one photo to cover status for its location. The backend
    /// demotes any previous cover; the client issues a single PATCH with no
    /// body and relies on the at-most-one-cover invariant being enforced
    /// server-side.
    pub async fn set_cover(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .request(Method::PATCH, &format!("/photos/{id}/set-cover"))
            .send()
            .await?;
        check(response, "Failed to set cover photo").await?;
        Ok(())
    }
}
