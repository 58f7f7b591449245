// Location operations

use reqwest::Method;

use crate::client::{check, TravelogClient};
use crate::error::ApiError;
use crate::responses::{LocationDetail, LocationEnvelope};
use crate::types::{CreateLocationRequest, Location};

/// Operations on the `/locations` resource.
pub struct LocationClient<'a> {
    client: &'a TravelogClient,
}

impl<'a> LocationClient<'a> {
    pub(crate) fn new(client: &'a TravelogClient) -> Self {
        Self { client }
    }

    /// Fetch one location together with its photos.
    pub async fn get(&self, id: &str) -> Result<LocationDetail, ApiError> {
        let response = self
            .client
            .request(Method::GET, &format!("/locations/{id}"))
            .send()
            .await?;
        let response = check(response, "Failed to fetch location").await?;
        Ok(response.json().await?)
    }

    /// Create a location and return it with its server-assigned identifier.
    pub async fn create(&self, location: &CreateLocationRequest) -> Result<Location, ApiError> {
        let response = self
            .client
            .request(Method::POST, "/locations")
            .json(location)
            .send()
            .await?;
        let response = check(response, "Failed to create location").await?;
        let body: LocationEnvelope = response.json().await?;
        Ok(body.location)
    }

    /// Replace a location with the full object given here. Unlike trip
    /// updates this is not partial; every field is sent.
    pub async fn update(&self, location: &Location) -> Result<Location, ApiError> {
        let response = self
            .client
            .request(Method::PUT, &format!("/locations/{}", location.id))
            .json(location)
            .send()
            .await?;
        let response = check(response, "Failed to update location").await?;
        let body: LocationEnvelope = response.json().await?;
        Ok(body.location)
    }

    /// Delete a location by identifier.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .request(Method::DELETE, &format!("/locations/{id}"))
            .send()
            .await?;
        check(response, "Failed to delete location").await?;
        Ok(())
    }
}
