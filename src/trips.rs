// Trip operations

use reqwest::Method;
use tracing::info;

use crate::client::{check, TravelogClient};
use crate::error::ApiError;
use crate::responses::{MessageEnvelope, TripDetail, TripEnvelope, TripsEnvelope};
use crate::types::{CreateTripRequest, Trip, UpdateTripRequest};

/// Operations on the `/trips` resource.
pub struct TripClient<'a> {
    client: &'a TravelogClient,
}

impl<'a> TripClient<'a> {
    pub(crate) fn new(client: &'a TravelogClient) -> Self {
        Self { client }
    }

    /// Fetch every trip visible to the current session, owned and shared.
    /// A response without a `trips` field yields an empty vec, not an error.
    pub async fn list_all(&self) -> Result<Vec<Trip>, ApiError> {
        let response = self
            .client
            .request(Method::GET, "/trips/all")
            .send()
            .await?;
        let response = check(response, "Failed to fetch trips").await?;
        let body: TripsEnvelope = response.json().await?;
        Ok(body.trips)
    }

    /// Fetch one trip together with its locations and photos.
    pub async fn get(&self, id: &str) -> Result<TripDetail, ApiError> {
        let response = self
            .client
            .request(Method::GET, &format!("/trips/{id}"))
            .send()
            .await?;
        let response = check(response, "Failed to fetch trip").await?;
        Ok(response.json().await?)
    }

    /// Create a trip and return it with its server-assigned identifier.
    pub async fn create(&self, trip: &CreateTripRequest) -> Result<Trip, ApiError> {
        let response = self
            .client
            .request(Method::POST, "/trips")
            .json(trip)
            .send()
            .await?;
        let response = check(response, "Failed to create trip").await?;
        let body: TripEnvelope = response.json().await?;
        Ok(body.trip)
    }

    /// Apply a partial update and return the trip as echoed by the server.
    pub async fn update(&self, id: &str, trip: &UpdateTripRequest) -> Result<Trip, ApiError> {
        let response = self
            .client
            .request(Method::PUT, &format!("/trips/{id}"))
            .json(trip)
            .send()
            .await?;
        let response = check(response, "Failed to update trip").await?;
        let body: TripEnvelope = response.json().await?;
        Ok(body.trip)
    }

    /// Delete a trip. The server's confirmation message is logged, not
    /// returned; a success body that is missing or not JSON is still success.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .request(Method::DELETE, &format!("/trips/{id}"))
            .send()
            .await?;
        let response = check(response, "Failed to delete trip").await?;
        if let Ok(MessageEnvelope {
            message: Some(message),
        }) = response.json().await
        {
            info!(%message, "trip deleted");
        }
        Ok(())
    }
}
