// Wire envelopes for backend responses
//
// The backend wraps every payload in a named envelope. Collections declare
// `#[serde(default)]` so an omitted array field deserializes to empty rather
// than failing, which is part of the response contract, not a runtime
// fallback.

use serde::Deserialize;

use crate::types::{Location, Photo, Trip};

/// Response to `GET /trips/{id}`: the trip plus everything nested under it.
#[derive(Debug, Clone, Deserialize)]
pub struct TripDetail {
    pub trip: Trip,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Response to `GET /locations/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationDetail {
    pub location: Location,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TripsEnvelope {
    #[serde(default)]
    pub trips: Vec<Trip>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TripEnvelope {
    pub trip: Trip,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocationEnvelope {
    pub location: Location,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PhotosEnvelope {
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Confirmation body of a successful trip deletion.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

/// Batch upload body. The `success` flag is authoritative independent of the
/// HTTP status; an absent flag counts as failure.
#[derive(Debug, Deserialize)]
pub(crate) struct BatchUploadEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Structured error body attempted on every non-2xx response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
