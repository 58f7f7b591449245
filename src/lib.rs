// Travelog API client: typed async HTTP bindings for the travel-journal backend

pub mod client;
pub mod config;
pub mod error;
pub mod locations;
pub mod photos;
pub mod responses;
pub mod trips;
pub mod types;

// Re-export key types for convenience
pub use client::TravelogClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use locations::LocationClient;
pub use photos::PhotoClient;
pub use responses::{LocationDetail, TripDetail};
pub use trips::TripClient;
pub use types::{
    CreateLocationRequest, CreateTripRequest, Location, Photo, Trip, UpdateTripRequest,
    UploadPhotoRequest,
};
