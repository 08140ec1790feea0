use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Reference to the image that depicts a place.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Place {
    pub id    : String,
    pub title : String,
    pub lat   : f64,
    pub lng   : f64,
    pub image : Image,
}

/// Envelope wrapping every place collection on the wire.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlacesResponse {
    pub places: Vec<Place>,
}

/// Request body of `PUT /user-places`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UpdateUserPlacesRequest {
    pub places: Vec<Place>,
}

/// Response body of a successful update.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct UpdateResponse {
    pub message: String,
}

/// Error body returned by the REST API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error),
    error("{message}")
)]
pub struct Error {
    pub message: String,
}
