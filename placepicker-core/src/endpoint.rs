// Interface to the remote store that keeps the user's picks durable.
// The session never talks to the network directly; it only sees this
// trait and classifies its failures.

use async_trait::async_trait;
use thiserror::Error;

use placepicker_entities::place::Place;

/// Failure reported by the transport layer.
///
/// Carries an optional human-readable message; the session falls back
/// to a generic text when none is present.
#[derive(Debug, Default, Clone, Eq, PartialEq, Error)]
#[error("{}", .message.as_deref().unwrap_or("transport error"))]
pub struct TransportError {
    pub message: Option<String>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

type Result<T> = std::result::Result<T, TransportError>;

/// Remote store of the user's picked places.
///
/// Reads and writes always transfer the complete list, most recently
/// picked place first.
#[async_trait(?Send)]
pub trait PlacesEndpoint {
    async fn read_user_places(&self) -> Result<Vec<Place>>;

    async fn write_user_places(&self, places: &[Place]) -> Result<()>;
}
