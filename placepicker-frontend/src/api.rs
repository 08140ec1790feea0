// Adapter between the REST client and the session's endpoint trait.

use async_trait::async_trait;

use placepicker_core::{
    endpoint::{PlacesEndpoint, TransportError},
    entities::place::Place,
};
use placepicker_frontend_api::{Error, PlacesApi};

/// Persistence endpoint backed by the remote REST API.
#[derive(Debug, Clone)]
pub struct RemoteEndpoint {
    api: PlacesApi,
}

impl RemoteEndpoint {
    #[must_use]
    pub const fn new(api: PlacesApi) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl PlacesEndpoint for RemoteEndpoint {
    async fn read_user_places(&self) -> Result<Vec<Place>, TransportError> {
        let places = self.api.user_places().await.map_err(into_transport_error)?;
        Ok(places.into_iter().map(Into::into).collect())
    }

    async fn write_user_places(&self, places: &[Place]) -> Result<(), TransportError> {
        let places: Vec<_> = places.iter().cloned().map(Into::into).collect();
        self.api
            .update_user_places(&places)
            .await
            .map_err(into_transport_error)?;
        Ok(())
    }
}

fn into_transport_error(err: Error) -> TransportError {
    match err {
        Error::Fetch(message) => TransportError::new(message),
        Error::Api(err) => TransportError::new(err.message),
    }
}
