use gloo_net::http::Request;

use placepicker_boundary::{Place, PlacesResponse, UpdateResponse, UpdateUserPlacesRequest};

use crate::{into_json, Result};

/// Client for the PlacePicker backend API.
///
/// All endpoints are public; there is no authentication.
#[derive(Debug, Clone)]
pub struct PlacesApi {
    url: String,
}

impl PlacesApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    /// All places that can be picked, in catalog order.
    pub async fn available_places(&self) -> Result<Vec<Place>> {
        let url = format!("{}/places", self.url);
        let response = Request::get(&url).send().await?;
        let PlacesResponse { places } = into_json(response).await?;
        Ok(places)
    }

    /// The user's current picks, most recently picked first.
    pub async fn user_places(&self) -> Result<Vec<Place>> {
        let url = format!("{}/user-places", self.url);
        let response = Request::get(&url).send().await?;
        let PlacesResponse { places } = into_json(response).await?;
        Ok(places)
    }

    /// Replace the stored picks with `places`.
    pub async fn update_user_places(&self, places: &[Place]) -> Result<UpdateResponse> {
        let url = format!("{}/user-places", self.url);
        let request = UpdateUserPlacesRequest {
            places: places.to_vec(),
        };
        let response = Request::put(&url).json(&request)?.send().await?;
        into_json(response).await
    }
}
