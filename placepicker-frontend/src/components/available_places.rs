use leptos::*;

use placepicker_core::{entities::place::Place, sort::sort_by_distance};
use placepicker_frontend_api::PlacesApi;

use crate::{
    components::{ErrorBlock, Places},
    geolocation,
};

const FETCH_FALLBACK_MESSAGE: &str = "Could not fetch places, please try again later.";

/// Catalog section: every place that can be picked, ordered by
/// distance from the user when geolocation is available.
#[component]
pub fn AvailablePlaces<F>(api: PlacesApi, on_select: F) -> impl IntoView
where
    F: Fn(Place) + 'static + Copy,
{
    // -- signals -- //

    let places = RwSignal::new(Vec::<Place>::new());
    let is_loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // -- actions -- //

    let api = store_value(api);
    let fetch_places = Action::new(move |()| async move {
        match api.get_value().available_places().await {
            Ok(fetched) => {
                let mut fetched: Vec<Place> = fetched.into_iter().map(Into::into).collect();
                // The catalog renders unsorted when the user denies
                // the position request.
                match geolocation::current_position().await {
                    Ok(origin) => sort_by_distance(&mut fetched, origin),
                    Err(err) => {
                        log::warn!("Unable to determine the current position: {err}");
                    }
                }
                places.set(fetched);
            }
            Err(err) => {
                log::error!("Unable to fetch the available places: {err}");
                error.set(Some(FETCH_FALLBACK_MESSAGE.to_string()));
            }
        }
        is_loading.set(false);
    });

    fetch_places.dispatch(());

    view! {
      <Show
        when=move || error.get().is_none()
        fallback=move || view! {
          <ErrorBlock
            title="An error occurred!"
            message=Signal::derive(move || error.get().unwrap_or_default())
          />
        }
      >
        <Places
          title="Available Places"
          fallback_text="No places available."
          loading_text="Fetching place data..."
          is_loading
          places
          on_select
        />
      </Show>
    }
}
