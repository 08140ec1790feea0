use leptos::*;

use placepicker_core::entities::place::Place;

use crate::DEFAULT_API_URL;

/// Titled grid of places. Shows the loading text while fetching and
/// the fallback text when there is nothing to render.
#[component]
pub fn Places<F>(
    title: &'static str,
    fallback_text: &'static str,
    loading_text: &'static str,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] places: Signal<Vec<Place>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(Place) + 'static + Copy,
{
    let memorized_places = create_memo(move |_| places.get());

    view! {
      <section class="places-category">
        <h2>{title}</h2>
        {move || {
            if is_loading.get() {
                view! { <p class="fallback-text">{loading_text}</p> }.into_view()
            } else if memorized_places.with(Vec::is_empty) {
                view! { <p class="fallback-text">{fallback_text}</p> }.into_view()
            } else {
                view! {
                  <ul class="places">
                    <For
                      each=move || memorized_places.get()
                      key=|place| place.id.clone()
                      children=move |place: Place| view! { <PlaceItem place on_select /> }
                    />
                  </ul>
                }
                .into_view()
            }
        }}
      </section>
    }
}

#[component]
fn PlaceItem<F>(place: Place, on_select: F) -> impl IntoView
where
    F: Fn(Place) + 'static + Copy,
{
    let image_url = format!("{}/{}", DEFAULT_API_URL, place.image.src);
    let image_alt = place.image.alt.clone();
    let title = place.title.clone();

    view! {
      <li class="place-item">
        <button on:click=move |_| on_select(place.clone())>
          <img src=image_url alt=image_alt />
          <h3>{title}</h3>
        </button>
      </li>
    }
}
