use std::rc::Rc;

use leptos::*;

use placepicker_core::{
    entities::place::Place,
    session::{LoadState, PickSession},
};
use placepicker_frontend_api::PlacesApi;

mod api;
use api::RemoteEndpoint;

mod components;
use components::*;

mod geolocation;

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- session -- //

    let api = PlacesApi::new(DEFAULT_API_URL.to_string());
    let session = Rc::new(PickSession::new(RemoteEndpoint::new(api.clone())));

    // -- signals -- //

    let snapshot = RwSignal::new(session.snapshot());
    session.subscribe(move |s| snapshot.set(s.clone()));
    let session = store_value(session);

    let picked = Signal::derive(move || snapshot.with(|s| s.picked.clone()));
    let is_fetching = Signal::derive(move || snapshot.with(|s| s.is_loading()));
    let load_error = Signal::derive(move || {
        snapshot.with(|s| match &s.load {
            LoadState::Failed(err) => Some(err.message.clone()),
            _ => None,
        })
    });
    let removal_dialog_open = Signal::derive(move || snapshot.with(|s| s.removal_dialog_open()));
    let update_error =
        Signal::derive(move || snapshot.with(|s| s.update_error.as_ref().map(|e| e.message.clone())));

    // -- actions -- //

    let load_picked = Action::new(move |()| {
        let session = session.get_value();
        async move { session.load().await }
    });

    let pick_place = Action::new(move |place: &Place| {
        let session = session.get_value();
        let place = place.clone();
        async move { session.pick(place).await }
    });

    let confirm_removal = Action::new(move |()| {
        let session = session.get_value();
        async move { session.confirm_removal().await }
    });

    // -- callbacks -- //

    let on_select = move |place: Place| {
        pick_place.dispatch(place);
    };
    let on_start_removal = move |place: Place| session.with_value(|s| s.request_removal(place));
    let on_cancel_removal = move || session.with_value(|s| s.cancel_removal());
    let on_confirm_removal = move || {
        confirm_removal.dispatch(());
    };
    let on_dismiss_error = move || session.with_value(|s| s.dismiss_error());

    // -- init session -- //

    load_picked.dispatch(());

    view! {
      <Modal open=Signal::derive(move || update_error.get().is_some()) on_close=on_dismiss_error>
        <ErrorBlock
          title="An error occurred!"
          message=Signal::derive(move || {
              update_error.get().unwrap_or_else(|| "An unknown error occurred.".to_string())
          })
          on_confirm=Callback::new(move |()| on_dismiss_error())
        />
      </Modal>

      <Modal open=removal_dialog_open on_close=on_cancel_removal>
        <DeleteConfirmation on_cancel=on_cancel_removal on_confirm=on_confirm_removal />
      </Modal>

      <header>
        <img src="logo.svg" alt="Stylized globe" />
        <h1>"PlacePicker"</h1>
        <p>
          "Create your personal collection of places you would like to visit or you have visited."
        </p>
      </header>
      <main>
        <Show
          when=move || load_error.get().is_none()
          fallback=move || view! {
            <ErrorBlock
              title="An error occurred!"
              message=Signal::derive(move || load_error.get().unwrap_or_default())
            />
          }
        >
          <Places
            title="I'd like to visit ..."
            fallback_text="Select the places you would like to visit below."
            loading_text="Fetching your places...."
            is_loading=is_fetching
            places=picked
            on_select=on_start_removal
          />
        </Show>

        <AvailablePlaces api=api.clone() on_select />
      </main>
    }
}
