// The picked-places session: one explicitly constructed object per
// browser session, owning the list of picks and mediating between
// user-triggered operations and the persistence endpoint.
//
// Additions are optimistic (applied locally before the write resolves,
// rolled back on failure), removals are pessimistic (applied only after
// a successful write). The asymmetry is observable under slow networks
// and must stay.
//
// Writes are not serialized against each other: a pick may still be in
// flight while a removal is confirmed, and the last write to *resolve*
// wins. Known race window, see DESIGN.md.

use std::cell::RefCell;

use thiserror::Error;

use placepicker_entities::place::Place;

use crate::endpoint::PlacesEndpoint;

const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch user places";
const UPDATE_FALLBACK_MESSAGE: &str = "Failed to update places.";
const REMOVE_FALLBACK_MESSAGE: &str = "Failed to remove place.";

/// The initial fetch of the picked places failed.
///
/// Terminal for the session: the list view is replaced by an error
/// display and no retry is attempted.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct LoadError {
    pub message: String,
}

/// A pick or removal write failed.
///
/// Recoverable: surfaced to the user, dismissible, does not block
/// further operations. A newer failure silently replaces an
/// unacknowledged one.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct UpdateError {
    pub message: String,
}

/// Synchronization of the picked list with the persistence endpoint.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub enum LoadState {
    #[default]
    Uninitialized,
    Loading,
    Synced,
    Failed(LoadError),
}

/// Immutable view of the session state as handed to subscribers.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Snapshot {
    /// Picked places, most recently picked first, no duplicate ids.
    pub picked: Vec<Place>,
    pub load: LoadState,
    /// The place targeted for removal while the confirmation dialog
    /// is open.
    pub pending_removal: Option<Place>,
    pub update_error: Option<UpdateError>,
}

impl Snapshot {
    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub const fn removal_dialog_open(&self) -> bool {
        self.pending_removal.is_some()
    }
}

type Subscriber = Box<dyn Fn(&Snapshot)>;

/// The PickList controller.
pub struct PickSession<E> {
    endpoint: E,
    state: RefCell<Snapshot>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl<E> PickSession<E>
where
    E: PlacesEndpoint,
{
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            state: RefCell::new(Snapshot::default()),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Register a callback that observes every state change.
    pub fn subscribe(&self, subscriber: impl Fn(&Snapshot) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().clone()
    }

    /// Fetch the picked places from the endpoint once at startup.
    pub async fn load(&self) {
        self.mutate(|state| state.load = LoadState::Loading);
        match self.endpoint.read_user_places().await {
            Ok(places) => {
                log::debug!("Loaded {} picked places", places.len());
                self.mutate(|state| {
                    state.picked = places;
                    state.load = LoadState::Synced;
                });
            }
            Err(err) => {
                log::warn!("Unable to fetch the picked places: {err}");
                let message = err
                    .message
                    .unwrap_or_else(|| FETCH_FALLBACK_MESSAGE.to_string());
                self.mutate(|state| state.load = LoadState::Failed(LoadError { message }));
            }
        }
    }

    /// Add `place` to the top of the picked list.
    ///
    /// The list is updated locally before the write resolves; a failed
    /// write removes the place again and surfaces an [`UpdateError`].
    /// Picking an already picked place is a no-op and issues no write.
    pub async fn pick(&self, place: Place) {
        let updated = {
            let state = self.state.borrow();
            if state.picked.iter().any(|p| p.id == place.id) {
                log::debug!("Place {} is already picked", place.id);
                return;
            }
            let mut updated = Vec::with_capacity(state.picked.len() + 1);
            updated.push(place.clone());
            updated.extend(state.picked.iter().cloned());
            updated
        };
        self.mutate(|state| state.picked = updated.clone());
        if let Err(err) = self.endpoint.write_user_places(&updated).await {
            log::warn!("Unable to persist the pick of {}: {err}", place.id);
            let message = err
                .message
                .unwrap_or_else(|| UPDATE_FALLBACK_MESSAGE.to_string());
            self.mutate(|state| {
                // Filter the list as it is *now*, do not restore a
                // snapshot: picks that resolved meanwhile stay.
                state.picked.retain(|p| p.id != place.id);
                state.update_error = Some(UpdateError { message });
            });
        }
    }

    /// Target `place` for removal, which opens the confirmation dialog.
    pub fn request_removal(&self, place: Place) {
        self.mutate(|state| state.pending_removal = Some(place));
    }

    /// Close the confirmation dialog without removing anything.
    pub fn cancel_removal(&self) {
        self.mutate(|state| state.pending_removal = None);
    }

    /// Remove the place targeted by [`PickSession::request_removal`].
    ///
    /// The write is issued first and the list only updated on success;
    /// a failed write leaves the list untouched and surfaces an
    /// [`UpdateError`]. The dialog is closed either way.
    pub async fn confirm_removal(&self) {
        let (pending, updated) = {
            let state = self.state.borrow();
            let Some(pending) = state.pending_removal.clone() else {
                log::warn!("No removal pending");
                return;
            };
            let updated: Vec<_> = state
                .picked
                .iter()
                .filter(|p| p.id != pending.id)
                .cloned()
                .collect();
            (pending, updated)
        };
        match self.endpoint.write_user_places(&updated).await {
            Ok(()) => {
                self.mutate(|state| {
                    state.picked = updated;
                    state.pending_removal = None;
                });
            }
            Err(err) => {
                log::warn!("Unable to persist the removal of {}: {err}", pending.id);
                let message = err
                    .message
                    .unwrap_or_else(|| REMOVE_FALLBACK_MESSAGE.to_string());
                self.mutate(|state| {
                    state.update_error = Some(UpdateError { message });
                    state.pending_removal = None;
                });
            }
        }
    }

    /// Acknowledge the current [`UpdateError`]. Does not retry.
    pub fn dismiss_error(&self) {
        self.mutate(|state| state.update_error = None);
    }

    fn mutate(&self, f: impl FnOnce(&mut Snapshot)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(&snapshot);
        }
    }
}
