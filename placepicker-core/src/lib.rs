//! # placepicker-core
//!
//! The application logic of PlacePicker: the picked-places session with its
//! optimistic-update state machine, the persistence endpoint it talks to,
//! and the ordering of the catalog.
//!
//! Everything in this crate is UI-framework agnostic. A presentation layer
//! subscribes to session snapshots and invokes the session operations; the
//! durable copy of the picks lives behind the [`endpoint::PlacesEndpoint`]
//! trait.

pub mod endpoint;
pub mod session;
pub mod sort;

pub use placepicker_entities as entities;
