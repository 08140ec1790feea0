use crate::{geo::MapPoint, id::Id};

/// A catalog entry the user can pick.
///
/// Immutable once fetched from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    pub title: String,
    pub image: Image,
    pub pos: MapPoint,
}

/// Reference to the image that depicts a place.
///
/// The source is a path relative to the asset root of
/// the catalog server.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
}
