use placepicker_entities as e;

use super::*;

impl From<e::place::Image> for Image {
    fn from(from: e::place::Image) -> Self {
        let e::place::Image { src, alt } = from;
        Self { src, alt }
    }
}

impl From<Image> for e::place::Image {
    fn from(from: Image) -> Self {
        let Image { src, alt } = from;
        Self { src, alt }
    }
}

impl From<e::place::Place> for Place {
    fn from(from: e::place::Place) -> Self {
        let e::place::Place {
            id,
            title,
            image,
            pos,
        } = from;
        Self {
            id: id.into(),
            title,
            lat: pos.lat(),
            lng: pos.lng(),
            image: image.into(),
        }
    }
}

impl From<Place> for e::place::Place {
    fn from(from: Place) -> Self {
        let Place {
            id,
            title,
            lat,
            lng,
            image,
        } = from;
        Self {
            id: id.into(),
            title,
            image: image.into(),
            pos: e::geo::MapPoint::from_lat_lng_deg(lat, lng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_to_entity_and_back() {
        let json = r#"{
            "id": "p1",
            "title": "Forest Waterfall",
            "lat": 44.5588,
            "lng": -80.344,
            "image": { "src": "forest-waterfall.jpg", "alt": "A tranquil forest" }
        }"#;
        let wire: Place = serde_json::from_str(json).unwrap();
        let entity = e::place::Place::from(wire.clone());
        assert_eq!(entity.id.as_str(), "p1");
        assert_eq!(entity.pos.lat(), 44.5588);
        assert_eq!(Place::from(entity), wire);
    }
}
