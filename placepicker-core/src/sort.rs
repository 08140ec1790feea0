use std::cmp::Ordering;

use placepicker_entities::{
    geo::{Distance, MapPoint},
    place::Place,
};

pub trait Located {
    fn distance_from(&self, origin: MapPoint) -> Option<Distance>;
}

impl Located for Place {
    fn distance_from(&self, origin: MapPoint) -> Option<Distance> {
        MapPoint::distance(origin, self.pos)
    }
}

/// Order catalog places by their great-circle distance from `origin`,
/// closest first. Places without a comparable position sort last.
pub fn sort_by_distance(places: &mut [Place], origin: MapPoint) {
    places.sort_by(|a, b| {
        match (a.distance_from(origin), b.distance_from(origin)) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

#[cfg(test)]
mod tests {
    use placepicker_entities::place::Image;

    use super::*;

    fn new_place(id: &str, lat: f64, lng: f64) -> Place {
        Place {
            id: id.into(),
            title: id.to_uppercase(),
            image: Image {
                src: format!("{id}.jpg"),
                alt: id.into(),
            },
            pos: MapPoint::from_lat_lng_deg(lat, lng),
        }
    }

    #[test]
    fn sorts_closest_first() {
        let origin = MapPoint::from_lat_lng_deg(48.2082, 16.3738); // Vienna
        let mut places = vec![
            new_place("lisbon", 38.7223, -9.1393),
            new_place("graz", 47.0707, 15.4395),
            new_place("paris", 48.8566, 2.3522),
        ];
        sort_by_distance(&mut places, origin);
        let ids: Vec<_> = places.iter().map(|p| p.id.as_str().to_owned()).collect();
        assert_eq!(ids, ["graz", "paris", "lisbon"]);
    }

    #[test]
    fn sorting_is_stable_for_equal_positions() {
        let origin = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let mut places = vec![
            new_place("first", 10.0, 10.0),
            new_place("second", 10.0, 10.0),
        ];
        sort_by_distance(&mut places, origin);
        assert_eq!(places[0].id.as_str(), "first");
        assert_eq!(places[1].id.as_str(), "second");
    }
}
