use std::fmt;

const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MAX: f64 = 180.0;

/// Geographical position with latitude and longitude in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    /// Build a point from degrees.
    ///
    /// The caller is responsible for passing coordinates within
    /// the valid range, see [`MapPoint::try_from_lat_lng_deg`].
    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        let res = Self { lat, lng };
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let res = Self { lat, lng };
        res.is_valid().then_some(res)
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.abs() <= LAT_DEG_MAX && self.lng.abs() <= LNG_DEG_MAX
    }

    /// Calculate the great-circle distance on the surface
    /// of the earth using a special case of the Vincenty
    /// formula for numerical accuracy.
    /// Reference: https://en.wikipedia.org/wiki/Great-circle_distance
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let (lat1_rad, lng1_rad) = (p1.lat.to_radians(), p1.lng.to_radians());
        let (lat2_rad, lng2_rad) = (p2.lat.to_radians(), p2.lng.to_radians());

        let (lat1_sin, lat1_cos) = lat1_rad.sin_cos();
        let (lat2_sin, lat2_cos) = lat2_rad.sin_cos();

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = dlng.sin_cos();

        let nominator = ((lat2_cos * dlng_sin).powi(2)
            + (lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos).powi(2))
        .sqrt();
        let denominator = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;
        let central_angle = nominator.atan2(denominator);

        Some(Distance::from_meters(
            central_angle * MEAN_EARTH_RADIUS.to_meters(),
        ))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Distance in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_and_longitude_bounds() {
        assert!(MapPoint::try_from_lat_lng_deg(90.0, 180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, -180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(90.1, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.1).is_none());
    }

    #[test]
    fn distance_of_identical_points_is_zero() {
        let p = MapPoint::from_lat_lng_deg(48.7755, 9.1827);
        assert_eq!(MapPoint::distance(p, p), Some(Distance::from_meters(0.0)));
    }

    #[test]
    fn distance_is_symmetric() {
        let berlin = MapPoint::from_lat_lng_deg(52.52, 13.405);
        let hamburg = MapPoint::from_lat_lng_deg(53.5511, 9.9937);
        assert_eq!(
            MapPoint::distance(berlin, hamburg),
            MapPoint::distance(hamburg, berlin)
        );
    }

    #[test]
    fn distance_between_berlin_and_hamburg() {
        let berlin = MapPoint::from_lat_lng_deg(52.52, 13.405);
        let hamburg = MapPoint::from_lat_lng_deg(53.5511, 9.9937);
        let d = MapPoint::distance(berlin, hamburg).unwrap();
        assert!(d > Distance::from_meters(250_000.0));
        assert!(d < Distance::from_meters(260_000.0));
    }

    #[test]
    fn distance_with_invalid_coordinates() {
        let valid = MapPoint::from_lat_lng_deg(52.52, 13.405);
        let invalid = MapPoint {
            lat: 91.0,
            lng: 0.0,
        };
        assert_eq!(MapPoint::distance(valid, invalid), None);
        assert_eq!(MapPoint::distance(invalid, valid), None);
    }
}
