#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/point_test.rs"]
mod point_test;

use crate::utils::Float;

/// Represents a coordinate in 2D space. Immutable once constructed; non finite
/// values are not validated here and simply propagate through the distance math.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// Latitude value.
    pub lat: Float,
    /// Longitude value.
    pub lon: Float,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(lat: Float, lon: Float) -> Self {
        Self { lat, lon }
    }

    /// Computes euclidean distance from given point to `other`.
    pub fn distance_to_point(&self, other: &Point) -> Float {
        let delta_lat = self.lat - other.lat;
        let delta_lon = self.lon - other.lon;

        (delta_lat * delta_lat + delta_lon * delta_lon).sqrt()
    }

    /// Computes distance from line, drawn by points a and b, to the point.
    pub fn distance_to_line(&self, a: &Point, b: &Point) -> Float {
        let a_b_distance = a.distance_to_point(b);

        if a_b_distance == 0. { 0. } else { (Self::cross_product(a, b, self) / a_b_distance).abs() }
    }

    /// Computes the cross product AB x AC.
    fn cross_product(a: &Point, b: &Point, c: &Point) -> Float {
        let ab_lat = b.lat - a.lat;
        let ab_lon = b.lon - a.lon;
        let ac_lat = c.lat - a.lat;
        let ac_lon = c.lon - a.lon;

        ab_lat * ac_lon - ab_lon * ac_lat
    }
}
