#[cfg(test)]
#[path = "../../../tests/unit/algorithms/dbscan/estimation_test.rs"]
mod estimation_test;

use crate::algorithms::dbscan::NeighborhoodIndex;
use crate::algorithms::geometry::Point;
use crate::utils::{Float, compare_floats, compare_floats_refs};
use std::cmp::Ordering;

/// Estimates DBSCAN epsilon parameter: builds a curve from sorted average
/// distances to the `min_points` nearest records and returns its max curvature
/// approximation as a guess for the optimal epsilon value.
pub fn estimate_epsilon(index: &NeighborhoodIndex, min_points: usize) -> Float {
    let distances = get_average_distances(index, min_points);
    let curve =
        distances.into_iter().enumerate().map(|(idx, distance)| Point::new(idx as Float, distance)).collect::<Vec<_>>();

    get_max_curvature(curve.as_slice())
}

/// Gets average distances to the nearest neighbors, sorted in ascending order.
fn get_average_distances(index: &NeighborhoodIndex, min_points: usize) -> Vec<Float> {
    let mut averages = (0..index.size())
        .map(|record_id| {
            let mut distances = index.distances(record_id).collect::<Vec<_>>();
            distances.sort_unstable_by(compare_floats_refs);

            let (sum, count) =
                distances.iter().take(min_points).fold((0., 0), |(sum, count), distance| (sum + distance, count + 1));

            if count == 0 { 0. } else { sum / count as Float }
        })
        .collect::<Vec<_>>();

    averages.sort_unstable_by(compare_floats_refs);
    averages.dedup_by(|a, b| compare_floats(*a, *b) == Ordering::Equal);

    averages
}

/// Gets max curvature approximation: for each point p on the curve, finds the
/// one with the maximum distance d to a line drawn from the first to the last
/// point of the curve.
fn get_max_curvature(values: &[Point]) -> Float {
    let (Some(first), Some(last)) = (values.first(), values.last()) else {
        return 0.;
    };

    values
        .iter()
        .fold((0., Float::MIN), |acc, point| {
            let distance = point.distance_to_line(first, last);

            if distance > acc.1 { (point.lon, distance) } else { acc }
        })
        .0
}
