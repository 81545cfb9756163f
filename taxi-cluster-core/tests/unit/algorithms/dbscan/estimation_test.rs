use super::*;
use crate::helpers::create_trips;

#[test]
fn can_estimate_epsilon_from_distance_curve() {
    let records = create_trips(&[(0., 0.), (1., 0.), (0., 1.), (10., 10.), (11., 10.), (10., 11.)]);
    let index = NeighborhoodIndex::new(records.as_slice());

    assert_eq!(estimate_epsilon(&index, 2), 1.);
}

#[test]
fn can_estimate_epsilon_for_empty_universe() {
    let index = NeighborhoodIndex::new(&[]);

    assert_eq!(estimate_epsilon(&index, 3), 0.);
}

#[test]
fn can_get_max_curvature() {
    let values = [Point::new(0., 0.), Point::new(1., 0.5), Point::new(2., 4.2), Point::new(3., 4.5)];

    assert_eq!(get_max_curvature(&values), 4.2);
}
