use super::*;
use crate::helpers::create_trips;

fn run_engine(coords: &[(Float, Float)], eps: Float, min_points: usize) -> Clustering {
    DbscanEngine::new(create_trips(coords), eps, min_points).run()
}

fn assert_close(actual: Float, expected: Float) {
    assert!((actual - expected).abs() < 1E-9, "{actual} is not close to {expected}");
}

#[test]
fn can_mark_isolated_records_as_noise() {
    let clustering = run_engine(&[(0., 0.), (100., 0.), (0., 100.), (100., 100.)], 10., 2);

    assert!(clustering.clusters.is_empty());
    assert_eq!(clustering.noise().count(), 4);
    assert!(clustering.records.iter().all(|record| record.state() == PointState::Noise));
}

#[test]
fn can_cluster_tight_group_without_noise() {
    let clustering = run_engine(&[(0., 0.), (0.1, 0.), (0., 0.1), (0.1, 0.1), (0.05, 0.05)], 1., 3);

    assert_eq!(clustering.clusters.len(), 1);
    assert_eq!(clustering.noise().count(), 0);

    let cluster = &clustering.clusters[0];
    assert_eq!(cluster.label(), 1);
    assert_eq!(cluster.size(), 5);

    let center = cluster.center().expect("center is not finalized");
    assert_close(center.lat, 0.05);
    assert_close(center.lon, 0.05);
}

#[test]
fn can_absorb_border_point_and_keep_permanent_noise() {
    // a dense triangle, a border record reachable from one vertex only, an outlier
    let clustering = run_engine(&[(0., 0.), (1., 0.), (0.5, 0.8), (0.5, 1.7), (10., 10.)], 1., 3);

    assert_eq!(clustering.clusters.len(), 1);
    // the vertex at (0.5, 0.8) is the only core record, hence the seed
    assert_eq!(clustering.clusters[0].members(), &[2, 0, 1, 3]);

    assert_eq!(clustering.noise().count(), 1);
    assert_eq!(clustering.records[4].state(), PointState::Noise);
    // records classified as noise by the outer loop were absorbed as border points
    assert_eq!(clustering.records[0].state(), PointState::Assigned(1));
    assert_eq!(clustering.records[1].state(), PointState::Assigned(1));
}

#[test]
fn can_keep_first_assignment_for_shared_border_point() {
    let clustering = run_engine(
        &[
            (0., 0.),
            (1., 0.),
            (0., 1.),
            (1., 1.), // first group
            (3., 0.), // a border record within eps of core records in both groups
            (5., 0.),
            (6., 0.),
            (5., 1.),
            (6., 1.), // second group
        ],
        2.,
        3,
    );

    assert_eq!(clustering.clusters.len(), 2);
    assert!(clustering.clusters[0].members().contains(&4));
    assert!(!clustering.clusters[1].members().contains(&4));
    assert_eq!(clustering.records[4].state(), PointState::Assigned(1));
    assert_eq!(clustering.noise().count(), 0);
}

#[test]
fn can_produce_deterministic_results() {
    let coords = [(0., 0.), (0.5, 0.), (0., 0.5), (5., 5.), (5.5, 5.), (5., 5.5), (20., 20.)];

    let first = run_engine(&coords, 1., 2);
    let second = run_engine(&coords, 1., 2);

    assert_eq!(first.clusters.len(), second.clusters.len());
    first.clusters.iter().zip(second.clusters.iter()).for_each(|(a, b)| {
        assert_eq!(a.label(), b.label());
        assert_eq!(a.members(), b.members());
        assert_eq!(a.center(), b.center());
    });
    assert_eq!(
        first.records.iter().map(|record| record.state()).collect::<Vec<_>>(),
        second.records.iter().map(|record| record.state()).collect::<Vec<_>>()
    );
}

#[test]
fn can_produce_valid_partition_with_dense_seeds() {
    let clustering = run_engine(
        &[(0., 0.), (1., 0.), (0., 1.), (1., 1.), (3., 0.), (5., 0.), (6., 0.), (5., 1.), (6., 1.), (20., 20.)],
        2.,
        3,
    );
    let index = NeighborhoodIndex::new(clustering.records.as_slice());

    let mut seen = vec![false; clustering.records.len()];
    clustering.clusters.iter().enumerate().for_each(|(idx, cluster)| {
        assert_eq!(cluster.label(), idx + 1);
        // the record which seeded the cluster satisfies the density threshold
        assert!(index.neighbors(cluster.members()[0], clustering.eps).count() >= clustering.min_points);

        cluster.members().iter().for_each(|&record_id| {
            assert!(!seen[record_id], "record {record_id} belongs to more than one cluster");
            seen[record_id] = true;
            assert_eq!(clustering.records[record_id].state(), PointState::Assigned(cluster.label()));
        });
    });

    clustering
        .records
        .iter()
        .enumerate()
        .filter(|(record_id, _)| !seen[*record_id])
        .for_each(|(_, record)| assert_eq!(record.state(), PointState::Noise));
}

#[test]
fn can_merge_clusters_as_eps_grows() {
    let coords = [(0., 0.), (1., 0.), (0., 1.), (6., 0.), (7., 0.), (6., 1.)];

    let small = run_engine(&coords, 1.5, 2);
    let large = run_engine(&coords, 10., 2);

    assert_eq!(small.clusters.len(), 2);
    assert_eq!(large.clusters.len(), 1);
    assert_eq!(large.clusters[0].size(), 6);
}

#[test]
fn can_create_clusters_with_estimated_epsilon() {
    let records = create_trips(&[(0., 0.), (1., 0.), (0., 1.), (10., 10.), (11., 10.), (10., 11.)]);

    let clustering = create_trip_clusters(records, 2, None);

    assert_eq!(clustering.eps, 1.);
    assert_eq!(clustering.clusters.len(), 2);
    assert_eq!(clustering.noise().count(), 0);
}
