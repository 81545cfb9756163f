//! This module contains an implementation of Density-Based Spatial Clustering of Applications with
//! Noise (DBSCAN) over trip pickup locations.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/dbscan/dbscan_test.rs"]
mod dbscan_test;

mod estimation;
pub use self::estimation::estimate_epsilon;

mod neighborhood;
pub use self::neighborhood::NeighborhoodIndex;

use crate::models::{Cluster, PointState, RecordId, TripRecord};
use crate::utils::Float;
use rustc_hash::FxHashSet;

/// A result of a single clustering run: discovered clusters plus the record
/// universe with its final states, so that a result sink can report permanent
/// noise separately. There is no dedicated noise cluster.
pub struct Clustering {
    /// An epsilon value the run was performed with.
    pub eps: Float,
    /// A minimum neighborhood size the run was performed with.
    pub min_points: usize,
    /// Discovered clusters in discovery order.
    pub clusters: Vec<Cluster>,
    /// All records handed to the engine, in input order.
    pub records: Vec<TripRecord>,
}

impl Clustering {
    /// Iterates over records left as permanent noise.
    pub fn noise(&self) -> impl Iterator<Item = &TripRecord> + '_ {
        self.records.iter().filter(|record| record.state() == PointState::Noise)
    }
}

/// Creates clusters of trip records using DBSCAN algorithm. When no epsilon is
/// given, it is estimated from the distance distribution of the records.
pub fn create_trip_clusters(records: Vec<TripRecord>, min_points: usize, epsilon: Option<Float>) -> Clustering {
    let index = NeighborhoodIndex::new(records.as_slice());
    let eps = epsilon.unwrap_or_else(|| estimate_epsilon(&index, min_points));

    DbscanEngine { records, index, eps, min_points }.run()
}

/// Runs the DBSCAN algorithm over a fixed universe of trip records: iterates
/// records in input order, queries their neighborhoods, grows clusters via seed
/// set expansion and classifies unreachable records as noise. Deterministic for
/// a fixed input order and fixed parameters.
pub struct DbscanEngine {
    records: Vec<TripRecord>,
    index: NeighborhoodIndex,
    eps: Float,
    min_points: usize,
}

impl DbscanEngine {
    /// Creates a new instance of `DbscanEngine`. Parameters are not validated
    /// here: the parameter source must ensure `eps` is positive and
    /// `min_points` is at least 1 before calling in.
    pub fn new(records: Vec<TripRecord>, eps: Float, min_points: usize) -> Self {
        let index = NeighborhoodIndex::new(records.as_slice());
        Self { records, index, eps, min_points }
    }

    /// Runs the algorithm to completion, producing clusters labeled
    /// sequentially from 1 in discovery order.
    pub fn run(mut self) -> Clustering {
        let mut clusters: Vec<Cluster> = Vec::new();

        for record_id in 0..self.records.len() {
            if self.records[record_id].state().is_visited() {
                continue;
            }

            self.records[record_id].mark_visited();
            let neighbors = self.index.neighbors(record_id, self.eps).collect::<Vec<_>>();

            if neighbors.len() < self.min_points {
                // provisional: a later expansion may still absorb it as a border point
                self.records[record_id].mark_noise();
            } else {
                let mut cluster = Cluster::new(clusters.len() + 1);
                self.expand(record_id, neighbors, &mut cluster);
                cluster.finalize_center(self.records.as_slice());
                clusters.push(cluster);
            }
        }

        Clustering { eps: self.eps, min_points: self.min_points, clusters, records: self.records }
    }

    /// Grows the cluster from a core record over an append-only seed list: the
    /// cursor never revisits an index, while records satisfying the density
    /// threshold keep extending the list with their own neighborhoods.
    fn expand(&mut self, seed: RecordId, neighbors: Vec<RecordId>, cluster: &mut Cluster) {
        self.assign(seed, cluster);

        let mut seeds = neighbors;
        let mut seen = seeds.iter().copied().collect::<FxHashSet<_>>();

        let mut index = 0;
        while index < seeds.len() {
            let current = seeds[index];
            index += 1;

            // capture before the assignment below subsumes visitedness
            let first_visit = !self.records[current].state().is_visited();

            if !self.records[current].state().is_assigned() {
                self.assign(current, cluster);
            }

            if first_visit {
                let found = self.index.neighbors(current, self.eps).collect::<Vec<_>>();
                if found.len() >= self.min_points {
                    seeds.extend(found.into_iter().filter(|other| seen.insert(*other)));
                }
            }
        }
    }

    fn assign(&mut self, record_id: RecordId, cluster: &mut Cluster) {
        self.records[record_id].assign_to(cluster.label());
        cluster.add_member(record_id);
    }
}
