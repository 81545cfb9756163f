#[cfg(test)]
#[path = "../../../tests/unit/algorithms/dbscan/neighborhood_test.rs"]
mod neighborhood_test;

use crate::models::{RecordId, TripRecord};
use crate::utils::{Float, parallel_collect};

/// Answers the region query "all records within eps of a given record" over a
/// fixed universe. Distance rows are computed eagerly for every record by an
/// exhaustive scan, so a query is a filter over one row which preserves the
/// original universe order. A substitute with better asymptotics (grid, k-d
/// tree) has to keep the inclusive `<= eps` boundary semantics.
pub struct NeighborhoodIndex {
    rows: Vec<Vec<(RecordId, Float)>>,
}

impl NeighborhoodIndex {
    /// Creates a new instance of `NeighborhoodIndex` from record pickup
    /// locations. Row computation only reads locations, hence it is spread over
    /// worker threads before the engine starts its sequential mutation phase.
    pub fn new(records: &[TripRecord]) -> Self {
        let ids = (0..records.len()).collect::<Vec<_>>();
        let rows = parallel_collect(ids.as_slice(), |center| {
            let pickup = records[*center].pickup();
            records
                .iter()
                .enumerate()
                // exclude the center itself by identity, not by value
                .filter(|(other, _)| other != center)
                .map(|(other, record)| (other, pickup.distance_to_point(record.pickup())))
                .collect::<Vec<_>>()
        });

        Self { rows }
    }

    /// Returns ids of records within `eps` (inclusive) of the record with given
    /// id, in universe order.
    pub fn neighbors(&self, record_id: RecordId, eps: Float) -> impl Iterator<Item = RecordId> + '_ {
        self.rows[record_id].iter().filter(move |(_, distance)| *distance <= eps).map(|(record_id, _)| *record_id)
    }

    /// Returns distances from the record with given id to all other records, in
    /// universe order.
    pub fn distances(&self, record_id: RecordId) -> impl Iterator<Item = Float> + '_ {
        self.rows[record_id].iter().map(|(_, distance)| *distance)
    }

    /// Returns amount of indexed records.
    pub fn size(&self) -> usize {
        self.rows.len()
    }
}
