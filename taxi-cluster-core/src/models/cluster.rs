#[cfg(test)]
#[path = "../../tests/unit/models/cluster_test.rs"]
mod cluster_test;

use crate::algorithms::geometry::Point;
use crate::models::{RecordId, TripRecord};
use crate::utils::Float;

/// An ordered collection of density-connected trip records with a derived center.
#[derive(Clone, Debug)]
pub struct Cluster {
    label: usize,
    members: Vec<RecordId>,
    center: Option<Point>,
}

impl Cluster {
    /// Creates a new empty cluster with given label.
    pub(crate) fn new(label: usize) -> Self {
        Self { label, members: Vec::new(), center: None }
    }

    /// Returns a sequential label assigned in discovery order, starting at 1.
    pub fn label(&self) -> usize {
        self.label
    }

    /// Returns member record ids in absorption order, the seed record first.
    pub fn members(&self) -> &[RecordId] {
        self.members.as_slice()
    }

    /// Returns amount of members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Returns the mean of member pickup locations once it is finalized.
    pub fn center(&self) -> Option<&Point> {
        self.center.as_ref()
    }

    /// Appends a record to the membership list. First-assignment-wins semantics
    /// on the record side already prevent double addition.
    pub(crate) fn add_member(&mut self, record_id: RecordId) {
        self.members.push(record_id);
    }

    /// Computes the arithmetic mean of member pickup locations. Called exactly
    /// once, after the expansion completes.
    pub(crate) fn finalize_center(&mut self, records: &[TripRecord]) {
        let (lat, lon) = self.members.iter().fold((0., 0.), |(lat, lon), record_id| {
            let pickup = records[*record_id].pickup();
            (lat + pickup.lat, lon + pickup.lon)
        });
        let size = self.members.len() as Float;

        self.center = Some(Point::new(lat / size, lon / size));
    }
}
