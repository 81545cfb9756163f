#[cfg(test)]
#[path = "../../tests/unit/models/record_test.rs"]
mod record_test;

use crate::algorithms::geometry::Point;
use crate::utils::Float;

/// An index of a trip record within the universe handed to the engine.
pub type RecordId = usize;

/// Represents a clustering state of a single trip record. Transitions only move
/// forward: an unvisited record becomes visited, a visited record becomes noise
/// or gets assigned, and a noise record may still be absorbed by a cluster as a
/// border point. An assigned record never changes its cluster.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointState {
    /// Never selected as a query center.
    Unvisited,
    /// Selected as a query center, classification pending.
    Visited,
    /// Visited with a neighborhood below the density threshold.
    Noise,
    /// Belongs to the cluster with given label.
    Assigned(usize),
}

impl PointState {
    /// Checks whether the record was resolved as a query center or absorbed by a cluster.
    pub fn is_visited(&self) -> bool {
        !matches!(self, PointState::Unvisited)
    }

    /// Checks whether the record belongs to some cluster.
    pub fn is_assigned(&self) -> bool {
        matches!(self, PointState::Assigned(_))
    }
}

/// Represents one input observation to be clustered: a pickup location used for
/// spatial comparison plus payload fields which are passed through untouched
/// and excluded from the clustering decision.
#[derive(Clone, Debug)]
pub struct TripRecord {
    pickup_time: String,
    pickup: Point,
    dropoff: Point,
    distance: Float,
    state: PointState,
}

impl TripRecord {
    /// Creates a new unvisited instance of `TripRecord`.
    pub fn new(pickup_time: String, pickup: Point, dropoff: Point, distance: Float) -> Self {
        Self { pickup_time, pickup, dropoff, distance, state: PointState::Unvisited }
    }

    /// Returns the pickup location used for spatial comparison.
    pub fn pickup(&self) -> &Point {
        &self.pickup
    }

    /// Returns the pickup timestamp payload.
    pub fn pickup_time(&self) -> &str {
        self.pickup_time.as_str()
    }

    /// Returns the dropoff location payload.
    pub fn dropoff(&self) -> &Point {
        &self.dropoff
    }

    /// Returns the trip distance payload.
    pub fn distance(&self) -> Float {
        self.distance
    }

    /// Returns the current clustering state.
    pub fn state(&self) -> PointState {
        self.state
    }

    /// Marks the record as visited. Has no effect when it is already visited.
    pub fn mark_visited(&mut self) {
        if self.state == PointState::Unvisited {
            self.state = PointState::Visited;
        }
    }

    /// Marks a visited, unassigned record as noise. The classification is
    /// provisional: a later cluster expansion may still absorb the record.
    pub fn mark_noise(&mut self) {
        if self.state == PointState::Visited {
            self.state = PointState::Noise;
        }
    }

    /// Assigns the record to the cluster with given label. An attempt to move a
    /// record between clusters signals a broken expansion invariant and panics.
    pub fn assign_to(&mut self, label: usize) {
        match self.state {
            PointState::Assigned(existing) if existing != label => {
                unreachable!("record is already assigned to cluster {existing}, cannot reassign to {label}")
            }
            _ => self.state = PointState::Assigned(label),
        }
    }
}
