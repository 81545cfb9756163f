//! A collection of models to represent trip records and their clusters.

mod cluster;
pub use self::cluster::*;

mod record;
pub use self::record::*;
