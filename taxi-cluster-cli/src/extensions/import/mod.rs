//! Import logic for trip records in a delimited format.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/import_test.rs"]
mod import_test;

use serde::Deserialize;
use std::io::{BufReader, Read};
use taxi_cluster_core::prelude::*;

/// Specifies zero-based column positions of trip record fields within a
/// delimited row. Defaults match the 2009 yellow tripdata layout.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColumnMapping {
    /// A pickup timestamp column, passed through as an opaque identifier.
    pub pickup_time: usize,
    /// A trip distance column, payload only.
    pub trip_distance: usize,
    /// A pickup longitude column.
    pub pickup_lon: usize,
    /// A pickup latitude column.
    pub pickup_lat: usize,
    /// A dropoff longitude column, payload only.
    pub dropoff_lon: usize,
    /// A dropoff latitude column, payload only.
    pub dropoff_lat: usize,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self { pickup_time: 4, trip_distance: 7, pickup_lon: 8, pickup_lat: 9, dropoff_lon: 12, dropoff_lat: 13 }
    }
}

/// Reads trip records from a csv source, skipping the header row. The whole
/// load fails on the first missing or unparseable field, naming the offending
/// line and column, rather than substituting a default.
pub fn read_trips_csv<R: Read>(reader: BufReader<R>, columns: &ColumnMapping) -> GenericResult<Vec<TripRecord>> {
    let mut reader =
        csv::ReaderBuilder::new().has_headers(true).flexible(true).trim(csv::Trim::All).from_reader(reader);
    let mut trips = Vec::new();

    for (idx, entry) in reader.records().enumerate() {
        // one-based line position, next to the header row
        let line = idx + 2;
        let entry = entry.map_err(|err| GenericError::from(format!("cannot read trip record at line {line}: '{err}'")))?;

        let pickup = Point::new(
            parse_field(&entry, line, columns.pickup_lat, "pickup latitude")?,
            parse_field(&entry, line, columns.pickup_lon, "pickup longitude")?,
        );
        let dropoff = Point::new(
            parse_field(&entry, line, columns.dropoff_lat, "dropoff latitude")?,
            parse_field(&entry, line, columns.dropoff_lon, "dropoff longitude")?,
        );
        let distance = parse_field(&entry, line, columns.trip_distance, "trip distance")?;
        let pickup_time = get_field(&entry, line, columns.pickup_time, "pickup time")?.to_string();

        trips.push(TripRecord::new(pickup_time, pickup, dropoff, distance));
    }

    Ok(trips)
}

fn get_field<'a>(entry: &'a csv::StringRecord, line: usize, column: usize, name: &str) -> GenericResult<&'a str> {
    entry.get(column).ok_or_else(|| format!("missing {name} at line {line}, column {column}").into())
}

fn parse_field(entry: &csv::StringRecord, line: usize, column: usize, name: &str) -> GenericResult<Float> {
    get_field(entry, line, column, name)?
        .parse::<Float>()
        .map_err(|err| format!("cannot parse {name} at line {line}, column {column}: '{err}'").into())
}
