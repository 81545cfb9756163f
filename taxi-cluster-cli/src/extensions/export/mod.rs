//! Export logic to write clustering results.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/export/export_test.rs"]
mod export_test;

use std::io::{BufWriter, Write};
use taxi_cluster_core::prelude::*;

/// Returns a default result file name with the clustering parameters embedded.
pub fn get_default_result_path(clustering: &Clustering) -> String {
    format!("trip-clusters-{:.5}-{}.csv", clustering.eps, clustering.min_points)
}

/// Writes a summary line per cluster: label, size and centroid coordinates.
pub fn write_cluster_summary<W: Write>(writer: BufWriter<W>, clustering: &Clustering) -> GenericResult<()> {
    let mut writer = writer;

    writer.write_all("cluster,size,center_lat,center_lon\n".as_bytes())?;
    for cluster in clustering.clusters.iter() {
        let center = cluster.center().ok_or_else(|| GenericError::from("cluster center is not finalized"))?;
        writer.write_all(
            format!("{},{},{:.6},{:.6}\n", cluster.label(), cluster.size(), center.lat, center.lon).as_bytes(),
        )?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes records left as permanent noise: pickup time and coordinates.
pub fn write_noise_records<W: Write>(writer: BufWriter<W>, clustering: &Clustering) -> GenericResult<()> {
    let mut writer = writer;

    writer.write_all("pickup_time,pickup_lat,pickup_lon\n".as_bytes())?;
    for record in clustering.noise() {
        let pickup = record.pickup();
        writer.write_all(format!("{},{:.6},{:.6}\n", record.pickup_time(), pickup.lat, pickup.lon).as_bytes())?;
    }
    writer.flush()?;

    Ok(())
}
