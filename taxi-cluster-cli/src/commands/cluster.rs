#[cfg(test)]
#[path = "../../tests/unit/commands/cluster_test.rs"]
mod cluster_test;

use super::*;
use std::io::{BufReader, BufWriter};
use std::ops::Deref;
use taxi_cluster_cli::extensions::config::{ClusterSettings, create_settings_from_config_file};
use taxi_cluster_cli::extensions::export::{get_default_result_path, write_cluster_summary, write_noise_records};
use taxi_cluster_cli::extensions::import::{ColumnMapping, read_trips_csv};
use taxi_cluster_core::prelude::*;

pub const TRIPS_ARG_NAME: &str = "TRIPS";
pub const EPS_ARG_NAME: &str = "eps";
pub const MIN_POINTS_ARG_NAME: &str = "min-points";
pub const CONFIG_ARG_NAME: &str = "config";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";
pub const OUT_NOISE_ARG_NAME: &str = "out-noise";

pub fn get_cluster_app() -> Command {
    Command::new("taxi-cluster")
        .version("0.1")
        .about("Clusters taxi trip pickup locations using DBSCAN")
        .arg(Arg::new(TRIPS_ARG_NAME).help("Sets the trip records file to use").required(true).index(1))
        .arg(
            Arg::new(EPS_ARG_NAME)
                .help("Specifies the epsilon parameter. When omitted, it is estimated from the data")
                .short('e')
                .long(EPS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MIN_POINTS_ARG_NAME)
                .help("Specifies the minimum neighborhood size for a record to qualify as core")
                .short('m')
                .long(MIN_POINTS_ARG_NAME)
                .default_value("3")
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the file with a json configuration, overrides parameter args")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for a cluster summary")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_NOISE_ARG_NAME)
                .help("Specifies path to the file for records left as noise")
                .long(OUT_NOISE_ARG_NAME)
                .required(false),
        )
}

pub fn run_cluster(matches: &ArgMatches) -> Result<(), GenericError> {
    let logger = create_info_logger();

    let trips_path = matches.get_one::<String>(TRIPS_ARG_NAME).unwrap();
    let settings = get_settings(matches)?;

    let records = read_trips_csv(BufReader::new(open_file(trips_path, "trips")), &settings.columns)?;
    logger.deref()(&format!("read {} trip records from '{trips_path}'", records.len()));

    let timer = Timer::start();
    let clustering = create_trip_clusters(records, settings.min_points, settings.eps);
    logger.deref()(&format!(
        "discovered {} clusters and {} noise records using eps={}, min points={}, took {}ms",
        clustering.clusters.len(),
        clustering.noise().count(),
        clustering.eps,
        clustering.min_points,
        timer.elapsed_millis()
    ));

    let result_path =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).cloned().unwrap_or_else(|| get_default_result_path(&clustering));
    write_cluster_summary(BufWriter::new(create_file(result_path.as_str(), "result")), &clustering)?;
    logger.deref()(&format!("wrote cluster summary to '{result_path}'"));

    if let Some(noise_path) = matches.get_one::<String>(OUT_NOISE_ARG_NAME) {
        write_noise_records(BufWriter::new(create_file(noise_path, "noise")), &clustering)?;
        logger.deref()(&format!("wrote noise records to '{noise_path}'"));
    }

    Ok(())
}

fn get_settings(matches: &ArgMatches) -> Result<ClusterSettings, GenericError> {
    if let Some(config_path) = matches.get_one::<String>(CONFIG_ARG_NAME) {
        create_settings_from_config_file(BufReader::new(open_file(config_path, "config")))
    } else {
        let eps = parse_float_value::<Float>(matches, EPS_ARG_NAME, "epsilon")?;
        let min_points = parse_int_value::<usize>(matches, MIN_POINTS_ARG_NAME, "min points")?.unwrap_or(3);

        ClusterSettings::new(eps, min_points, ColumnMapping::default())
    }
}
