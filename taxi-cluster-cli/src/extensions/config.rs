//! Clustering run configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use crate::extensions::import::ColumnMapping;
use serde::Deserialize;
use std::io::{BufReader, Read};
use taxi_cluster_core::prelude::*;

/// A clustering run configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Specifies the epsilon parameter. Estimated from the data when omitted.
    pub eps: Option<Float>,
    /// Specifies the minimum neighborhood size.
    pub min_points: usize,
    /// Specifies input column positions.
    pub columns: Option<ColumnMapping>,
}

/// Resolved and validated clustering settings.
#[derive(Clone, Debug)]
pub struct ClusterSettings {
    /// An epsilon parameter, estimated from the data when not set.
    pub eps: Option<Float>,
    /// A minimum neighborhood size for a record to qualify as core.
    pub min_points: usize,
    /// Input column positions.
    pub columns: ColumnMapping,
}

impl ClusterSettings {
    /// Creates a new instance of `ClusterSettings`, rejecting degenerate
    /// parameter values before the engine is ever constructed.
    pub fn new(eps: Option<Float>, min_points: usize, columns: ColumnMapping) -> GenericResult<Self> {
        if let Some(eps) = eps {
            if !(eps > 0.) {
                return Err(format!("epsilon must be a positive value, got {eps}").into());
            }
        }

        if min_points < 1 {
            return Err(format!("min points must be at least 1, got {min_points}").into());
        }

        Ok(Self { eps, min_points, columns })
    }
}

/// Reads config from a reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates settings from a config file.
pub fn create_settings_from_config_file<R: Read>(reader: BufReader<R>) -> GenericResult<ClusterSettings> {
    read_config(reader)
        .and_then(|config| ClusterSettings::new(config.eps, config.min_points, config.columns.unwrap_or_default()))
}
