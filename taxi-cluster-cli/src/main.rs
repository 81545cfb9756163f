//! A command line interface to cluster taxi trip pickup locations.
//!

mod commands;

use crate::commands::cluster::{get_cluster_app, run_cluster};
use std::process;

fn main() {
    let matches = get_cluster_app().get_matches();

    if let Err(err) = run_cluster(&matches) {
        eprintln!("cannot cluster trip records: '{err}'");
        process::exit(1);
    }
}
