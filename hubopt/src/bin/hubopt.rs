//! Exact hub placement on a scenario file.
//!
//! usage : hubopt --scenario sc1.txt \[--hubs P\] \[--dump\]
//!
//! The scenario format is described in [io](hubopt::io). The binary closes the
//! distance matrix, sweeps every hub subset and prints the best locations (cities are
//! numbered from 1 in the report, as in the scenario files) with the minimal total
//! cost. --dump also writes the city to hub assignment in a csv file.

use clap::{Arg, ArgAction, Command};

use cpu_time::ProcessTime;
use std::time::SystemTime;

use hubopt::io::read_scenario;
use pmedian::prelude::*;

pub fn main() {
    //
    let _ = env_logger::builder().is_test(true).try_init();
    //
    log::info!("\n\n running hubopt \n ==========================");
    //
    let matches = Command::new("hubopt")
        .arg_required_else_help(true)
        .arg(
            Arg::new("scenario")
                .required(true)
                .long("scenario")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("expecting a scenario file name"),
        )
        .arg(
            Arg::new("hubs")
                .long("hubs")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("override the number of hubs given in the scenario file"),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .action(ArgAction::SetTrue)
                .help("dump the city to hub assignment in a csv file"),
        )
        .get_matches();
    //
    let scenario_file = matches.get_one::<String>("scenario").expect("");
    let scenario = match read_scenario(scenario_file) {
        Ok(s) => s,
        Err(e) => {
            log::error!("cannot read scenario {} : {:?}", scenario_file, e);
            std::process::exit(1);
        }
    };
    let nb_hubs = match matches.get_one::<usize>("hubs") {
        Some(p) => *p,
        None => scenario.get_nb_hubs(),
    };
    log::info!(
        "placing {} hubs among {} cities ({} roads declared)",
        nb_hubs,
        scenario.get_nb_cities(),
        scenario.get_nb_edges()
    );
    //
    let cpu_start = ProcessTime::now();
    let sys_now = SystemTime::now();
    //
    let mut matrix = scenario.into_matrix();
    shortest_paths(&mut matrix);
    matrix.log_quantiles();
    log::info!(
        " shortest path closure sys time(ms) {:?} cpu time(ms) {:?}",
        sys_now.elapsed().unwrap().as_millis(),
        cpu_start.elapsed().as_millis()
    );
    //
    let selector = match HubSelector::new(&matrix, nb_hubs) {
        Ok(s) => s,
        Err(e) => {
            log::error!("invalid parameters : {:?}", e);
            std::process::exit(1);
        }
    };
    match selector.select() {
        Some(selection) => {
            println!("best locations for the distribution hubs :");
            for city in selection.get_hubs() {
                println!("city {}", city + 1);
            }
            println!("minimal total cost : {}", selection.get_cost());
            //
            if matches.get_flag("dump") {
                let assignments = selector.dispatch(&selection);
                if let Err(e) = dump_assignments(&assignments) {
                    log::error!("assignment dump failed : {:?}", e);
                }
            }
        }
        None => {
            println!("no valid hub combination found");
        }
    }
    //
    log::info!(
        "\n hubopt sys time(ms) {:?} cpu time(ms) {:?}",
        sys_now.elapsed().unwrap().as_millis(),
        cpu_start.elapsed().as_millis()
    );
} // end of main
