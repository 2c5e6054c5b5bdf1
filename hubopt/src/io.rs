//! scenario file reading.
//!
//! A scenario is a whitespace separated text file :
//! - a header of three integers : number of cities N, number of roads E, number of
//!   hubs P to place,
//! - then an N x N matrix of road lengths, row by row, where -1 stands for
//!   "no direct road" and is translated to Unreachable before the solver sees it.
//!
//! Ranges are validated here : N >= 1, E >= 0, 1 <= P <= N. The solver crate caps N
//! on its side.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use pmedian::prelude::*;

/// a problem instance as read from a scenario file
pub struct Scenario {
    //
    nb_cities: usize,
    //
    nb_edges: usize,
    //
    nb_hubs: usize,
    //
    matrix: DistanceMatrix<i64>,
} // end of struct Scenario

impl Scenario {
    /// return number of cities
    pub fn get_nb_cities(&self) -> usize {
        self.nb_cities
    }

    /// number of roads declared in the header. Informational, the matrix is
    /// authoritative
    pub fn get_nb_edges(&self) -> usize {
        self.nb_edges
    }

    /// number of hubs to place
    pub fn get_nb_hubs(&self) -> usize {
        self.nb_hubs
    }

    /// give up the matrix for the solve stages
    pub fn into_matrix(self) -> DistanceMatrix<i64> {
        self.matrix
    }
} // end of impl block Scenario

// next integer token or a parse error naming what was expected
fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<i64> {
    let token = match tokens.next() {
        Some(t) => t,
        None => bail!("scenario file truncated, expected {}", what),
    };
    let value = token
        .parse::<i64>()
        .with_context(|| format!("expected an integer for {}, got : {}", what, token))?;
    Ok(value)
} // end of next_int

/// read and validate a scenario file
pub fn read_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario> {
    //
    let mut file = File::open(path.as_ref())
        .with_context(|| format!("cannot open scenario file {:?}", path.as_ref()))?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    let mut tokens = content.split_whitespace();
    //
    let nb_cities = next_int(&mut tokens, "the number of cities")?;
    let nb_edges = next_int(&mut tokens, "the number of roads")?;
    let nb_hubs = next_int(&mut tokens, "the number of hubs")?;
    if nb_cities < 1 || nb_edges < 0 || nb_hubs < 1 || nb_hubs > nb_cities {
        bail!(
            "invalid values in scenario header : N = {}, E = {}, P = {}",
            nb_cities,
            nb_edges,
            nb_hubs
        );
    }
    // checked before allocating anything sized from N
    if nb_cities > MAX_CITIES as i64 {
        bail!(
            "{} cities, the exhaustive sweep is capped at {}",
            nb_cities,
            MAX_CITIES
        );
    }
    let nb_cities = nb_cities as usize;
    //
    let mut rows = Vec::<Vec<Dist<i64>>>::with_capacity(nb_cities);
    for i in 0..nb_cities {
        let mut row = Vec::<Dist<i64>>::with_capacity(nb_cities);
        for j in 0..nb_cities {
            let raw = next_int(&mut tokens, &format!("matrix entry ({},{})", i, j))?;
            if raw == -1 {
                row.push(Dist::Unreachable);
            } else {
                // from_rows refuses other negative values
                row.push(Dist::Finite(raw));
            }
        }
        rows.push(row);
    }
    let matrix = DistanceMatrix::from_rows(&rows)?;
    //
    log::info!(
        "scenario read : {} cities, {} roads, {} hubs to place",
        nb_cities,
        nb_edges,
        nb_hubs
    );
    //
    Ok(Scenario {
        nb_cities,
        nb_edges: nb_edges as usize,
        nb_hubs: nb_hubs as usize,
        matrix,
    })
} // end of read_scenario

// end of mod tests
