//! exhaustive hub placement over a closed distance matrix.
//!
//! Every subset of exactly nb_hubs cities is a candidate; the cost of a candidate is
//! the sum over all cities of the distance to their nearest hub, a city unreachable
//! from every hub contributing nothing. Subsets are enumerated as bitmasks over
//! 0..2^N, masks whose popcount differs from nb_hubs are skipped.
//! With ties broken toward the smallest mask the optimum is unique, which lets the
//! sweep run on the rayon pool and reduce thread local bests by minimum over the
//! (cost, mask) pair without changing the winner.

use std::io::Write;

use anyhow::{Result, bail};
use num_traits::{CheckedAdd, PrimInt};
use rayon::prelude::*;

use cpu_time::ProcessTime;
use std::time::SystemTime;

use crate::distance::Dist;
use crate::matrix::DistanceMatrix;

/// below this number of cities the sweep is cheaper sequentially than on the pool
const PARALLEL_THRESHOLD: usize = 16;

/// An optimal placement: the selected hub cities in increasing index order, the total
/// assignment cost and the subset mask that won the sweep.
#[derive(Clone, Debug)]
pub struct HubSelection<W: PrimInt> {
    hubs: Vec<usize>,
    cost: W,
    mask: u64,
} // end of struct HubSelection

impl<W: PrimInt> HubSelection<W> {
    /// selected hub cities, increasing indices
    pub fn get_hubs(&self) -> &Vec<usize> {
        &self.hubs
    }

    /// total assignment cost of the selection
    pub fn get_cost(&self) -> W {
        self.cost
    }

    /// the winning subset encoded as a bitmask
    pub fn get_mask(&self) -> u64 {
        self.mask
    }
} // end of impl block HubSelection

/// a city affected to its nearest hub. hub is None for a city no hub can reach.
#[derive(Clone, Debug)]
pub struct Assignment<W: PrimInt> {
    city: usize,
    hub: Option<usize>,
    dist: Dist<W>,
} // end of struct Assignment

impl<W: PrimInt> Assignment<W> {
    pub fn get_city(&self) -> usize {
        self.city
    }

    pub fn get_hub(&self) -> Option<usize> {
        self.hub
    }

    pub fn get_dist(&self) -> Dist<W> {
        self.dist
    }
} // end of impl block Assignment

//==================================================================================

/// Exhaustive search of the nb_hubs cities minimizing the total distance of every
/// city to its nearest hub. The matrix is expected closed by
/// [shortest_paths](super::apsp::shortest_paths) and is only read.
pub struct HubSelector<'a, W: PrimInt> {
    //
    matrix: &'a DistanceMatrix<W>,
    //
    nb_hubs: usize,
} // end of struct HubSelector

impl<'a, W> HubSelector<'a, W>
where
    W: PrimInt + CheckedAdd + Send + Sync,
{
    /// refuses a hub count outside [1, nb_cities] before any search is attempted
    pub fn new(matrix: &'a DistanceMatrix<W>, nb_hubs: usize) -> Result<Self> {
        let nb_cities = matrix.get_nb_cities();
        if nb_hubs < 1 || nb_hubs > nb_cities {
            bail!(
                "nb_hubs must be in [1, {}], got : {}",
                nb_cities,
                nb_hubs
            );
        }
        Ok(HubSelector { matrix, nb_hubs })
    } // end of new

    /// run the sweep. Returns the optimal selection, or None if no subset of exactly
    /// nb_hubs cities exists, which cannot happen for the parameters new() accepts
    /// but is reported rather than trusted.
    pub fn select(&self) -> Option<HubSelection<W>> {
        //
        let cpu_start = ProcessTime::now();
        let sys_now = SystemTime::now();
        //
        let nb_cities = self.matrix.get_nb_cities();
        let nb_masks = 1u64 << nb_cities;
        let best = if nb_cities >= PARALLEL_THRESHOLD {
            log::info!(
                "sweeping {} masks on the rayon pool, nb cpus : {}",
                nb_masks,
                num_cpus::get()
            );
            self.sweep_parallel(nb_masks)
        } else {
            self.sweep_sequential(nb_masks)
        };
        //
        log::info!(
            "hub sweep done, sys time(ms) {:?} cpu time(ms) {:?}",
            sys_now.elapsed().unwrap().as_millis(),
            cpu_start.elapsed().as_millis()
        );
        //
        best.map(|(cost, mask)| HubSelection {
            hubs: extract_cities(mask, nb_cities),
            cost,
            mask,
        })
    } // end of select

    // ascending mask order, a strictly better cost replaces, so the earliest mask
    // wins ties
    fn sweep_sequential(&self, nb_masks: u64) -> Option<(W, u64)> {
        let mut best: Option<(W, u64)> = None;
        for mask in 0..nb_masks {
            if mask.count_ones() as usize != self.nb_hubs {
                continue;
            }
            let cost = match self.eval_mask(mask).finite() {
                Some(c) => c,
                None => continue,
            };
            match best {
                Some((c, _)) if cost >= c => {}
                _ => {
                    best = Some((cost, mask));
                }
            }
        }
        best
    } // end of sweep_sequential

    // the minimum over (cost, mask) pairs has the earliest mask among equal costs,
    // so the reduction reproduces the sequential winner for any worker count
    fn sweep_parallel(&self, nb_masks: u64) -> Option<(W, u64)> {
        (0..nb_masks)
            .into_par_iter()
            .filter(|mask| mask.count_ones() as usize == self.nb_hubs)
            .filter_map(|mask| self.eval_mask(mask).finite().map(|cost| (cost, mask)))
            .min()
    } // end of sweep_parallel

    // total assignment cost of the hub subset encoded in mask. A city unreachable
    // from every hub contributes nothing; a total beyond W::MAX degrades to
    // Unreachable and the candidate drops out.
    fn eval_mask(&self, mask: u64) -> Dist<W> {
        let nb_cities = self.matrix.get_nb_cities();
        let mut total = Dist::zero();
        for city in 0..nb_cities {
            let mut nearest = Dist::Unreachable;
            let mut bits = mask;
            while bits != 0 {
                let hub = bits.trailing_zeros() as usize;
                let d = self.matrix.get_dist(city, hub);
                if d < nearest {
                    nearest = d;
                }
                bits &= bits - 1;
            }
            if nearest.is_finite() {
                total = total.checked_add(nearest);
            }
        }
        total
    } // end of eval_mask

    /// affect every city to its nearest hub of a selection, lowest hub index on
    /// equal distance
    pub fn dispatch(&self, selection: &HubSelection<W>) -> Vec<Assignment<W>> {
        let nb_cities = self.matrix.get_nb_cities();
        let mut assignments = Vec::<Assignment<W>>::with_capacity(nb_cities);
        for city in 0..nb_cities {
            let mut hub: Option<usize> = None;
            let mut nearest = Dist::Unreachable;
            for &h in selection.get_hubs() {
                let d = self.matrix.get_dist(city, h);
                if d < nearest {
                    nearest = d;
                    hub = Some(h);
                }
            }
            assignments.push(Assignment {
                city,
                hub,
                dist: nearest,
            });
        }
        assignments
    } // end of dispatch
} // end of impl block HubSelector

// set city indices of a mask, increasing
fn extract_cities(mask: u64, nb_cities: usize) -> Vec<usize> {
    (0..nb_cities)
        .filter(|city| mask & (1u64 << city) != 0)
        .collect()
} // end of extract_cities

/// Dumps each city with its hub and distance. If Ok returns number of record dumped.
/// The dump is a csv file whose name is *hubassign-pid.csv* where pid is the pid of
/// the process. A city no hub reaches gets the -1 marker in both fields.
pub fn dump_assignments<W>(assignments: &[Assignment<W>]) -> Result<usize>
where
    W: PrimInt + std::fmt::Debug,
{
    //
    let pid = std::process::id().to_string();
    let mut name = String::from("hubassign-");
    name.push_str(&pid);
    name.push_str(".csv");
    let file = std::fs::File::create(&name)?;
    let mut bufw = std::io::BufWriter::new(file);
    let mut nb_record = 0;
    //
    for a in assignments {
        match (a.get_hub(), a.get_dist().finite()) {
            (Some(hub), Some(d)) => writeln!(bufw, "{},{},{:?}", a.get_city(), hub, d)?,
            _ => writeln!(bufw, "{},-1,-1", a.get_city())?,
        }
        nb_record += 1;
    }
    log::info!(
        "hub assignment dumped in file {:?} , nb_record : {:?}",
        name,
        nb_record
    );
    //
    Ok(nb_record)
} // end of dump_assignments

// end of mod tests
