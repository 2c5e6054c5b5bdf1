//! dense city to city distance matrix.
//!
//! The matrix is sized at runtime from the number of cities, but the exhaustive hub
//! search sweeps 2^N subset masks so N is capped by [MAX_CITIES].
//! On creation every city is at distance zero from itself and Unreachable from every
//! other city; the host fills in direct road lengths and
//! [shortest_paths](super::apsp::shortest_paths) closes the matrix in place.

use anyhow::{Result, bail};
use ndarray::Array2;
use num_traits::{PrimInt, ToPrimitive};
use quantiles::ckms::CKMS; // we could use also greenwald_khanna

use crate::distance::Dist;

/// Beyond ~25 cities the 2^N subset sweep stops being interactive on commodity hardware.
pub const MAX_CITIES: usize = 25;

/// N x N matrix of distances between cities.
/// After construction entry (i,i) is zero; after the shortest path closure entry (i,j)
/// is the length of a shortest route from i to j or Unreachable if no route exists.
pub struct DistanceMatrix<W: PrimInt> {
    //
    nb_cities: usize,
    //
    dist: Array2<Dist<W>>,
} // end of struct DistanceMatrix

impl<W: PrimInt> DistanceMatrix<W> {
    /// allocate a matrix with zero self distances and every other pair Unreachable
    pub fn new(nb_cities: usize) -> Result<Self> {
        if nb_cities < 1 || nb_cities > MAX_CITIES {
            bail!(
                "nb_cities must be in [1, {}], got : {}",
                MAX_CITIES,
                nb_cities
            );
        }
        let mut dist = Array2::from_elem((nb_cities, nb_cities), Dist::Unreachable);
        for i in 0..nb_cities {
            dist[[i, i]] = Dist::zero();
        }
        Ok(DistanceMatrix { nb_cities, dist })
    } // end of new

    /// build from raw rows, the no-road marker already translated to Unreachable.
    /// Negative finite weights and ragged rows are refused. A nonzero diagonal entry is
    /// kept as given (the closure only ever decreases distances) but logged as suspect.
    pub fn from_rows(rows: &[Vec<Dist<W>>]) -> Result<Self> {
        let nb_cities = rows.len();
        if nb_cities < 1 || nb_cities > MAX_CITIES {
            bail!(
                "nb_cities must be in [1, {}], got : {}",
                MAX_CITIES,
                nb_cities
            );
        }
        let mut dist = Array2::from_elem((nb_cities, nb_cities), Dist::Unreachable);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != nb_cities {
                bail!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    nb_cities
                );
            }
            for (j, &d) in row.iter().enumerate() {
                if let Some(w) = d.finite() {
                    if w < W::zero() {
                        bail!("negative distance at ({},{})", i, j);
                    }
                }
                if i == j && d != Dist::zero() {
                    log::warn!("nonzero self distance for city {}", i);
                }
                dist[[i, j]] = d;
            }
        }
        //
        Ok(DistanceMatrix { nb_cities, dist })
    } // end of from_rows

    /// return number of cities
    pub fn get_nb_cities(&self) -> usize {
        self.nb_cities
    }

    /// distance from city i to city j
    pub fn get_dist(&self, i: usize, j: usize) -> Dist<W> {
        self.dist[[i, j]]
    }

    /// set distance from city i to city j (host side population of direct roads)
    pub fn set_dist(&mut self, i: usize, j: usize, d: Dist<W>) {
        self.dist[[i, j]] = d;
    }

    /// log quantiles of the finite inter city distances, useful to eyeball a scenario
    pub fn log_quantiles(&self) {
        let mut q_dist = CKMS::<f32>::new(0.01);
        let mut nb_finite = 0;
        for i in 0..self.nb_cities {
            for j in 0..self.nb_cities {
                if i == j {
                    continue;
                }
                if let Some(w) = self.dist[[i, j]].finite() {
                    if let Some(x) = w.to_f32() {
                        q_dist.insert(x);
                        nb_finite += 1;
                    }
                }
            }
        }
        if nb_finite == 0 {
            log::info!("no finite inter city distance");
            return;
        }
        log::info!(
            "inter city distance quantiles at 0.05 : {:.2e}, 0.5 : {:.2e}, 0.95 : {:.2e}",
            q_dist.query(0.05).unwrap().1,
            q_dist.query(0.5).unwrap().1,
            q_dist.query(0.95).unwrap().1
        );
    } // end of log_quantiles
} // end of impl block DistanceMatrix

// end of mod tests
