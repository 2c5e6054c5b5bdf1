//! host front end for the pmedian crate : scenario file parsing and the hubopt binary.

pub mod io;

// end of tests
