// inclusion facility

pub use crate::distance::*;

pub use crate::matrix::*;

pub use crate::apsp::*;

pub use crate::hubs::*;
