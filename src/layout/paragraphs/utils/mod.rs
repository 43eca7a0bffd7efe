//! Set of utility functions for the various stages of the line breaking
//! algorithm.

pub mod linebreak;
