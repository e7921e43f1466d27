pub mod error;
pub mod intcode;
pub mod solver;
