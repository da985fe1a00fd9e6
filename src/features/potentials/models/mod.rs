mod potential;

pub use potential::{Potential, PotentialType};
