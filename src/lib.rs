pub mod pddl;
pub mod error;

pub use error::{Error, Result};
pub use pddl::problem::{AirCargoProblem, SearchProblem};
