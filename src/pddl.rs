pub mod action;
pub mod settings;
pub mod domain;
pub mod fluent;
pub mod graph;
pub mod heuristic;
pub mod kb;
pub mod predicate;
pub mod problem;
pub mod scenario;
pub mod state;

mod utils;
