use std::collections::HashSet;
use std::path::Path;

use config::{Config, File};
use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use super::domain::AirCargoDomain;
use super::fluent::FluentState;
use super::predicate::Proposition;
use super::problem::AirCargoProblem;

/// `object` (cargo or plane) starts at `airport`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Placement {
    pub object: String,
    pub airport: String,
}

/// `cargo` starts inside `plane`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Loading {
    pub cargo: String,
    pub plane: String,
}

/// Air cargo problem as written in a TOML file:
///
/// ```toml
/// cargos = ["C1", "C2"]
/// planes = ["P1", "P2"]
/// airports = ["JFK", "SFO"]
/// goal = ["At(C1, JFK)", "At(C2, SFO)"]
///
/// [[at]]
/// object = "C1"
/// airport = "SFO"
///
/// [[loaded]]
/// cargo = "C2"
/// plane = "P2"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioConfig {
    pub cargos: Vec<String>,
    pub planes: Vec<String>,
    pub airports: Vec<String>,
    pub goal: Vec<String>,
    #[serde(default)]
    pub at: Vec<Placement>,
    #[serde(default)]
    pub loaded: Vec<Loading>,
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig> {
        let s = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?;
        Ok(s.try_deserialize()?)
    }

    /// Every listed placement is true at its airport and false at the others;
    /// every cargo is inside its listed plane, or inside none of them.
    pub fn initial_state(&self) -> Result<FluentState> {
        let is_cargo = |o: &str| self.cargos.iter().any(|c| c == o);
        let is_plane = |o: &str| self.planes.iter().any(|p| p == o);
        let is_airport = |o: &str| self.airports.iter().any(|a| a == o);

        let airports: Vec<&String> = self.airports.iter().collect();
        let planes: Vec<&String> = self.planes.iter().collect();
        let mut placed = HashSet::new();
        let mut init = FluentState::default();
        for Placement { object, airport } in &self.at {
            if !is_cargo(object.as_str()) && !is_plane(object.as_str()) {
                return Err(Error::Configuration(format!("{} is neither a cargo nor a plane", object)));
            }
            if !is_airport(airport.as_str()) {
                return Err(Error::Configuration(format!("{} is not an airport", airport)));
            }
            if !placed.insert(object.as_str()) {
                return Err(Error::Configuration(format!("{} is placed more than once", object)));
            }
            init.add_relation("At", &[object], &[airport], &airports)?;
        }

        for Loading { cargo, plane } in &self.loaded {
            if !is_cargo(cargo.as_str()) {
                return Err(Error::Configuration(format!("{} is not a cargo", cargo)));
            }
            if !is_plane(plane.as_str()) {
                return Err(Error::Configuration(format!("{} is not a plane", plane)));
            }
            if !placed.insert(cargo.as_str()) {
                return Err(Error::Configuration(format!("{} is placed more than once", cargo)));
            }
            init.add_relation("At", &[cargo], &[], &airports)?;
            init.add_relation("In", &[cargo], &[plane], &planes)?;
        }

        for cargo in self.cargos.iter().filter(|c| !self.loaded.iter().any(|l| &l.cargo == *c)) {
            init.add_relation("In", &[cargo], &[], &planes)?;
        }
        Ok(init)
    }

    pub fn goal(&self) -> Result<Vec<Proposition>> {
        self.goal.iter().map(|g| g.parse()).collect()
    }

    pub fn into_problem(self) -> Result<AirCargoProblem> {
        let init = self.initial_state()?;
        let goal = self.goal()?;
        AirCargoProblem::new(AirCargoDomain::new(self.cargos, self.planes, self.airports), &init, goal)
    }
}

impl AirCargoProblem {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<AirCargoProblem> {
        info!(path = %path.as_ref().display(), "Loading air cargo scenario");
        ScenarioConfig::from_file(path)?.into_problem()
    }
}
