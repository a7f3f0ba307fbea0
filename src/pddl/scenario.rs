use crate::error::{Error, Result};
use super::domain::{at, inside, AirCargoDomain};
use super::fluent::FluentState;
use super::problem::AirCargoProblem;

/// Two cargos, two planes, JFK and SFO. Optimal plans have 6 actions.
pub fn scenario_small() -> Result<AirCargoProblem> {
    let cargos = vec!["C1", "C2"];
    let planes = vec!["P1", "P2"];
    let airports = vec!["JFK", "SFO"];
    let pos = vec![
        at("C1", "SFO"),
        at("C2", "JFK"),
        at("P1", "SFO"),
        at("P2", "JFK"),
    ];
    let neg = vec![
        at("C2", "SFO"),
        inside("C2", "P1"),
        inside("C2", "P2"),
        at("C1", "JFK"),
        inside("C1", "P1"),
        inside("C1", "P2"),
        at("P1", "JFK"),
        at("P2", "SFO"),
    ];
    let init = FluentState::new(pos, neg)?;
    let goal = vec![
        at("C1", "JFK"),
        at("C2", "SFO"),
    ];
    AirCargoProblem::new(AirCargoDomain::new(cargos, planes, airports), &init, goal)
}

/// Three cargos, three planes, JFK, SFO and ATL. Optimal plans have 9 actions.
pub fn scenario_medium() -> Result<AirCargoProblem> {
    let cargos = ["C1", "C2", "C3"];
    let planes = ["P1", "P2", "P3"];
    let airports = ["JFK", "SFO", "ATL"];
    let mut init = FluentState::default();

    init.add_relation("At", &["C1"], &["SFO"], &airports)?;
    init.add_relation("At", &["C2"], &["JFK"], &airports)?;
    init.add_relation("At", &["C3"], &["ATL"], &airports)?;

    init.add_relation("At", &["P1"], &["SFO"], &airports)?;
    init.add_relation("At", &["P2"], &["JFK"], &airports)?;
    init.add_relation("At", &["P3"], &["ATL"], &airports)?;

    // nothing is loaded yet
    init.add_relation("In", &cargos, &[], &planes)?;

    let goal = vec![
        at("C1", "JFK"),
        at("C2", "SFO"),
        at("C3", "SFO"),
    ];
    AirCargoProblem::new(AirCargoDomain::new(cargos.to_vec(), planes.to_vec(), airports.to_vec()), &init, goal)
}

/// Four cargos, two planes, JFK, SFO, ATL and ORD. Optimal plans have 12 actions.
pub fn scenario_large() -> Result<AirCargoProblem> {
    let cargos = ["C1", "C2", "C3", "C4"];
    let planes = ["P1", "P2"];
    let airports = ["JFK", "SFO", "ATL", "ORD"];
    let mut init = FluentState::default();

    init.add_relation("At", &["C1"], &["SFO"], &airports)?;
    init.add_relation("At", &["C2"], &["JFK"], &airports)?;
    init.add_relation("At", &["C3"], &["ATL"], &airports)?;
    init.add_relation("At", &["C4"], &["ORD"], &airports)?;

    init.add_relation("At", &["P1"], &["SFO"], &airports)?;
    init.add_relation("At", &["P2"], &["JFK"], &airports)?;

    init.add_relation("In", &cargos, &[], &planes)?;

    let goal = vec![
        at("C1", "JFK"),
        at("C2", "SFO"),
        at("C3", "JFK"),
        at("C4", "SFO"),
    ];
    AirCargoProblem::new(AirCargoDomain::new(cargos.to_vec(), planes.to_vec(), airports.to_vec()), &init, goal)
}

pub const SCENARIOS: [&str; 3] = ["small", "medium", "large"];

pub fn by_name(name: &str) -> Result<AirCargoProblem> {
    match name {
        "small" => scenario_small(),
        "medium" => scenario_medium(),
        "large" => scenario_large(),
        _ => Err(Error::Configuration(format!(
            "unknown scenario \"{}\", expected one of {}", name, SCENARIOS.join(", ")))),
    }
}
