use super::action::Action;
use super::predicate::Proposition;

/// Objects of an air cargo problem and the Load/Unload/Fly action schemas
/// over them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AirCargoDomain {
    pub cargos: Vec<String>,
    pub planes: Vec<String>,
    pub airports: Vec<String>,
}

pub(crate) fn at(object: &str, airport: &str) -> Proposition {
    Proposition::from_static("At", &[object, airport])
}

pub(crate) fn inside(cargo: &str, plane: &str) -> Proposition {
    Proposition::from_static("In", &[cargo, plane])
}

impl AirCargoDomain {
    pub fn new<S: Into<String>>(cargos: Vec<S>, planes: Vec<S>, airports: Vec<S>) -> Self {
        AirCargoDomain {
            cargos: cargos.into_iter().map(Into::into).collect(),
            planes: planes.into_iter().map(Into::into).collect(),
            airports: airports.into_iter().map(Into::into).collect(),
        }
    }

    /// `Load(c, p, a)`: needs `At(c, a)` and `At(p, a)`, adds `In(c, p)`,
    /// deletes `At(c, a)`.
    pub fn load_actions(&self) -> Vec<Action> {
        let mut loads = Vec::with_capacity(self.airports.len() * self.cargos.len() * self.planes.len());
        for a in &self.airports {
            for c in &self.cargos {
                for p in &self.planes {
                    loads.push(Action::new(
                        Proposition::from_static("Load", &[c, p, a]),
                        [vec![at(c, a), at(p, a)], vec![]],
                        [vec![inside(c, p)], vec![at(c, a)]],
                    ));
                }
            }
        }
        loads
    }

    /// `Unload(c, p, a)`: needs `In(c, p)` and `At(p, a)`, adds `At(c, a)`,
    /// deletes `In(c, p)`.
    pub fn unload_actions(&self) -> Vec<Action> {
        let mut unloads = Vec::with_capacity(self.airports.len() * self.cargos.len() * self.planes.len());
        for a in &self.airports {
            for c in &self.cargos {
                for p in &self.planes {
                    unloads.push(Action::new(
                        Proposition::from_static("Unload", &[c, p, a]),
                        [vec![inside(c, p), at(p, a)], vec![]],
                        [vec![at(c, a)], vec![inside(c, p)]],
                    ));
                }
            }
        }
        unloads
    }

    /// `Fly(p, from, to)` for every ordered pair of distinct airports.
    pub fn fly_actions(&self) -> Vec<Action> {
        let n = self.airports.len();
        let mut flys = Vec::with_capacity(self.planes.len() * n * n.saturating_sub(1));
        for from in &self.airports {
            for to in self.airports.iter().filter(|to| *to != from) {
                for p in &self.planes {
                    flys.push(Action::new(
                        Proposition::from_static("Fly", &[p, from, to]),
                        [vec![at(p, from)], vec![]],
                        [vec![at(p, to)], vec![at(p, from)]],
                    ));
                }
            }
        }
        flys
    }

    /// All ground actions: loads, then unloads, then flights. Expensive, the
    /// problem calls this once and keeps the result.
    pub fn ground(&self) -> Vec<Action> {
        let mut actions = self.load_actions();
        actions.extend(self.unload_actions());
        actions.extend(self.fly_actions());
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> Proposition {
        text.parse().unwrap()
    }

    fn domain(c: usize, pl: usize, a: usize) -> AirCargoDomain {
        AirCargoDomain::new(
            (1..=c).map(|i| format!("C{}", i)).collect(),
            (1..=pl).map(|i| format!("P{}", i)).collect(),
            (1..=a).map(|i| format!("A{}", i)).collect(),
        )
    }

    #[test]
    fn test_cardinality() {
        for &(c, pl, a) in &[(2, 2, 2), (3, 3, 3), (4, 2, 4), (1, 3, 5), (0, 2, 3), (2, 0, 3), (2, 2, 0), (2, 2, 1)] {
            let d = domain(c, pl, a);
            assert_eq!(d.load_actions().len(), c * pl * a);
            assert_eq!(d.unload_actions().len(), c * pl * a);
            assert_eq!(d.fly_actions().len(), pl * a * a.saturating_sub(1));
            assert_eq!(d.ground().len(), 2 * c * pl * a + pl * a * a.saturating_sub(1));
        }
    }

    #[test]
    fn test_load_schema() {
        let d = AirCargoDomain::new(vec!["C1"], vec!["P1"], vec!["SFO"]);
        let load = &d.load_actions()[0];
        assert_eq!(load.name, p("Load(C1, P1, SFO)"));
        assert_eq!(load.precond_pos, vec![p("At(C1, SFO)"), p("At(P1, SFO)")]);
        assert!(load.precond_neg.is_empty());
        assert_eq!(load.effect_add, vec![p("In(C1, P1)")]);
        assert_eq!(load.effect_rem, vec![p("At(C1, SFO)")]);
    }

    #[test]
    fn test_unload_schema() {
        let d = AirCargoDomain::new(vec!["C1"], vec!["P1"], vec!["SFO"]);
        let unload = &d.unload_actions()[0];
        assert_eq!(unload.name, p("Unload(C1, P1, SFO)"));
        assert_eq!(unload.precond_pos, vec![p("In(C1, P1)"), p("At(P1, SFO)")]);
        assert_eq!(unload.effect_add, vec![p("At(C1, SFO)")]);
        assert_eq!(unload.effect_rem, vec![p("In(C1, P1)")]);
    }

    #[test]
    fn test_fly_schema() {
        let d = AirCargoDomain::new(vec!["C1"], vec!["P1"], vec!["JFK", "SFO"]);
        let names: Vec<String> = d.fly_actions().iter().map(|a| a.name.to_string()).collect();
        assert_eq!(names, vec!["Fly(P1, JFK, SFO)", "Fly(P1, SFO, JFK)"]);
        let fly = &d.fly_actions()[0];
        assert_eq!(fly.precond_pos, vec![p("At(P1, JFK)")]);
        assert_eq!(fly.effect_add, vec![p("At(P1, SFO)")]);
        assert_eq!(fly.effect_rem, vec![p("At(P1, JFK)")]);
    }

    #[test]
    fn test_ground_order() {
        let d = domain(1, 1, 2);
        let relations: Vec<String> = d.ground().iter().map(|a| a.name.relation().to_owned()).collect();
        assert_eq!(relations, vec!["Load", "Load", "Unload", "Unload", "Fly", "Fly"]);
    }
}
