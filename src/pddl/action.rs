use std::collections::HashSet;
use std::fmt;

use super::predicate::Proposition;
use super::utils::build_prop_string;

/// A fully ground STRIPS action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    pub name: Proposition,
    pub precond_pos: Vec<Proposition>,
    pub precond_neg: Vec<Proposition>,
    pub effect_add: Vec<Proposition>,
    pub effect_rem: Vec<Proposition>,
}

impl Action {
    pub fn new(name: Proposition, precond: [Vec<Proposition>; 2], effect: [Vec<Proposition>; 2]) -> Action {
        let [precond_pos, precond_neg] = precond;
        let [effect_add, effect_rem] = effect;
        Action { name, precond_pos, precond_neg, effect_add, effect_rem }
    }

    /// Every positive precondition is true and no negative one is.
    pub fn is_applicable(&self, truths: &HashSet<&Proposition>) -> bool {
        self.precond_pos.iter().all(|p| truths.contains(p))
            && !self.precond_neg.iter().any(|p| truths.contains(p))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(:action {} :precondition (and {} (not {})) :effect (and {} (not {})))",
            self.name,
            build_prop_string(&self.precond_pos), build_prop_string(&self.precond_neg),
            build_prop_string(&self.effect_add), build_prop_string(&self.effect_rem))
    }
}
