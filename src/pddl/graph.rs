use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::predicate::Proposition;
use super::problem::AirCargoProblem;
use super::state::EncodedState;

/// Outcome of a level-sum query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSum {
    Finite(usize),
    /// The graph levelled off before this goal proposition appeared.
    Unreachable(Proposition),
}

/// Planning graph builder used by the level-sum heuristic.
pub trait PlanningGraph {
    fn level_sum(&self, problem: &AirCargoProblem, state: &EncodedState) -> LevelSum;
}

/// Planning graph without mutex propagation.
///
/// Literal levels hold signed literals. Level 0 is the state itself, every
/// state map entry being either true or false. An action enters level `i` if
/// its positive preconditions are true literals and its negative ones false
/// literals of level `i`; level `i + 1` is level `i` (persistence) plus the
/// effects of those actions. Propositions outside the state map stay false,
/// as they do in the search itself. Construction stops once every goal has
/// appeared or the literal level stops growing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaxedPlanningGraph;

type Literal<'a> = (&'a Proposition, bool);

impl PlanningGraph for RelaxedPlanningGraph {
    fn level_sum(&self, problem: &AirCargoProblem, state: &EncodedState) -> LevelSum {
        let map = problem.state_map();
        let mut literals: HashSet<Literal> = map.iter().zip(state.iter()).collect();
        let mut first_level: HashMap<&Proposition, usize> = HashMap::new();
        let mut level = 0;
        loop {
            for g in problem.goal() {
                if !first_level.contains_key(g) && literals.contains(&(g, true)) {
                    first_level.insert(g, level);
                }
            }
            if first_level.len() == problem.goal().len() {
                let sum: usize = first_level.values().sum();
                debug!(levels = level, sum, "Planning graph reached every goal");
                return LevelSum::Finite(sum);
            }

            let mut next = literals.clone();
            for action in problem.ground_actions() {
                let enabled = action.precond_pos.iter().all(|p| literals.contains(&(p, true)))
                    && action.precond_neg.iter().all(|p| !map.contains(p) || literals.contains(&(p, false)));
                if enabled {
                    next.extend(action.effect_add.iter().filter(|p| map.contains(p)).map(|p| (p, true)));
                    next.extend(action.effect_rem.iter().filter(|p| map.contains(p)).map(|p| (p, false)));
                }
            }

            if next.len() == literals.len() {
                let missing = problem.goal().iter().find(|g| !first_level.contains_key(*g));
                debug!(levels = level, "Planning graph levelled off");
                return match missing {
                    Some(g) => LevelSum::Unreachable(g.clone()),
                    None => LevelSum::Finite(first_level.values().sum()),
                };
            }
            literals = next;
            level += 1;
        }
    }
}
