use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace, warn};

use crate::error::Result;
use super::action::Action;
use super::domain::AirCargoDomain;
use super::fluent::FluentState;
use super::kb::KnowledgeBase;
use super::predicate::Proposition;
use super::state::{EncodedState, StateMap};
use super::utils::build_prop_string;

/// What a generic forward search needs from a problem.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action;

    fn initial_state(&self) -> &Self::State;

    /// Actions applicable in `state`, in a fixed order.
    fn actions(&self, state: &Self::State) -> Vec<&Self::Action>;

    /// Successor of `state`. `action` must come from `self.actions(state)`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn goal_test(&self, state: &Self::State) -> bool;

    fn step_cost(&self, _state: &Self::State, _action: &Self::Action, _next: &Self::State) -> usize {
        1
    }
}

/// A ground air cargo problem. Immutable once built, so it can be shared by
/// any number of searches.
#[derive(Debug, Clone)]
pub struct AirCargoProblem {
    domain: AirCargoDomain,
    state_map: StateMap,
    actions_list: Vec<Action>,
    initial: EncodedState,
    goal: Vec<Proposition>,
}

impl AirCargoProblem {
    /// The state map is `initial.pos()` followed by `initial.neg()`. Goal
    /// propositions outside of it can never be satisfied.
    pub fn new(domain: AirCargoDomain, initial: &FluentState, goal: Vec<Proposition>) -> Result<AirCargoProblem> {
        let state_map = StateMap::from_fluent(initial)?;
        let initial = state_map.encode(initial);

        let mut unique_goal: Vec<Proposition> = Vec::with_capacity(goal.len());
        for g in goal {
            if !state_map.contains(&g) {
                warn!(goal = %g, "Goal proposition is not in the state map and can never be satisfied");
            }
            if !unique_goal.contains(&g) {
                unique_goal.push(g);
            }
        }

        let actions_list = domain.ground();
        debug!(
            fluents = state_map.len(),
            actions = actions_list.len(),
            cargos = domain.cargos.len(),
            planes = domain.planes.len(),
            airports = domain.airports.len(),
            "Grounded air cargo problem"
        );
        Ok(AirCargoProblem { domain, state_map, actions_list, initial, goal: unique_goal })
    }

    pub fn domain(&self) -> &AirCargoDomain {
        &self.domain
    }

    pub fn state_map(&self) -> &StateMap {
        &self.state_map
    }

    /// Every ground action, whether applicable or not.
    pub fn ground_actions(&self) -> &[Action] {
        &self.actions_list
    }

    pub fn goal(&self) -> &[Proposition] {
        &self.goal
    }

    pub fn find_action(&self, name: &Proposition) -> Option<&Action> {
        self.actions_list.iter().find(|a| &a.name == name)
    }

    pub fn decode(&self, state: &EncodedState) -> FluentState {
        self.state_map.decode(state)
    }

    pub fn encode(&self, state: &FluentState) -> EncodedState {
        self.state_map.encode(state)
    }

    pub fn validate(&self, state: &EncodedState) -> Result<()> {
        self.state_map.validate(state)
    }

    pub fn true_propositions(&self, state: &EncodedState) -> HashSet<&Proposition> {
        debug_assert_eq!(state.len(), self.state_map.len());
        self.state_map.iter().zip(state.iter()).filter(|(_, v)| *v).map(|(p, _)| p).collect()
    }

    /// Applicability checked through a knowledge base told the true fluents
    /// of `state`. Agrees with [`SearchProblem::actions`].
    pub fn actions_entailed<K: KnowledgeBase + Default>(&self, state: &EncodedState) -> Vec<&Action> {
        let kb = self.tell_state::<K>(state);
        self.actions_list.iter().filter(|action| {
            action.precond_pos.iter().all(|clause| kb.entails(clause))
                && !action.precond_neg.iter().any(|clause| kb.entails(clause))
        }).collect()
    }

    /// Goal test through a knowledge base. Agrees with [`SearchProblem::goal_test`].
    pub fn goal_test_entailed<K: KnowledgeBase + Default>(&self, state: &EncodedState) -> bool {
        let kb = self.tell_state::<K>(state);
        self.goal.iter().all(|clause| kb.entails(clause))
    }

    fn tell_state<K: KnowledgeBase + Default>(&self, state: &EncodedState) -> K {
        let mut kb = K::default();
        kb.tell(self.true_propositions(state).into_iter().cloned());
        kb
    }
}

impl SearchProblem for AirCargoProblem {
    type State = EncodedState;
    type Action = Action;

    fn initial_state(&self) -> &EncodedState {
        &self.initial
    }

    fn actions(&self, state: &EncodedState) -> Vec<&Action> {
        let truths = self.true_propositions(state);
        self.actions_list.iter().filter(|action| action.is_applicable(&truths)).collect()
    }

    /// Deletes first, then adds, so a fluent in both lists ends up true.
    /// Effects on propositions outside the state map are dropped.
    fn result(&self, state: &EncodedState, action: &Action) -> EncodedState {
        debug_assert_eq!(state.len(), self.state_map.len());
        let mut next = state.clone();
        for p in &action.effect_rem {
            if let Some(idx) = self.state_map.index_of(p) {
                next.set(idx, false);
            }
        }
        for p in &action.effect_add {
            if let Some(idx) = self.state_map.index_of(p) {
                next.set(idx, true);
            }
        }
        trace!(action = %action.name, from = %state, to = %next, "Applied action");
        next
    }

    fn goal_test(&self, state: &EncodedState) -> bool {
        let truths = self.true_propositions(state);
        self.goal.iter().all(|g| truths.contains(g))
    }
}

impl fmt::Display for AirCargoProblem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "(define (problem air-cargo)")?;
        writeln!(f, " (:objects {} {} {})",
            self.domain.cargos.join(" "), self.domain.planes.join(" "), self.domain.airports.join(" "))?;
        writeln!(f, " (:init {})", build_prop_string(self.decode(&self.initial).pos()))?;
        write!(f, " (:goal (and {})))", build_prop_string(&self.goal))
    }
}
