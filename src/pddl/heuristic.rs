use std::collections::HashSet;

use crate::error::{Error, Result};
use super::action::Action;
use super::graph::{LevelSum, PlanningGraph, RelaxedPlanningGraph};
use super::predicate::Proposition;
use super::problem::{AirCargoProblem, SearchProblem};
use super::state::EncodedState;

/// Anything a search keeps per expanded state.
pub trait SearchNode {
    fn state(&self) -> &EncodedState;
}

impl SearchNode for EncodedState {
    fn state(&self) -> &EncodedState {
        self
    }
}

/// Minimal search tree node: the state plus how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    state: EncodedState,
    action: Option<Proposition>,
    path_cost: usize,
    depth: usize,
}

impl Node {
    pub fn root(problem: &AirCargoProblem) -> Node {
        Node { state: problem.initial_state().clone(), action: None, path_cost: 0, depth: 0 }
    }

    pub fn child(&self, problem: &AirCargoProblem, action: &Action) -> Node {
        let state = problem.result(&self.state, action);
        let path_cost = self.path_cost + problem.step_cost(&self.state, action, &state);
        Node { state, action: Some(action.name.clone()), path_cost, depth: self.depth + 1 }
    }

    /// Name of the action that produced this node, `None` at the root.
    pub fn action(&self) -> Option<&Proposition> {
        self.action.as_ref()
    }

    pub fn path_cost(&self) -> usize {
        self.path_cost
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl SearchNode for Node {
    fn state(&self) -> &EncodedState {
        &self.state
    }
}

/// Estimate of the number of actions still needed to reach the goal.
pub trait Heuristic {
    fn estimate<N: SearchNode + ?Sized>(&self, problem: &AirCargoProblem, node: &N) -> Result<usize>;
}

/// Always 1. Not a real heuristic, only a baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unit;

/// Number of goal propositions not yet true.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnorePreconditions;

/// Sum of the first planning graph levels of the goal propositions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanningGraphLevelSum<G = RelaxedPlanningGraph>(pub G);

impl Heuristic for Unit {
    fn estimate<N: SearchNode + ?Sized>(&self, problem: &AirCargoProblem, node: &N) -> Result<usize> {
        Ok(problem.h_1(node))
    }
}

impl Heuristic for IgnorePreconditions {
    fn estimate<N: SearchNode + ?Sized>(&self, problem: &AirCargoProblem, node: &N) -> Result<usize> {
        Ok(problem.h_ignore_preconditions(node))
    }
}

impl<G: PlanningGraph> Heuristic for PlanningGraphLevelSum<G> {
    fn estimate<N: SearchNode + ?Sized>(&self, problem: &AirCargoProblem, node: &N) -> Result<usize> {
        problem.h_pg_levelsum_with(&self.0, node)
    }
}

impl AirCargoProblem {
    pub fn h_1<N: SearchNode + ?Sized>(&self, _node: &N) -> usize {
        1
    }

    /// Each unsatisfied goal proposition needs at least one action, so this
    /// never overestimates.
    pub fn h_ignore_preconditions<N: SearchNode + ?Sized>(&self, node: &N) -> usize {
        let goal: HashSet<&Proposition> = self.goal().iter().collect();
        let truths = self.true_propositions(node.state());
        goal.len() - goal.intersection(&truths).count()
    }

    pub fn h_pg_levelsum<N: SearchNode + ?Sized>(&self, node: &N) -> Result<usize> {
        self.h_pg_levelsum_with(&RelaxedPlanningGraph, node)
    }

    /// Fails with [`Error::Unreachable`] when some goal never shows up in the
    /// graph.
    pub fn h_pg_levelsum_with<G, N>(&self, graph: &G, node: &N) -> Result<usize>
    where
        G: PlanningGraph + ?Sized,
        N: SearchNode + ?Sized,
    {
        match graph.level_sum(self, node.state()) {
            LevelSum::Finite(sum) => Ok(sum),
            LevelSum::Unreachable(goal) => Err(Error::Unreachable(goal)),
        }
    }
}
