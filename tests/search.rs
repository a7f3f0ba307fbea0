use std::cmp::Reverse;
use std::collections::{HashMap, HashSet, VecDeque};

use priority_queue::PriorityQueue;

use air_cargo::pddl::action::Action;
use air_cargo::pddl::kb::PropKb;
use air_cargo::pddl::scenario::{scenario_medium, scenario_small};
use air_cargo::pddl::state::EncodedState;
use air_cargo::{AirCargoProblem, SearchProblem};

/// A* over the search problem contract. Returns the action names of an
/// optimal plan when `heuristic` is admissible.
fn astar<F>(problem: &AirCargoProblem, heuristic: F) -> Option<Vec<String>>
where
    F: Fn(&EncodedState) -> usize,
{
    let start = problem.initial_state().clone();
    let mut open = PriorityQueue::new();
    let mut g_score: HashMap<EncodedState, usize> = HashMap::new();
    let mut came_from: HashMap<EncodedState, (EncodedState, String)> = HashMap::new();
    let mut closed: HashSet<EncodedState> = HashSet::new();

    open.push(start.clone(), Reverse(heuristic(&start)));
    g_score.insert(start, 0);

    while let Some((current, _)) = open.pop() {
        if problem.goal_test(&current) {
            let mut plan = Vec::new();
            let mut state = current;
            while let Some((parent, action)) = came_from.get(&state) {
                plan.push(action.clone());
                state = parent.clone();
            }
            plan.reverse();
            return Some(plan);
        }
        closed.insert(current.clone());
        let g = g_score[&current];
        for action in problem.actions(&current) {
            let next = problem.result(&current, action);
            if closed.contains(&next) {
                continue;
            }
            let tentative = g + problem.step_cost(&current, action, &next);
            if g_score.get(&next).map_or(true, |known| tentative < *known) {
                g_score.insert(next.clone(), tentative);
                came_from.insert(next.clone(), (current.clone(), action.name.to_string()));
                let f = tentative + heuristic(&next);
                if open.change_priority(&next, Reverse(f)).is_none() {
                    open.push(next, Reverse(f));
                }
            }
        }
    }
    None
}

fn reachable(problem: &AirCargoProblem, limit: usize) -> Vec<EncodedState> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(problem.initial_state().clone());
    seen.insert(problem.initial_state().clone());
    while let Some(state) = queue.pop_front() {
        if order.len() >= limit {
            break;
        }
        for action in problem.actions(&state) {
            let next = problem.result(&state, action);
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
        order.push(state);
    }
    order
}

fn replay(problem: &AirCargoProblem, plan: &[String]) -> Vec<EncodedState> {
    let mut states = vec![problem.initial_state().clone()];
    for name in plan {
        let state = states.last().unwrap();
        let action: &Action = problem.actions(state).into_iter()
            .find(|a| &a.name.to_string() == name)
            .expect("plan step is not applicable");
        let next = problem.result(state, action);
        states.push(next);
    }
    states
}

#[test]
fn small_uniform_cost_plan_has_six_actions() {
    let problem = scenario_small().unwrap();
    let plan = astar(&problem, |_| 0).unwrap();
    assert_eq!(plan.len(), 6);
    assert!(problem.goal_test(replay(&problem, &plan).last().unwrap()));
}

#[test]
fn small_ignore_preconditions_is_admissible() {
    let problem = scenario_small().unwrap();
    assert!(problem.h_ignore_preconditions(problem.initial_state()) <= 6);

    let plan = astar(&problem, |s| problem.h_ignore_preconditions(s)).unwrap();
    assert_eq!(plan.len(), 6);
    let states = replay(&problem, &plan);
    for (i, state) in states.iter().enumerate() {
        assert!(problem.h_ignore_preconditions(state) <= plan.len() - i);
    }
}

#[test]
fn small_levelsum_finds_a_plan() {
    let problem = scenario_small().unwrap();
    let plan = astar(&problem, |s| problem.h_pg_levelsum(s).unwrap()).unwrap();
    assert!(plan.len() >= 6);
    assert!(problem.goal_test(replay(&problem, &plan).last().unwrap()));
}

#[test]
fn medium_ignore_preconditions_plan_has_nine_actions() {
    let problem = scenario_medium().unwrap();
    let plan = astar(&problem, |s| problem.h_ignore_preconditions(s)).unwrap();
    assert_eq!(plan.len(), 9);
    let states = replay(&problem, &plan);
    assert!(problem.goal_test(states.last().unwrap()));
    for (i, state) in states.iter().enumerate() {
        assert!(problem.h_ignore_preconditions(state) <= plan.len() - i);
    }
}

#[test]
fn set_and_entailment_strategies_agree() {
    for problem in &[scenario_small().unwrap(), scenario_medium().unwrap()] {
        for state in reachable(problem, 2000) {
            assert_eq!(problem.actions(&state), problem.actions_entailed::<PropKb>(&state), "actions differ in {}", state);
            assert_eq!(problem.goal_test(&state), problem.goal_test_entailed::<PropKb>(&state), "goal test differs in {}", state);
        }
    }
}

#[test]
fn decode_encode_round_trips_on_reachable_states() {
    let problem = scenario_small().unwrap();
    for state in reachable(&problem, usize::MAX) {
        assert_eq!(problem.encode(&problem.decode(&state)), state);
        assert_eq!(problem.decode(&state).pos().len(), state.count_true());
    }
}
