use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};
use super::predicate::Proposition;
use super::utils::build_prop_string;

/// Propositions explicitly asserted true (`pos`) and false (`neg`).
///
/// Only used to describe initial states and to inspect decoded states; search
/// works on [`EncodedState`](super::state::EncodedState).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FluentState {
    pos: Vec<Proposition>,
    neg: Vec<Proposition>,
}

impl FluentState {
    /// Duplicates are dropped keeping the first occurrence. Fails if a
    /// proposition is in both lists.
    pub fn new(pos: Vec<Proposition>, neg: Vec<Proposition>) -> Result<FluentState> {
        let mut state = FluentState::default();
        for p in pos {
            state.assert_true(p)?;
        }
        for p in neg {
            state.assert_false(p)?;
        }
        Ok(state)
    }

    /// Caller guarantees both lists are duplicate free and disjoint.
    pub(crate) fn from_parts(pos: Vec<Proposition>, neg: Vec<Proposition>) -> FluentState {
        FluentState { pos, neg }
    }

    pub fn pos(&self) -> &[Proposition] {
        &self.pos
    }

    pub fn neg(&self) -> &[Proposition] {
        &self.neg
    }

    pub fn pos_set(&self) -> HashSet<&Proposition> {
        self.pos.iter().collect()
    }

    pub fn is_true(&self, p: &Proposition) -> bool {
        self.pos.contains(p)
    }

    pub fn is_false(&self, p: &Proposition) -> bool {
        self.neg.contains(p)
    }

    pub fn assert_true(&mut self, p: Proposition) -> Result<()> {
        if self.neg.contains(&p) {
            return Err(Error::Inconsistent(p));
        }
        if !self.pos.contains(&p) {
            self.pos.push(p);
        }
        Ok(())
    }

    pub fn assert_false(&mut self, p: Proposition) -> Result<()> {
        if self.pos.contains(&p) {
            return Err(Error::Inconsistent(p));
        }
        if !self.neg.contains(&p) {
            self.neg.push(p);
        }
        Ok(())
    }

    /// Asserts `relation(s, o)` for every subject `s` and every `o` in `holds`,
    /// and denies it for every other `o` in `all`.
    ///
    /// `add_relation("At", &["P1"], &["SFO"], &["SFO", "JFK", "ATL"])` makes
    /// `At(P1, SFO)` true and `At(P1, JFK)`, `At(P1, ATL)` false. An empty
    /// `holds` denies the relation for every object in `all`.
    pub fn add_relation<S: AsRef<str>>(&mut self, relation: &str, subjects: &[S], holds: &[S], all: &[S]) -> Result<()> {
        for s in subjects {
            for o in holds {
                self.assert_true(Proposition::new(relation, vec![s.as_ref(), o.as_ref()])?)?;
            }
        }
        for s in subjects {
            for o in all.iter().filter(|o| !holds.iter().any(|h| h.as_ref() == o.as_ref())) {
                self.assert_false(Proposition::new(relation, vec![s.as_ref(), o.as_ref()])?)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for FluentState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(:true {}) (:false {})", build_prop_string(&self.pos), build_prop_string(&self.neg))
    }
}
