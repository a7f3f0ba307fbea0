use std::collections::HashSet;

use super::predicate::Proposition;

/// Clause store that can be told positive literals and asked whether a
/// literal is entailed.
pub trait KnowledgeBase {
    fn tell<I: IntoIterator<Item = Proposition>>(&mut self, literals: I);

    fn entails(&self, literal: &Proposition) -> bool;
}

/// Propositional KB holding only positive unit clauses, so entailment is
/// clause membership.
#[derive(Debug, Clone, Default)]
pub struct PropKb {
    clauses: HashSet<Proposition>,
}

impl PropKb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clauses(&self) -> &HashSet<Proposition> {
        &self.clauses
    }
}

impl KnowledgeBase for PropKb {
    fn tell<I: IntoIterator<Item = Proposition>>(&mut self, literals: I) {
        self.clauses.extend(literals)
    }

    fn entails(&self, literal: &Proposition) -> bool {
        self.clauses.contains(literal)
    }
}
